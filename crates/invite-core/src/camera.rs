//! Camera path for the background scene.
//!
//! Scroll percent drives a walk through the gate (dolly), then a pan down the
//! aisle toward the stage. The pan's vertical floor comes from
//! [`Y_FLOOR_STOPS`], so the thresholds are data rather than branches.

use crate::constants::{
    CAMERA_FOVY_DEG, DOLLY_END_PERCENT, DOLLY_RATE, ENTRY_EYE, EYE_LEVEL_UNTIL_PERCENT,
    GATE_TARGET, PAN_SPEED, SCROLL_MAX_PERCENT, STAGE_TARGET, TAPER_END_PERCENT, TAPER_RATE,
    X_LIMIT, Y_LIMIT,
};
use crate::fade::smoothstep;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_pose(pose: CameraPose, aspect: f32) -> Self {
        Self {
            eye: pose.eye,
            target: pose.target,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub const ENTRY: CameraPose = CameraPose {
        eye: Vec3::from_array(ENTRY_EYE),
        target: Vec3::from_array(GATE_TARGET),
    };
}

/// One stop of a piecewise-linear limit: from `from` percent onward the limit
/// is `limit - rate * (p - from)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimitStop {
    pub from: f32,
    pub limit: f32,
    pub rate: f32,
}

/// Floor for the camera's Y while panning: held at eye level, then tapered
/// down to `Y_LIMIT`. The eye cannot drop until the taper passes below its
/// straight descent (41%).
pub const Y_FLOOR_STOPS: [LimitStop; 3] = [
    LimitStop {
        from: DOLLY_END_PERCENT,
        limit: ENTRY_EYE[1],
        rate: 0.0,
    },
    LimitStop {
        from: EYE_LEVEL_UNTIL_PERCENT,
        limit: ENTRY_EYE[1],
        rate: TAPER_RATE,
    },
    LimitStop {
        from: TAPER_END_PERCENT,
        limit: Y_LIMIT,
        rate: 0.0,
    },
];

/// Evaluate a stop table at `p`; never below `Y_LIMIT`.
pub fn floor_at(stops: &[LimitStop], p: f32) -> f32 {
    let stop = stops.iter().rev().find(|s| p >= s.from).or(stops.first());
    match stop {
        Some(s) => (s.limit - s.rate * (p - s.from).max(0.0)).max(Y_LIMIT),
        None => Y_LIMIT,
    }
}

/// Dolly region, `0 ≤ p ≤ DOLLY_END_PERCENT`.
fn dolly_pose(p: f32) -> CameraPose {
    let entry = CameraPose::ENTRY;
    CameraPose {
        eye: Vec3::new(entry.eye.x, entry.eye.y, entry.eye.z - DOLLY_RATE * p),
        target: entry.target,
    }
}

/// Pan region, `DOLLY_END_PERCENT ≤ p ≤ 100`.
fn pan_pose(p: f32) -> CameraPose {
    let start = dolly_pose(DOLLY_END_PERCENT);
    let t = (p - DOLLY_END_PERCENT).max(0.0);
    let x = (start.eye.x - PAN_SPEED * t).max(X_LIMIT);
    let y = (start.eye.y - PAN_SPEED * t).max(floor_at(&Y_FLOOR_STOPS, p));
    let blend = smoothstep(t / (SCROLL_MAX_PERCENT - DOLLY_END_PERCENT));
    let target = Vec3::from_array(GATE_TARGET).lerp(Vec3::from_array(STAGE_TARGET), blend);
    CameraPose {
        eye: Vec3::new(x, y, start.eye.z),
        target,
    }
}

/// Camera pose for a scroll percent. Non-finite input yields the entry pose.
pub fn pose_at(percent: f32) -> CameraPose {
    if !percent.is_finite() {
        return CameraPose::ENTRY;
    }
    let p = percent.clamp(0.0, SCROLL_MAX_PERCENT);
    if p <= DOLLY_END_PERCENT {
        dolly_pose(p)
    } else {
        pan_pose(p)
    }
}

/// CSS `matrix3d(...)` for a world→view matrix, with world units scaled to
/// `unit_px` and Y flipped to CSS's downward axis.
pub fn css_matrix3d(view: &Mat4, unit_px: f32) -> String {
    let to_css = Mat4::from_scale(Vec3::new(unit_px, -unit_px, unit_px));
    let from_css = Mat4::from_scale(Vec3::new(1.0 / unit_px, -1.0 / unit_px, 1.0 / unit_px));
    let m = to_css * *view * from_css;
    let cols = m.to_cols_array();
    let parts: Vec<String> = cols.iter().map(|v| format!("{:.6}", v)).collect();
    format!("matrix3d({})", parts.join(","))
}
