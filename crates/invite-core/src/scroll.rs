//! Virtual scroll position shared by every animated layer.
//!
//! Input handlers push raw deltas into [`ScrollTracker`]; the frame loop calls
//! [`ScrollTracker::step`] once per frame and reads [`ScrollTracker::percent`].

use crate::constants::{
    LINE_HEIGHT_PX, SCROLL_MAX_PERCENT, SCROLL_SMOOTH_TAU_SEC, SCROLL_SNAP_EPSILON,
    WHEEL_PX_PER_PERCENT,
};

/// `WheelEvent.deltaMode` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

/// Normalize a wheel delta to pixels.
#[inline]
pub fn wheel_delta_px(delta: f64, mode: DeltaMode, viewport_px: f64) -> f32 {
    if !delta.is_finite() {
        return 0.0;
    }
    let px = match mode {
        DeltaMode::Pixel => delta,
        DeltaMode::Line => delta * LINE_HEIGHT_PX as f64,
        DeltaMode::Page => delta * viewport_px.max(1.0),
    };
    px as f32
}

/// Scroll percentage of a native scroll container. A container with nothing
/// to scroll reports 0 instead of NaN.
#[inline]
pub fn percent_from_scroll(scroll_top: f64, scroll_height: f64, client_height: f64) -> f32 {
    let range = scroll_height - client_height;
    if !range.is_finite() || range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    ((scroll_top / range) * SCROLL_MAX_PERCENT as f64).clamp(0.0, SCROLL_MAX_PERCENT as f64) as f32
}

#[derive(Clone, Debug)]
pub struct ScrollTracker {
    current: f32,
    target: f32,
    locked: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            // scrolling stays locked until the cover overlay is dismissed
            locked: true,
        }
    }

    pub fn percent(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Move the target by a pixel delta (wheel or touch).
    pub fn push_pixels(&mut self, delta_px: f32) {
        self.push_percent(delta_px / WHEEL_PX_PER_PERCENT);
    }

    pub fn push_percent(&mut self, delta: f32) {
        if self.locked || !delta.is_finite() {
            return;
        }
        self.target = (self.target + delta).clamp(0.0, SCROLL_MAX_PERCENT);
    }

    pub fn jump_to(&mut self, percent: f32) {
        if self.locked || !percent.is_finite() {
            return;
        }
        self.target = percent.clamp(0.0, SCROLL_MAX_PERCENT);
    }

    /// Ease `current` toward `target`. Returns true while still moving.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        let diff = self.target - self.current;
        if diff.abs() <= SCROLL_SNAP_EPSILON {
            self.current = self.target;
            return false;
        }
        let alpha = 1.0 - (-dt / SCROLL_SMOOTH_TAU_SEC).exp();
        self.current += diff * alpha;
        if (self.target - self.current).abs() <= SCROLL_SNAP_EPSILON {
            self.current = self.target;
        }
        true
    }
}
