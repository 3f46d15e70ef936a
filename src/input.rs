// Pure input helpers shared by the DOM listeners. No web-sys here so the
// host tests can include this file directly.

use crate::constants::{MAX_FRAME_DT_SEC, TOUCH_DRAG_GAIN};
use invite_core::{ScrollTracker, KEY_STEP_PERCENT, PAGE_STEP_PERCENT, SCROLL_MAX_PERCENT};

/// What a key press does to the virtual scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyScroll {
    /// Relative move in percent.
    Step(f32),
    /// Absolute position in percent.
    Jump(f32),
}

#[inline]
pub fn key_scroll(key: &str, shift: bool) -> Option<KeyScroll> {
    match key {
        "ArrowDown" | "ArrowRight" => Some(KeyScroll::Step(KEY_STEP_PERCENT)),
        "ArrowUp" | "ArrowLeft" => Some(KeyScroll::Step(-KEY_STEP_PERCENT)),
        "PageDown" => Some(KeyScroll::Step(PAGE_STEP_PERCENT)),
        "PageUp" => Some(KeyScroll::Step(-PAGE_STEP_PERCENT)),
        " " if shift => Some(KeyScroll::Step(-PAGE_STEP_PERCENT)),
        " " => Some(KeyScroll::Step(PAGE_STEP_PERCENT)),
        "Home" => Some(KeyScroll::Jump(0.0)),
        "End" => Some(KeyScroll::Jump(SCROLL_MAX_PERCENT)),
        _ => None,
    }
}

pub fn apply_key_scroll(tracker: &mut ScrollTracker, action: KeyScroll) {
    match action {
        KeyScroll::Step(d) => tracker.push_percent(d),
        KeyScroll::Jump(p) => tracker.jump_to(p),
    }
}

/// Vertical touch drag in progress.
#[derive(Default, Debug, Clone, Copy)]
pub struct TouchDrag {
    last_y: Option<f32>,
}

impl TouchDrag {
    pub fn begin(&mut self, y: f32) {
        self.last_y = Some(y);
    }

    /// Pixels to scroll for a move to `y`; dragging up scrolls forward.
    pub fn move_to(&mut self, y: f32) -> f32 {
        match self.last_y.replace(y) {
            Some(prev) if prev.is_finite() && y.is_finite() => (prev - y) * TOUCH_DRAG_GAIN,
            _ => 0.0,
        }
    }

    pub fn end(&mut self) {
        self.last_y = None;
    }

    pub fn is_active(&self) -> bool {
        self.last_y.is_some()
    }
}

/// Frame delta clamped to something the easing can absorb.
#[inline]
pub fn clamp_dt(dt_sec: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
    } else {
        0.0
    }
}

/// CSS `perspective` distance matching a vertical field of view.
#[inline]
pub fn perspective_px(viewport_h: f32, fovy_radians: f32) -> f32 {
    let half = (fovy_radians * 0.5).tan();
    if half <= 0.0 || !half.is_finite() || viewport_h <= 0.0 {
        return 1.0;
    }
    viewport_h * 0.5 / half
}
