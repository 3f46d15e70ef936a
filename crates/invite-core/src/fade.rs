//! Scroll-progress to presentation mapping shared by every section.
//!
//! A section is described once by a [`SectionConfig`]. Each frame the current
//! scroll value is fed through [`SectionConfig::style`], which evaluates the
//! visibility curve exactly once and derives opacity, translation, scale and
//! blur from that single value.

/// Which side(s) of the range a section fades on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeKind {
    /// Hidden before `start`, fades in, then stays visible.
    In,
    /// Visible before `start`, fades out, then stays hidden.
    Out,
    /// Fades in, holds, fades out.
    InOut,
}

/// Length of each fade segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    /// The fade spans the whole range (half of it for `InOut`).
    Full,
    /// Fraction of `end - start` taken by each fade segment.
    Fraction(f32),
    /// Explicit segment length in scroll units.
    Buffer(f32),
}

/// Where a scroll value sits relative to a section's range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Before,
    Entering,
    Holding,
    Leaving,
    After,
}

/// Cubic smoothstep `t² (3 − 2t)` on a clamped input.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fraction of the way from `a` to `b`. A zero-width segment counts as
/// already crossed once `v` reaches it.
#[inline]
fn segment_t(v: f32, a: f32, b: f32) -> f32 {
    let span = b - a;
    if span <= f32::EPSILON {
        return if v >= a { 1.0 } else { 0.0 };
    }
    ((v - a) / span).clamp(0.0, 1.0)
}

/// Resolved fade window for one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub start: f32,
    pub end: f32,
    pub kind: FadeKind,
    pub edge: Edge,
}

impl Fade {
    pub const fn new(start: f32, end: f32, kind: FadeKind, edge: Edge) -> Self {
        Self {
            start,
            end,
            kind,
            edge,
        }
    }

    fn range(&self) -> f32 {
        (self.end - self.start).max(0.0)
    }

    /// Length of one fade segment, capped so the segments never overlap.
    pub fn edge_len(&self) -> f32 {
        let range = self.range();
        let cap = match self.kind {
            FadeKind::InOut => range * 0.5,
            FadeKind::In | FadeKind::Out => range,
        };
        let len = match self.edge {
            Edge::Full => cap,
            Edge::Fraction(f) if f.is_finite() => range * f.max(0.0),
            Edge::Buffer(b) if b.is_finite() => b.max(0.0),
            _ => cap,
        };
        len.min(cap)
    }

    /// Visibility in `[0, 1]` and the phase it was computed in.
    pub fn evaluate(&self, v: f32) -> (f32, Phase) {
        let edge = self.edge_len();
        if !v.is_finite() || v < self.start {
            let pre = match self.kind {
                FadeKind::Out => 1.0,
                FadeKind::In | FadeKind::InOut => 0.0,
            };
            return (pre, Phase::Before);
        }
        if v > self.end {
            let post = match self.kind {
                FadeKind::In => 1.0,
                FadeKind::Out | FadeKind::InOut => 0.0,
            };
            return (post, Phase::After);
        }
        match self.kind {
            FadeKind::In => {
                let a = self.start;
                let b = self.start + edge;
                if v < b {
                    (smoothstep(segment_t(v, a, b)), Phase::Entering)
                } else {
                    (1.0, Phase::Holding)
                }
            }
            FadeKind::Out => {
                let a = self.end - edge;
                if v < a {
                    (1.0, Phase::Holding)
                } else {
                    (1.0 - smoothstep(segment_t(v, a, self.end)), Phase::Leaving)
                }
            }
            FadeKind::InOut => {
                let in_end = self.start + edge;
                let out_start = self.end - edge;
                if self.range() <= f32::EPSILON {
                    // zero-width window: the in/out pair has already completed
                    return (0.0, Phase::After);
                }
                if v < in_end {
                    (smoothstep(segment_t(v, self.start, in_end)), Phase::Entering)
                } else if v <= out_start {
                    (1.0, Phase::Holding)
                } else {
                    (
                        1.0 - smoothstep(segment_t(v, out_start, self.end)),
                        Phase::Leaving,
                    )
                }
            }
        }
    }

    /// Visibility only.
    #[inline]
    pub fn visibility(&self, v: f32) -> f32 {
        self.evaluate(v).0
    }
}

/// Presentation parameters for one section at one scroll value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionStyle {
    pub visibility: f32,
    pub phase: Phase,
    pub opacity: f32,
    /// Pixels; positive pushes the section down while entering, negative
    /// lifts it while leaving.
    pub translate_y: f32,
    pub scale: f32,
    pub blur_px: f32,
}

impl SectionStyle {
    pub const HIDDEN: Self = Self {
        visibility: 0.0,
        phase: Phase::Before,
        opacity: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        blur_px: 0.0,
    };

    /// CSS `transform` value.
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d(0px, {:.2}px, 0px) scale({:.4})",
            self.translate_y, self.scale
        )
    }

    /// CSS `filter` value, `none` when sharp.
    pub fn css_filter(&self) -> String {
        if self.blur_px < 0.01 {
            "none".to_string()
        } else {
            format!("blur({:.2}px)", self.blur_px)
        }
    }
}

/// Declarative per-section animation config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionConfig {
    pub fade: Fade,
    /// Travel distance in pixels at zero visibility.
    pub travel_px: f32,
    /// Scale at zero visibility.
    pub scale_from: f32,
    /// Blur radius at zero visibility.
    pub max_blur_px: f32,
    /// Extra scroll units either side of the range during which the section
    /// stays mounted.
    pub mount_margin: f32,
}

impl SectionConfig {
    pub const fn new(start: f32, end: f32, kind: FadeKind, edge: Edge) -> Self {
        Self {
            fade: Fade::new(start, end, kind, edge),
            travel_px: 40.0,
            scale_from: 0.96,
            max_blur_px: 8.0,
            mount_margin: 2.0,
        }
    }

    pub const fn with_travel(mut self, travel_px: f32) -> Self {
        self.travel_px = travel_px;
        self
    }

    pub const fn with_scale_from(mut self, scale_from: f32) -> Self {
        self.scale_from = scale_from;
        self
    }

    pub const fn with_blur(mut self, max_blur_px: f32) -> Self {
        self.max_blur_px = max_blur_px;
        self
    }

    pub const fn with_mount_margin(mut self, margin: f32) -> Self {
        self.mount_margin = margin;
        self
    }

    /// Whether the section should be in the DOM flow at all.
    pub fn is_mounted(&self, v: f32) -> bool {
        v.is_finite()
            && v >= self.fade.start - self.mount_margin
            && v <= self.fade.end + self.mount_margin
    }

    /// All presentation outputs from a single progress evaluation.
    pub fn style(&self, v: f32) -> SectionStyle {
        let (p, phase) = self.fade.evaluate(v);
        let hidden = 1.0 - p;
        let direction = match phase {
            Phase::Leaving | Phase::After => -1.0,
            _ => 1.0,
        };
        SectionStyle {
            visibility: p,
            phase,
            opacity: p,
            translate_y: direction * hidden * self.travel_px,
            scale: self.scale_from + (1.0 - self.scale_from) * p,
            blur_px: hidden * self.max_blur_px,
        }
    }
}
