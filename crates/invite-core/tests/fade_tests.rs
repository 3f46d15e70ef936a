// Visibility curve properties for the shared section mapper.

use invite_core::{Edge, Fade, FadeKind, Phase, SectionConfig};
use proptest::prelude::*;

const EPS: f32 = 1e-5;

fn in_out(start: f32, end: f32, fraction: f32) -> Fade {
    Fade::new(start, end, FadeKind::InOut, Edge::Fraction(fraction))
}

#[test]
fn stay_fraction_scenario() {
    let f = in_out(5.0, 15.0, 0.3);
    assert_eq!(f.visibility(5.0), 0.0);
    assert!((f.visibility(8.0) - 1.0).abs() < EPS, "plateau reached at 30%");
    assert!((f.visibility(10.0) - 1.0).abs() < EPS, "mid-plateau");
    assert!(f.visibility(15.0).abs() < EPS);
}

#[test]
fn pre_range_values_by_kind() {
    for edge in [Edge::Full, Edge::Fraction(0.2), Edge::Buffer(1.0)] {
        assert_eq!(Fade::new(10.0, 20.0, FadeKind::In, edge).visibility(3.0), 0.0);
        assert_eq!(Fade::new(10.0, 20.0, FadeKind::InOut, edge).visibility(3.0), 0.0);
        assert_eq!(Fade::new(10.0, 20.0, FadeKind::Out, edge).visibility(3.0), 1.0);
    }
}

#[test]
fn post_range_values_by_kind() {
    for edge in [Edge::Full, Edge::Fraction(0.2), Edge::Buffer(1.0)] {
        assert_eq!(Fade::new(10.0, 20.0, FadeKind::In, edge).visibility(25.0), 1.0);
        assert_eq!(Fade::new(10.0, 20.0, FadeKind::InOut, edge).visibility(25.0), 0.0);
        assert_eq!(Fade::new(10.0, 20.0, FadeKind::Out, edge).visibility(25.0), 0.0);
    }
}

#[test]
fn zero_width_range_is_never_nan() {
    for kind in [FadeKind::In, FadeKind::Out, FadeKind::InOut] {
        let f = Fade::new(7.0, 7.0, kind, Edge::Fraction(0.3));
        for v in [6.0, 7.0, 8.0] {
            let out = f.visibility(v);
            assert!(!out.is_nan(), "{kind:?} at {v} produced NaN");
            assert!((0.0..=1.0).contains(&out));
        }
    }
    // already-complete transitions
    assert_eq!(Fade::new(7.0, 7.0, FadeKind::In, Edge::Full).visibility(7.0), 1.0);
    assert_eq!(Fade::new(7.0, 7.0, FadeKind::Out, Edge::Full).visibility(7.0), 0.0);
    assert_eq!(Fade::new(7.0, 7.0, FadeKind::InOut, Edge::Full).visibility(7.0), 0.0);
}

#[test]
fn zero_buffer_is_a_hard_cut() {
    let f = Fade::new(10.0, 20.0, FadeKind::InOut, Edge::Buffer(0.0));
    assert_eq!(f.visibility(9.99), 0.0);
    assert_eq!(f.visibility(10.0), 1.0);
    assert_eq!(f.visibility(20.0), 1.0);
    assert_eq!(f.visibility(20.01), 0.0);
}

#[test]
fn non_finite_scroll_counts_as_before() {
    let f = in_out(0.0, 10.0, 0.3);
    assert_eq!(f.evaluate(f32::NAN), (0.0, Phase::Before));
    let out = Fade::new(0.0, 10.0, FadeKind::Out, Edge::Full);
    assert_eq!(out.visibility(f32::INFINITY), 1.0);
}

#[test]
fn eased_not_linear_inside_fade() {
    let f = Fade::new(0.0, 10.0, FadeKind::In, Edge::Full);
    // smoothstep(0.25) = 0.15625
    assert!((f.visibility(2.5) - 0.15625).abs() < EPS);
    assert!((f.visibility(5.0) - 0.5).abs() < EPS);
}

#[test]
fn phases_follow_the_range() {
    let f = in_out(0.0, 10.0, 0.3);
    assert_eq!(f.evaluate(-1.0).1, Phase::Before);
    assert_eq!(f.evaluate(1.0).1, Phase::Entering);
    assert_eq!(f.evaluate(5.0).1, Phase::Holding);
    assert_eq!(f.evaluate(9.0).1, Phase::Leaving);
    assert_eq!(f.evaluate(11.0).1, Phase::After);
}

#[test]
fn boundaries_are_continuous() {
    let f = in_out(5.0, 15.0, 0.3);
    for boundary in [8.0_f32, 12.0] {
        let below = f.visibility(boundary - 1e-3);
        let at = f.visibility(boundary);
        let above = f.visibility(boundary + 1e-3);
        assert!((below - at).abs() < 1e-3, "jump below {boundary}");
        assert!((above - at).abs() < 1e-3, "jump above {boundary}");
    }
}

#[test]
fn derived_outputs_share_one_progress() {
    let cfg = SectionConfig::new(0.0, 10.0, FadeKind::InOut, Edge::Fraction(0.4))
        .with_blur(10.0)
        .with_travel(50.0)
        .with_scale_from(0.8);
    for i in 0..=100 {
        let v = i as f32 / 10.0;
        let s = cfg.style(v);
        let hidden = 1.0 - s.visibility;
        assert_eq!(s.opacity, s.visibility);
        assert!((s.blur_px - hidden * 10.0).abs() < EPS);
        assert!((s.translate_y.abs() - hidden * 50.0).abs() < EPS);
        assert!((s.scale - (0.8 + 0.2 * s.visibility)).abs() < EPS);
    }
}

#[test]
fn mounting_uses_margin() {
    let cfg = SectionConfig::new(10.0, 20.0, FadeKind::InOut, Edge::Full).with_mount_margin(2.0);
    assert!(!cfg.is_mounted(7.9));
    assert!(cfg.is_mounted(8.0));
    assert!(cfg.is_mounted(22.0));
    assert!(!cfg.is_mounted(22.1));
    assert!(!cfg.is_mounted(f32::NAN));
}

fn kind_strategy() -> impl Strategy<Value = FadeKind> {
    prop_oneof![
        Just(FadeKind::In),
        Just(FadeKind::Out),
        Just(FadeKind::InOut)
    ]
}

fn edge_strategy() -> impl Strategy<Value = Edge> {
    prop_oneof![
        Just(Edge::Full),
        (0.0f32..1.0).prop_map(Edge::Fraction),
        (0.0f32..20.0).prop_map(Edge::Buffer),
    ]
}

proptest! {
    #[test]
    fn output_stays_in_unit_range(
        start in -50.0f32..50.0,
        len in 0.0f32..50.0,
        kind in kind_strategy(),
        edge in edge_strategy(),
        v in -100.0f32..150.0,
    ) {
        let f = Fade::new(start, start + len, kind, edge);
        let out = f.visibility(v);
        prop_assert!((0.0..=1.0).contains(&out));
    }

    #[test]
    fn idempotent(
        start in 0.0f32..50.0,
        len in 0.0f32..50.0,
        kind in kind_strategy(),
        edge in edge_strategy(),
        v in -10.0f32..110.0,
    ) {
        let f = Fade::new(start, start + len, kind, edge);
        prop_assert_eq!(f.evaluate(v), f.evaluate(v));
    }

    #[test]
    fn monotone_within_fade_segments(
        start in 0.0f32..50.0,
        len in 1.0f32..50.0,
        fraction in 0.05f32..0.5,
        a in 0.0f32..1.0,
        b in 0.0f32..1.0,
    ) {
        let f = in_out(start, start + len, fraction);
        let edge = f.edge_len();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        // fade-in segment: non-decreasing
        let x0 = start + lo * edge;
        let x1 = start + hi * edge;
        prop_assert!(f.visibility(x0) <= f.visibility(x1) + EPS);

        // fade-out segment: non-increasing
        let out_start = start + len - edge;
        let y0 = out_start + lo * edge;
        let y1 = out_start + hi * edge;
        prop_assert!(f.visibility(y0) + EPS >= f.visibility(y1));
    }

    #[test]
    fn one_sided_fades_are_monotone(
        start in 0.0f32..50.0,
        len in 0.0f32..50.0,
        edge in edge_strategy(),
        a in -10.0f32..110.0,
        b in -10.0f32..110.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let fade_in = Fade::new(start, start + len, FadeKind::In, edge);
        let fade_out = Fade::new(start, start + len, FadeKind::Out, edge);
        prop_assert!(fade_in.visibility(lo) <= fade_in.visibility(hi) + EPS);
        prop_assert!(fade_out.visibility(lo) + EPS >= fade_out.visibility(hi));
    }
}

#[test]
fn one_sided_fades_move_one_way_for_every_edge() {
    for edge in [Edge::Full, Edge::Fraction(0.4), Edge::Buffer(3.0), Edge::Buffer(0.0)] {
        let fade_in = Fade::new(10.0, 20.0, FadeKind::In, edge);
        let fade_out = Fade::new(10.0, 20.0, FadeKind::Out, edge);
        let mut prev_in = fade_in.visibility(0.0);
        let mut prev_out = fade_out.visibility(0.0);
        assert_eq!(prev_in, 0.0, "{:?}", edge);
        assert_eq!(prev_out, 1.0, "{:?}", edge);
        for i in 1..=300 {
            let v = i as f32 * 0.1;
            let vis_in = fade_in.visibility(v);
            let vis_out = fade_out.visibility(v);
            assert!(vis_in + EPS >= prev_in, "{:?} in at {v}", edge);
            assert!(vis_out <= prev_out + EPS, "{:?} out at {v}", edge);
            prev_in = vis_in;
            prev_out = vis_out;
        }
        assert_eq!(prev_in, 1.0, "{:?}", edge);
        assert_eq!(prev_out, 0.0, "{:?}", edge);
    }
}
