use invite_core::{load_order, Asset, Outcome, PreloadProgress};

fn manifest() -> Vec<Asset> {
    vec![
        Asset::image("img/cover.webp").prioritized(),
        Asset::image("img/gate.webp"),
        Asset::audio("audio/theme.mp3").prioritized(),
        Asset::image("img/couple.webp"),
    ]
}

#[test]
fn priority_assets_load_first_in_manifest_order() {
    let (serial, rest) = load_order(&manifest());
    assert_eq!(serial, vec![0, 2]);
    assert_eq!(rest, vec![1, 3]);
}

#[test]
fn every_outcome_advances_progress() {
    let mut p = PreloadProgress::new(4);
    let g = p.begin();
    assert!(p.settle(g, 0, Outcome::Loaded));
    assert!(p.settle(g, 1, Outcome::Failed));
    assert!(p.settle(g, 2, Outcome::TimedOut));
    assert_eq!(p.settled(), 3);
    assert_eq!(p.percent(), 75);
    assert!(!p.is_complete());
    assert!(p.settle(g, 3, Outcome::Loaded));
    assert!(p.is_complete());
    assert_eq!(p.failures(), 2);
    assert_eq!(p.fraction(), 1.0);
}

#[test]
fn settling_twice_is_ignored() {
    // a load that times out and then finishes late must not count twice
    let mut p = PreloadProgress::new(2);
    let g = p.begin();
    assert!(p.settle(g, 0, Outcome::TimedOut));
    assert!(!p.settle(g, 0, Outcome::Loaded));
    assert_eq!(p.settled(), 1);
}

#[test]
fn cancelled_run_drops_late_callbacks() {
    let mut p = PreloadProgress::new(2);
    let g = p.begin();
    p.cancel();
    assert!(!p.is_current(g));
    assert!(!p.settle(g, 0, Outcome::Loaded));
    assert_eq!(p.settled(), 0);
}

#[test]
fn restart_invalidates_previous_generation() {
    let mut p = PreloadProgress::new(1);
    let old = p.begin();
    let new = p.begin();
    assert!(!p.settle(old, 0, Outcome::Loaded));
    assert!(p.settle(new, 0, Outcome::Loaded));
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut p = PreloadProgress::new(1);
    let g = p.begin();
    assert!(!p.settle(g, 5, Outcome::Loaded));
}

#[test]
fn empty_manifest_is_complete() {
    let p = PreloadProgress::new(0);
    assert!(p.is_complete());
    assert_eq!(p.percent(), 100);
}
