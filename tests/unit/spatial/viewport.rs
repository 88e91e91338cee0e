//! Tests for viewport classification and the tile render signal

use pentile::spatial::viewport::{RenderSignal, Viewport, Visibility};

fn viewport() -> Viewport {
    // overlay = 10 · sin 36° · 2 ≈ 11.76
    Viewport::new(100.0, 100.0, 10.0)
}

// Tests the overlay band width formula
// Verified by halving the band
#[test]
fn test_overlay_width() {
    let vp = viewport();
    assert!((vp.overlay() - 10.0 * 36.0_f64.to_radians().sin() * 2.0).abs() < 1e-12);
    assert!((vp.width() - 100.0).abs() < f64::EPSILON);
    assert!((vp.height() - 100.0).abs() < f64::EPSILON);
}

// Tests interior points classify as definite render
#[test]
fn test_classify_interior() {
    let vp = viewport();
    assert_eq!(vp.classify([50.0, 50.0]), Visibility::DefiniteRender);
    assert_eq!(vp.classify([0.0, 0.0]), Visibility::DefiniteRender);
    assert_eq!(vp.classify([100.0, 100.0]), Visibility::DefiniteRender);
}

// Tests points beyond the overlay band classify as definite skip
#[test]
fn test_classify_outside_band() {
    let vp = viewport();
    assert_eq!(vp.classify([-20.0, 50.0]), Visibility::DefiniteSkip);
    assert_eq!(vp.classify([50.0, 120.0]), Visibility::DefiniteSkip);
    assert_eq!(vp.classify([-20.0, -20.0]), Visibility::DefiniteSkip);
}

// Tests in-band points split on the folded corner distance
// Verified by comparing against the band width instead of the fold
#[test]
fn test_classify_weak_band() {
    let vp = viewport();
    // Near a viewport corner: folded offset (5, 5), well inside the radius
    assert_eq!(vp.classify([-5.0, -5.0]), Visibility::WeakRender);
    assert_eq!(vp.classify([105.0, -5.0]), Visibility::WeakRender);
    // Mid-edge: folded offset reaches half the extent, outside the radius
    assert_eq!(vp.classify([-5.0, 50.0]), Visibility::WeakSkip);
    assert_eq!(vp.classify([105.0, 50.0]), Visibility::WeakSkip);
}

// Tests in-view pool membership per classification
#[test]
fn test_in_view() {
    assert!(Visibility::DefiniteRender.in_view());
    assert!(Visibility::WeakRender.in_view());
    assert!(!Visibility::DefiniteSkip.in_view());
    assert!(!Visibility::WeakSkip.in_view());
}

// Tests the render signal fold: definite states are final, weak-skip only
// yields to definite ones
#[test]
fn test_render_signal_fold() {
    let mut signal = RenderSignal::new();
    assert!(signal.allows_render());

    signal.observe(Visibility::WeakSkip);
    signal.observe(Visibility::WeakRender);
    assert!(signal.allows_render());

    signal.observe(Visibility::DefiniteSkip);
    assert!(!signal.allows_render());
    signal.observe(Visibility::DefiniteRender);
    assert!(!signal.allows_render());
}

// Tests a lone weak-skip corner still renders
#[test]
fn test_weak_skip_renders() {
    let mut signal = RenderSignal::new();
    signal.observe(Visibility::WeakSkip);
    assert!(signal.allows_render());
}
