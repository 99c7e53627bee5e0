// Host-side tests for easing curves, the dt-driven tween, and the anchor
// scroll arithmetic.

use portfolio_core::constants::{HEADER_OFFSET_PX, SCROLL_DURATION_SEC};
use portfolio_core::{anchor_scroll_plan, scroll_target, Ease, Tween};

#[test]
fn eases_hit_both_endpoints() {
    for ease in [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power2InOut,
    ] {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn eases_are_monotonic() {
    for ease in [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power2InOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev, "{ease:?} dipped at step {i}");
            prev = v;
        }
    }
}

#[test]
fn ease_input_is_clamped() {
    assert_eq!(Ease::Power3Out.apply(-0.5), 0.0);
    assert_eq!(Ease::Power3Out.apply(1.5), 1.0);
}

#[test]
fn power2_in_out_is_symmetric_about_the_midpoint() {
    let e = Ease::Power2InOut;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
    for i in 0..=50 {
        let t = i as f32 / 100.0;
        let lo = e.apply(t);
        let hi = e.apply(1.0 - t);
        assert!((lo + hi - 1.0).abs() < 1e-5, "asymmetry at t={t}");
    }
}

#[test]
fn out_eases_front_load_the_motion() {
    assert!(Ease::Power2Out.apply(0.3) > 0.3);
    assert!(Ease::Power3Out.apply(0.3) > Ease::Power2Out.apply(0.3));
}

#[test]
fn tween_runs_to_its_target_and_finishes() {
    let mut t = Tween::new(0.0, 200.0, SCROLL_DURATION_SEC, Ease::Power2InOut);
    assert!(!t.finished());
    let mut prev = 0.0;
    // 120 frames at 60 fps comfortably covers the 1.5 s duration.
    for _ in 0..120 {
        let v = t.step(1.0 / 60.0);
        assert!(v >= prev, "eased scroll never backtracks");
        prev = v;
    }
    assert!(t.finished());
    assert_eq!(t.value(), 200.0);
}

#[test]
fn tween_clamps_dt_overshoot() {
    let mut t = Tween::new(10.0, 20.0, 0.5, Ease::Linear);
    assert_eq!(t.step(5.0), 20.0);
    assert!(t.finished());
}

#[test]
fn zero_duration_tween_is_already_there() {
    let t = Tween::new(3.0, 9.0, 0.0, Ease::Power3Out);
    assert_eq!(t.value(), 9.0);
    assert!(t.finished());
}

#[test]
fn scroll_target_offsets_by_the_header() {
    assert_eq!(scroll_target(500.0), 500.0 - HEADER_OFFSET_PX);
    // Targets near the document top never ask for a negative scroll.
    assert_eq!(scroll_target(30.0), 0.0);
}

#[test]
fn missing_fragment_target_is_a_no_op() {
    // Documented quirk: a fragment link without a matching element still
    // suppresses default navigation but produces no scroll destination.
    assert_eq!(anchor_scroll_plan(None), None);
    assert_eq!(
        anchor_scroll_plan(Some(500.0)),
        Some(500.0 - HEADER_OFFSET_PX)
    );
}
