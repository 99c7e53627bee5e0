// Host-side tests for the scroll reveal state machine, the parallax scrub,
// and the one-shot skill bars.

use portfolio_core::constants::*;
use portfolio_core::{
    parallax_offset, stagger_delay, FillBar, RevealAction, RevealBinding, RevealPhase,
};

const VH: f32 = 1000.0; // threshold line at 800

#[test]
fn starts_pending_and_stays_pending_above_threshold() {
    let mut b = RevealBinding::new();
    assert_eq!(b.phase(), RevealPhase::Pending);
    assert_eq!(b.update(900.0, VH), None);
    assert_eq!(b.update(801.0, VH), None);
    assert_eq!(b.phase(), RevealPhase::Pending);
}

#[test]
fn crossing_down_reveals_and_crossing_up_reverses() {
    let mut b = RevealBinding::new();
    assert_eq!(b.update(799.0, VH), Some(RevealAction::Play));
    assert_eq!(b.phase(), RevealPhase::Revealed);
    // Staying below the threshold emits nothing further.
    assert_eq!(b.update(400.0, VH), None);
    assert_eq!(b.update(850.0, VH), Some(RevealAction::Reverse));
    assert_eq!(b.phase(), RevealPhase::Reversed);
}

#[test]
fn threshold_boundary_counts_as_crossed() {
    let mut b = RevealBinding::new();
    assert_eq!(b.update(VH * REVEAL_THRESHOLD, VH), Some(RevealAction::Play));
}

#[test]
fn toggling_replays_unboundedly() {
    // No "already played" lockout: every crossing emits, forever.
    let mut b = RevealBinding::new();
    for i in 0..100 {
        assert_eq!(b.update(700.0, VH), Some(RevealAction::Play), "cycle {i}");
        assert_eq!(b.update(900.0, VH), Some(RevealAction::Reverse), "cycle {i}");
    }
}

#[test]
fn reversed_section_reveals_again() {
    let mut b = RevealBinding::new();
    b.update(700.0, VH);
    b.update(900.0, VH);
    assert_eq!(b.update(600.0, VH), Some(RevealAction::Play));
    assert_eq!(b.phase(), RevealPhase::Revealed);
}

#[test]
fn parallax_spans_entry_to_exit() {
    let h = 500.0;
    // Top edge at the viewport bottom: no drift yet.
    assert_eq!(parallax_offset(VH, h, VH), 0.0);
    // Bottom edge at the viewport top: full drift of -30% element height.
    let full = parallax_offset(-h, h, VH);
    assert!((full - PARALLAX_DRIFT * h).abs() < 1e-3);
    // Halfway through the span.
    let mid_top = (VH - h) / 2.0;
    let mid = parallax_offset(mid_top, h, VH);
    assert!((mid - PARALLAX_DRIFT * h * 0.5).abs() < 1e-3);
}

#[test]
fn parallax_is_clamped_outside_the_span() {
    let h = 400.0;
    // Outside the scrub span the offset pins to its end values.
    assert_eq!(parallax_offset(VH + 500.0, h, VH), 0.0);
    let past = parallax_offset(-h - 500.0, h, VH);
    assert!((past - PARALLAX_DRIFT * h).abs() < 1e-3);
    // Degenerate geometry stays finite.
    assert_eq!(parallax_offset(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn parallax_moves_monotonically_with_scroll() {
    let h = 600.0;
    let mut prev = parallax_offset(VH, h, VH);
    let mut top = VH;
    while top > -h {
        top -= 25.0;
        let next = parallax_offset(top, h, VH);
        assert!(next <= prev, "drift grows downward as the section rises");
        prev = next;
    }
}

#[test]
fn fill_bar_fires_once_per_mount() {
    let mut bar = FillBar::new(85);
    assert_eq!(bar.update(900.0, VH), None);
    assert!(!bar.fired());
    assert_eq!(bar.update(700.0, VH), Some(85));
    assert!(bar.fired());
    // Scrolling back and forth across the threshold never re-fires.
    for _ in 0..10 {
        assert_eq!(bar.update(900.0, VH), None);
        assert_eq!(bar.update(700.0, VH), None);
    }
}

#[test]
fn fill_bar_level_is_clamped_to_percent() {
    let mut bar = FillBar::new(250);
    assert_eq!(bar.update(0.0, VH), Some(100));
}

#[test]
fn stagger_delays_step_linearly() {
    assert_eq!(stagger_delay(0, STAGGER_CARD_SEC), 0.0);
    assert!((stagger_delay(3, STAGGER_CARD_SEC) - 0.3).abs() < 1e-6);
    assert!((stagger_delay(2, STAGGER_CONTENT_SEC) - 0.4).abs() < 1e-6);
    assert!((stagger_delay(4, STAGGER_TIMELINE_SEC) - 0.6).abs() < 1e-6);
}
