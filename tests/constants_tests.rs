// Host-side tests for constants and their relationships.

use portfolio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    assert!(FOLLOWER_LAG > 0.0 && FOLLOWER_LAG < 1.0);
    assert!(CAMERA_EASE > 0.0 && CAMERA_EASE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_threshold_is_a_viewport_fraction() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(REVEAL_OFFSET_PX > 0.0);
    assert!(REVEAL_DURATION_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_drifts_upward_by_less_than_the_element() {
    assert!(PARALLAX_DRIFT < 0.0);
    assert!(PARALLAX_DRIFT.abs() < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_tuning_is_coherent() {
    assert!(ATTRACT_RADIUS < PARTICLE_BOUNDS);
    assert!(POINTER_WORLD_SCALE <= PARTICLE_BOUNDS);
    assert!(ATTRACT_GAIN > 0.0 && ATTRACT_GAIN < 1e-2);
    assert_eq!(PARTICLE_COUNT_MOBILE, PARTICLE_COUNT / 2);
    assert!(PARTICLE_SPEED_SPAN < PARTICLE_SPAWN_SPAN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stagger_steps_sit_in_the_documented_range() {
    for step in [STAGGER_CARD_SEC, STAGGER_TIMELINE_SEC, STAGGER_CONTENT_SEC] {
        assert!((0.1..=0.2).contains(&step));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_match_the_interaction_contract() {
    assert!(SCROLL_DURATION_SEC > 0.0);
    assert!(HEADER_OFFSET_PX > 0.0);
    assert!(FILL_DURATION_SEC > REVEAL_DURATION_SEC);
    assert!(STATUS_CLEAR_MS > SUBMIT_LATENCY_MS);
    assert_eq!(MESSAGE_MIN_CHARS, 10);
}
