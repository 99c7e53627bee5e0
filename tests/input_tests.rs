// Host-side tests for pure pointer-input functions.
// The main crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
#[path = "../src/input.rs"]
mod input;

use input::pointer_ndc;

#[test]
fn pointer_ndc_maps_the_viewport_corners() {
    let (w, h) = (1280.0, 720.0);
    let top_left = pointer_ndc(0.0, 0.0, w, h);
    assert_eq!(top_left, [-1.0, 1.0]);

    let bottom_right = pointer_ndc(w, h, w, h);
    assert_eq!(bottom_right, [1.0, -1.0]);
}

#[test]
fn pointer_ndc_centers_at_zero() {
    let ndc = pointer_ndc(640.0, 360.0, 1280.0, 720.0);
    assert!(ndc[0].abs() < 1e-6);
    assert!(ndc[1].abs() < 1e-6);
}

#[test]
fn pointer_ndc_inverts_y() {
    // Client y grows downward; ndc y grows upward.
    let upper = pointer_ndc(100.0, 100.0, 1000.0, 1000.0);
    let lower = pointer_ndc(100.0, 900.0, 1000.0, 1000.0);
    assert!(upper[1] > 0.0);
    assert!(lower[1] < 0.0);
    assert_eq!(upper[0], lower[0]);
}

#[test]
fn pointer_ndc_survives_a_degenerate_viewport() {
    let ndc = pointer_ndc(10.0, 10.0, 0.0, 0.0);
    assert!(ndc[0].is_finite());
    assert!(ndc[1].is_finite());
}

#[test]
fn snapshot_matches_the_pure_helper() {
    let snap = portfolio_core::PointerSnapshot::from_client(320.0, 90.0, 1280.0, 720.0);
    let ndc = pointer_ndc(320.0, 90.0, 1280.0, 720.0);
    assert_eq!(snap.ndc.x, ndc[0]);
    assert_eq!(snap.ndc.y, ndc[1]);
    assert_eq!(snap.px.x, 320.0);
    assert_eq!(snap.px.y, 90.0);
}
