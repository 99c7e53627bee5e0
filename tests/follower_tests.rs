// Host-side tests for the cursor follower smoothing.

use glam::Vec2;
use portfolio_core::constants::FOLLOWER_LAG;
use portfolio_core::Follower;

#[test]
fn follower_closes_ten_percent_per_frame() {
    let mut f = Follower::default();
    let target = Vec2::new(100.0, 0.0);
    f.step(target);
    assert!((f.position.x - 10.0).abs() < 1e-5);
    f.step(target);
    assert!((f.position.x - 19.0).abs() < 1e-5);
}

#[test]
fn follower_residual_decays_geometrically() {
    // After n frames against a stationary target the residual error is
    // initial_error * 0.9^n.
    let target = Vec2::new(640.0, 360.0);
    let mut f = Follower::default();
    for n in 1..=50u32 {
        f.step(target);
        let expected_residual = (1.0 - FOLLOWER_LAG).powi(n as i32);
        let residual = (target - f.position).length() / target.length();
        assert!(
            (residual - expected_residual).abs() < 1e-4,
            "frame {n}: residual {residual} vs expected {expected_residual}"
        );
    }
}

#[test]
fn follower_approaches_monotonically_without_landing() {
    let target = Vec2::new(100.0, -40.0);
    let mut f = Follower::default();
    let mut prev = (target - f.position).length();
    for _ in 0..50 {
        f.step(target);
        let dist = (target - f.position).length();
        assert!(dist < prev, "distance must shrink every frame");
        assert!(dist > 0.0, "never exactly reaches the target");
        prev = dist;
    }
}

#[test]
fn follower_reaches_ninety_percent_around_frame_22() {
    let target = Vec2::new(1000.0, 0.0);
    let mut f = Follower::default();
    for _ in 0..22 {
        f.step(target);
    }
    let covered = f.position.x / target.x;
    assert!(covered > 0.89 && covered < 0.92, "covered {covered}");
}

#[test]
fn unit_factor_binds_directly() {
    // The ring proxy semantics: zero lag means the sample is taken as-is.
    let mut ring = Follower::new(1.0);
    ring.step(Vec2::new(12.0, 34.0));
    assert_eq!(ring.position, Vec2::new(12.0, 34.0));
}
