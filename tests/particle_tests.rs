// Host-side tests for the particle field simulation.

use glam::{Vec2, Vec3, Vec4};
use portfolio_core::constants::*;
use portfolio_core::{particle_count_for_width, DriftCamera, Particle, ParticleField, PointerSnapshot};

fn pointer_at(ndc_x: f32, ndc_y: f32) -> PointerSnapshot {
    PointerSnapshot {
        ndc: Vec2::new(ndc_x, ndc_y),
        px: Vec2::ZERO,
    }
}

fn field_with(particles: Vec<Particle>) -> ParticleField {
    ParticleField { particles }
}

#[test]
fn particles_stay_within_bounce_envelope() {
    // Bounce, not clamp: a single-frame overshoot past 1000 is allowed,
    // bounded by that axis' per-frame speed.
    let mut field = ParticleField::new(PARTICLE_COUNT, 7);
    let pointer = pointer_at(0.3, -0.2);
    for _ in 0..5_000 {
        field.step(pointer);
    }
    for p in &field.particles {
        for axis in 0..3 {
            let pos = p.position[axis];
            let vel = p.velocity[axis];
            assert!(
                pos.abs() <= PARTICLE_BOUNDS + vel.abs() + 1e-3,
                "axis {axis} escaped the envelope: pos={pos}, vel={vel}"
            );
        }
    }
}

#[test]
fn velocity_flips_when_position_exceeds_bounds() {
    let mut field = field_with(vec![Particle {
        position: Vec3::new(999.9, 0.0, 0.0),
        velocity: Vec3::new(0.3, 0.0, 0.0),
    }]);
    // Pointer far away so attraction stays out of the picture.
    let pointer = pointer_at(-1.0, -1.0);

    field.step(pointer);
    let p = field.particles[0];
    assert!((p.position.x - 1000.2).abs() < 1e-3);
    assert!((p.velocity.x + 0.3).abs() < 1e-6, "velocity should reflect");

    // Back inside next frame: no second flip.
    field.step(pointer);
    let p = field.particles[0];
    assert!((p.position.x - 999.9).abs() < 1e-3);
    assert!((p.velocity.x + 0.3).abs() < 1e-6, "no flip while back inside");
}

#[test]
fn particle_still_past_limit_bounces_again() {
    // A particle deep past the boundary re-reflects every frame it stays
    // outside, even if that sends it outward again.
    let mut field = field_with(vec![Particle {
        position: Vec3::new(1000.9, 0.0, 0.0),
        velocity: Vec3::new(-0.3, 0.0, 0.0),
    }]);
    let pointer = pointer_at(-1.0, -1.0);

    field.step(pointer);
    let p = field.particles[0];
    assert!((p.position.x - 1000.6).abs() < 1e-3);
    assert!(
        (p.velocity.x - 0.3).abs() < 1e-6,
        "still past the limit: reflected again"
    );
}

#[test]
fn attraction_only_inside_radius() {
    let pointer = pointer_at(1.0, 0.0); // target (500, 0)
    let mut near = field_with(vec![Particle {
        position: Vec3::new(400.0, 0.0, 0.0),
        velocity: Vec3::ZERO,
    }]);
    near.step(pointer);
    let p = near.particles[0];
    assert!((p.velocity.x - 100.0 * ATTRACT_GAIN).abs() < 1e-7);
    assert_eq!(p.velocity.y, 0.0);
    assert_eq!(p.velocity.z, 0.0, "attraction is x/y only");

    let mut far = field_with(vec![Particle {
        position: Vec3::new(0.0, 0.0, 0.0),
        velocity: Vec3::ZERO,
    }]);
    far.step(pointer);
    assert_eq!(far.particles[0].velocity, Vec3::ZERO, "outside the radius");
}

#[test]
fn attraction_never_caps_velocity() {
    // The pull is a raw impulse on top of whatever speed the particle has.
    let mut field = field_with(vec![Particle {
        position: Vec3::new(400.0, 0.0, 0.0),
        velocity: Vec3::new(50.0, 0.0, 0.0),
    }]);
    field.step(pointer_at(1.0, 0.0));
    let p = field.particles[0];
    // position advanced to 450 first, then the 50 px offset pulled.
    assert!((p.velocity.x - (50.0 + 50.0 * ATTRACT_GAIN)).abs() < 1e-4);
}

#[test]
fn particle_count_halves_below_mobile_width() {
    assert_eq!(particle_count_for_width(1280.0), PARTICLE_COUNT);
    assert_eq!(particle_count_for_width(768.0), PARTICLE_COUNT);
    assert_eq!(particle_count_for_width(767.0), PARTICLE_COUNT_MOBILE);
    assert_eq!(PARTICLE_COUNT_MOBILE * 2, PARTICLE_COUNT);
}

#[test]
fn seeded_spawn_is_deterministic() {
    let a = ParticleField::new(40, 42);
    let b = ParticleField::new(40, 42);
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.velocity, pb.velocity);
    }
    let c = ParticleField::new(40, 43);
    assert!(
        a.particles
            .iter()
            .zip(&c.particles)
            .any(|(pa, pc)| pa.position != pc.position),
        "different seeds should spawn differently"
    );
}

#[test]
fn spawned_particles_start_inside_the_cube() {
    let field = ParticleField::new(500, 11);
    for p in &field.particles {
        for axis in 0..3 {
            assert!(p.position[axis].abs() <= PARTICLE_BOUNDS);
            assert!(p.velocity[axis].abs() <= PARTICLE_SPEED_SPAN / 2.0);
        }
    }
}

#[test]
fn camera_eases_ten_percent_per_frame() {
    let mut cam = DriftCamera::default();
    cam.step(Vec2::new(1.0, 1.0)); // target (50, 50)
    assert!((cam.position.x - 5.0).abs() < 1e-5);
    assert!((cam.position.y - 5.0).abs() < 1e-5);
    assert_eq!(cam.position.z, CAMERA_Z, "z never drifts");

    // Converges exponentially: residual = 50 * 0.9^n.
    for _ in 0..99 {
        cam.step(Vec2::new(1.0, 1.0));
    }
    let expected = 50.0 * (1.0 - 0.9f32.powi(100));
    assert!((cam.position.x - expected).abs() < 0.05);
}

#[test]
fn camera_always_looks_at_origin() {
    let mut cam = DriftCamera::default();
    for _ in 0..30 {
        cam.step(Vec2::new(-0.7, 0.4));
    }
    let origin_view = cam.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(origin_view.x.abs() < 1e-3, "origin stays centered in view");
    assert!(origin_view.y.abs() < 1e-3);
    assert!(origin_view.z < 0.0, "origin sits in front of the camera");
}
