//! Particle cloud simulation behind the page content.
//!
//! The field owns a fixed set of particles inside an invisible ±1000 cube.
//! Each frame every particle advances by its velocity, bounces elastically
//! off the cube faces, and gets a small velocity nudge toward the pointer
//! when close enough in the x/y plane. Bounces compare against the current
//! frame's position, so a particle straddling the boundary may bounce on
//! consecutive frames.

use glam::{Mat4, Vec2, Vec3};
use rand::prelude::*;

use crate::constants::*;
use crate::pointer::PointerSnapshot;

#[derive(Clone, Copy, Debug, Default)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
}

/// Half the particles below the mobile width threshold.
pub fn particle_count_for_width(width_px: f32) -> usize {
    if width_px < MOBILE_WIDTH_PX {
        PARTICLE_COUNT_MOBILE
    } else {
        PARTICLE_COUNT
    }
}

impl ParticleField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec3::new(
                    spread(&mut rng, PARTICLE_SPAWN_SPAN),
                    spread(&mut rng, PARTICLE_SPAWN_SPAN),
                    spread(&mut rng, PARTICLE_SPAWN_SPAN),
                ),
                velocity: Vec3::new(
                    spread(&mut rng, PARTICLE_SPEED_SPAN),
                    spread(&mut rng, PARTICLE_SPEED_SPAN),
                    spread(&mut rng, PARTICLE_SPEED_SPAN),
                ),
            })
            .collect::<Vec<_>>();
        log::debug!("particle field: {} particles (seed {})", count, seed);
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by one frame against the given pointer state.
    pub fn step(&mut self, pointer: PointerSnapshot) {
        let target = pointer.ndc * POINTER_WORLD_SCALE;
        for p in &mut self.particles {
            p.position += p.velocity;

            if p.position.x.abs() > PARTICLE_BOUNDS {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y.abs() > PARTICLE_BOUNDS {
                p.velocity.y = -p.velocity.y;
            }
            if p.position.z.abs() > PARTICLE_BOUNDS {
                p.velocity.z = -p.velocity.z;
            }

            // Soft magnetic pull in the x/y plane only. Velocity is never
            // capped here; a stationary pointer can pump it indefinitely.
            let offset = Vec2::new(target.x - p.position.x, target.y - p.position.y);
            if offset.length() < ATTRACT_RADIUS {
                p.velocity.x += offset.x * ATTRACT_GAIN;
                p.velocity.y += offset.y * ATTRACT_GAIN;
            }
        }
    }
}

#[inline]
fn spread(rng: &mut StdRng, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

/// Camera that drifts toward a pointer-derived x/y offset and always looks
/// at the scene origin. Z stays fixed.
#[derive(Clone, Debug)]
pub struct DriftCamera {
    pub position: Vec3,
}

impl Default for DriftCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_Z),
        }
    }
}

impl DriftCamera {
    /// Ease x/y toward the pointer offset by a fixed fraction of the
    /// remaining distance (exponential-decay smoothing).
    pub fn step(&mut self, pointer_ndc: Vec2) {
        let target = pointer_ndc * CAMERA_DRIFT_SPAN;
        self.position.x += (target.x - self.position.x) * CAMERA_EASE;
        self.position.y += (target.y - self.position.y) * CAMERA_EASE;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            CAMERA_FOVY_DEG.to_radians(),
            aspect.max(1e-3),
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        )
    }
}
