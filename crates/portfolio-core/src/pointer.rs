use glam::Vec2;

use crate::constants::FOLLOWER_LAG;

/// Pointer state captured once per event and handed to each consumer as an
/// immutable copy at the start of its frame step.
///
/// `ndc` is normalized to \[-1, 1\] on both axes with +y up (for the 3D
/// field); `px` is raw client pixels (for the 2D follower).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSnapshot {
    pub ndc: Vec2,
    pub px: Vec2,
}

impl PointerSnapshot {
    pub fn from_client(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        let w = viewport_w.max(1.0);
        let h = viewport_h.max(1.0);
        Self {
            ndc: Vec2::new((client_x / w) * 2.0 - 1.0, -(client_y / h) * 2.0 + 1.0),
            px: Vec2::new(client_x, client_y),
        }
    }
}

/// Lagged visual proxy: every frame it closes a fixed fraction of the
/// remaining distance to the target, so it converges but never lands.
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    pub position: Vec2,
    factor: f32,
}

impl Default for Follower {
    fn default() -> Self {
        Self::new(FOLLOWER_LAG)
    }
}

impl Follower {
    pub fn new(factor: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            factor,
        }
    }

    pub fn step(&mut self, target: Vec2) {
        self.position += (target - self.position) * self.factor;
    }
}
