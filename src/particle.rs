//! A speck: the point mass drawn as a moving trail.

use glam::Vec2;
use rand::Rng;

/// One speck of the field. `prev` anchors the trail segment drawn each
/// frame; `color` is randomized at spawn and never changes.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub prev: Vec2,
    pub vel: Vec2,
    pub color: [u8; 3],
}

impl Particle {
    /// Spawn a resting speck at `pos` with a random color.
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            prev: pos,
            vel: Vec2::ZERO,
            color: [
                rng.gen_range(0..=u8::MAX),
                rng.gen_range(0..=u8::MAX),
                rng.gen_range(0..=u8::MAX),
            ],
        }
    }

    /// Teleport to `pos`, clearing the velocity and the trail anchor so the
    /// speck leaves no streak across the jump.
    pub fn respawn_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.prev = pos;
        self.vel = Vec2::ZERO;
    }
}
