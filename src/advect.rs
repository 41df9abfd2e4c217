//! Speck advection and trail drawing.
//!
//! Each frame every speck samples the velocity of its containing cell
//! blended with the cells to the right and below, moves, and draws one
//! short segment. The blend keys on the speck's fractional position inside
//! the cell so a speck sliding toward a border is already being pulled by
//! the next cell over; without the neighbor terms specks pile up at cell
//! boundaries.

use glam::Vec2;
use rand::Rng;

use crate::lattice::Lattice;
use crate::particle::Particle;
use crate::surface::Surface;

/// Fraction of the blended cell velocity folded into a speck per frame.
pub const BLEND_RATE: f32 = 0.05;

/// Per-frame halving applied to every speck velocity, on top of the cell
/// decay in the solver.
pub const SPECK_DECAY: f32 = 0.5;

/// Upper bound of the random draw threshold. Specks that moved less than
/// the threshold draw a flicker of that length instead of a trail, so a
/// still field shimmers rather than going blank.
pub const SHIMMER_LIMIT: f32 = 0.5;

/// Advance every speck one frame and draw its trail onto `surface`.
///
/// Specks outside `[0, width) x [0, height)` respawn at a random position
/// with zero velocity and draw nothing this frame; the population size
/// never changes. The caller has already cleared the surface.
pub fn advect_specks(
    lattice: &Lattice,
    particles: &mut [Particle],
    width: f32,
    height: f32,
    max_stroke_width: f32,
    surface: &mut impl Surface,
    rng: &mut impl Rng,
) {
    let r = lattice.resolution;

    for p in particles {
        let in_bounds = p.pos.x >= 0.0 && p.pos.x < width && p.pos.y >= 0.0 && p.pos.y < height;
        if in_bounds {
            let (col, row) = lattice.cell_containing(p.pos);
            let cell = lattice.cell(col, row);
            let right = &lattice.cells[cell.links.right];
            let down = &lattice.cells[cell.links.down];

            // Fractional position inside the cell, 0 at the top-left edge.
            let ax = (p.pos.x % r) / r;
            let ay = (p.pos.y % r) / r;

            p.vel.x += ((1.0 - ax) * cell.vel.x + ax * right.vel.x + ay * down.vel.x) * BLEND_RATE;
            p.vel.y += ((1.0 - ay) * cell.vel.y + ax * right.vel.y + ay * down.vel.y) * BLEND_RATE;

            p.pos += p.vel;

            let dist = p.prev.distance(p.pos);
            let limit = rng.gen_range(0.0..SHIMMER_LIMIT);
            if dist > limit {
                let w = (max_stroke_width * (p.vel.x * p.vel.y).abs().min(1.0)).max(1.0);
                surface.begin_path();
                surface.move_to(p.pos.x, p.pos.y);
                surface.line_to(p.prev.x, p.prev.y);
                surface.stroke(w, p.color);
            } else {
                surface.begin_path();
                surface.move_to(p.pos.x, p.pos.y);
                surface.line_to(p.pos.x + limit, p.pos.y + limit);
                surface.stroke(1.0, p.color);
            }

            p.prev = p.pos;
        } else {
            p.respawn_at(Vec2::new(
                rng.gen_range(0.0..width),
                rng.gen_range(0.0..height),
            ));
        }

        p.vel *= SPECK_DECAY;
    }
}
