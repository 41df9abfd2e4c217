//! Lattice cell: one node of the velocity/pressure grid.

use glam::Vec2;

/// Indices of the eight surrounding cells in the lattice's cell vector.
///
/// The lattice is toroidal, so every cell has all eight links; cells on an
/// edge link to the opposite edge, and a 1-wide or 1-tall lattice links to
/// itself. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborLinks {
    pub up: usize,
    pub down: usize,
    pub left: usize,
    pub right: usize,
    pub up_left: usize,
    pub up_right: usize,
    pub down_left: usize,
    pub down_right: usize,
}

/// A grid node carrying the local velocity and pressure.
///
/// Position and grid coordinates are fixed at construction; velocity is
/// mutated every frame and pressure is rederived every frame from the
/// surrounding velocities.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Top-left corner of the cell in surface pixels: `(col * r, row * r)`.
    pub pos: Vec2,
    /// Column in the lattice.
    pub col: usize,
    /// Row in the lattice.
    pub row: usize,
    /// Local velocity.
    pub vel: Vec2,
    /// Divergence-like scalar recomputed by the pressure pass.
    pub pressure: f32,
    /// Links to the eight neighbors.
    pub links: NeighborLinks,
}

impl Cell {
    /// Create a resting cell at grid position `(col, row)`.
    pub fn new(col: usize, row: usize, resolution: f32, links: NeighborLinks) -> Self {
        Self {
            pos: Vec2::new(col as f32 * resolution, row as f32 * resolution),
            col,
            row,
            vel: Vec2::ZERO,
            pressure: 0.0,
            links,
        }
    }
}
