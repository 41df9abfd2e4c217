//! Per-frame pressure/velocity passes over the lattice.
//!
//! This is not a physical solver: pressure here is a cheap divergence
//! estimate of the surrounding velocities, fed back into the velocities at
//! quarter strength the next pass. The feedback damps divergence and
//! spreads momentum; the decay factor lets a field nobody stirs settle to
//! rest.

use glam::Vec2;

use crate::lattice::Lattice;

/// Per-frame decay applied to every cell velocity after the pressure
/// feedback.
pub const CELL_DECAY: f32 = 0.99;

/// Injection distance is clamped to this so the pointer sitting on top of a
/// cell cannot blow its velocity up.
pub const MIN_STIR_DISTANCE: f32 = 4.0;

impl Lattice {
    /// Stir cells within `radius` of `pos`: each receives `force` scaled by
    /// `radius / distance`, so nearby cells take the strongest push. Runs on
    /// every frame the pointer has a position, whether or not a button is
    /// down.
    pub fn add_force(&mut self, pos: Vec2, force: Vec2, radius: f32) {
        for cell in &mut self.cells {
            let dist = cell.pos.distance(pos);
            if dist < radius {
                let power = radius / dist.max(MIN_STIR_DISTANCE);
                cell.vel += force * power;
            }
        }
    }

    /// Pressure pass: recompute every cell's pressure from the surrounding
    /// velocities. Cardinal neighbors count in full, diagonals at half
    /// weight; opposing sides subtract, so the sum approximates the local
    /// divergence. Velocities are untouched, which makes repeated calls
    /// yield identical pressures.
    pub fn update_pressure(&mut self) {
        for i in 0..self.cells.len() {
            let l = self.cells[i].links;

            let pressure_x = self.cells[l.up_left].vel.x * 0.5
                + self.cells[l.left].vel.x
                + self.cells[l.down_left].vel.x * 0.5
                - self.cells[l.up_right].vel.x * 0.5
                - self.cells[l.right].vel.x
                - self.cells[l.down_right].vel.x * 0.5;

            let pressure_y = self.cells[l.up_left].vel.y * 0.5
                + self.cells[l.up].vel.y
                + self.cells[l.up_right].vel.y * 0.5
                - self.cells[l.down_left].vel.y * 0.5
                - self.cells[l.down].vel.y
                - self.cells[l.down_right].vel.y * 0.5;

            self.cells[i].pressure = (pressure_x + pressure_y) * 0.25;
        }
    }

    /// Velocity pass: fold a quarter of the surrounding pressure pattern
    /// back into each cell's velocity, then decay both components. Must run
    /// only after the pressure pass has covered the whole lattice; it reads
    /// pressures exclusively, so cells may be visited in any order.
    pub fn update_velocity(&mut self) {
        for i in 0..self.cells.len() {
            let l = self.cells[i].links;

            let grad_x = self.cells[l.up_left].pressure * 0.5
                + self.cells[l.left].pressure
                + self.cells[l.down_left].pressure * 0.5
                - self.cells[l.up_right].pressure * 0.5
                - self.cells[l.right].pressure
                - self.cells[l.down_right].pressure * 0.5;

            let grad_y = self.cells[l.up_left].pressure * 0.5
                + self.cells[l.up].pressure
                + self.cells[l.up_right].pressure * 0.5
                - self.cells[l.down_left].pressure * 0.5
                - self.cells[l.down].pressure
                - self.cells[l.down_right].pressure * 0.5;

            let cell = &mut self.cells[i];
            cell.vel.x = (cell.vel.x + grad_x * 0.25) * CELL_DECAY;
            cell.vel.y = (cell.vel.y + grad_y * 0.25) * CELL_DECAY;
        }
    }
}
