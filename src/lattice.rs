//! Toroidal cell lattice covering the drawable surface.

use glam::Vec2;

use crate::cell::{Cell, NeighborLinks};
use crate::error::ConfigError;

/// The full 2D grid of cells. Cells are stored row-major
/// (`index = row * num_cols + col`) and keep precomputed index links to
/// their eight neighbors, wrapping at the edges so momentum pushed off one
/// side of the surface reappears on the opposite side.
#[derive(Debug, Clone)]
pub struct Lattice {
    pub cells: Vec<Cell>,
    pub num_cols: usize,
    pub num_rows: usize,
    pub resolution: f32,
}

impl Lattice {
    /// Build a lattice covering `width x height` pixels with square cells of
    /// edge `resolution`. Fails on non-finite or non-positive parameters.
    pub fn new(width: f32, height: f32, resolution: f32) -> Result<Self, ConfigError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(ConfigError::BadResolution { value: resolution });
        }
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::BadSurface { width, height });
        }

        let num_cols = (width / resolution).ceil() as usize;
        let num_rows = (height / resolution).ceil() as usize;

        let mut cells = Vec::with_capacity(num_cols * num_rows);
        for row in 0..num_rows {
            for col in 0..num_cols {
                let links = links_at(col, row, num_cols, num_rows);
                cells.push(Cell::new(col, row, resolution, links));
            }
        }

        Ok(Self {
            cells,
            num_cols,
            num_rows,
            resolution,
        })
    }

    /// Flat index of the cell at `(col, row)`.
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.num_cols + col
    }

    pub fn cell(&self, col: usize, row: usize) -> &Cell {
        &self.cells[self.index(col, row)]
    }

    pub fn cell_mut(&mut self, col: usize, row: usize) -> &mut Cell {
        let idx = self.index(col, row);
        &mut self.cells[idx]
    }

    /// Grid coordinates of the cell containing a surface position. The
    /// caller guarantees `pos` is within the surface bounds.
    pub fn cell_containing(&self, pos: Vec2) -> (usize, usize) {
        (
            (pos.x / self.resolution) as usize,
            (pos.y / self.resolution) as usize,
        )
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Drop all cells. A cleared lattice is the torn-down state; it must be
    /// rebuilt with [`Lattice::new`] before stepping again.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.num_cols = 0;
        self.num_rows = 0;
    }
}

/// Index links for the cell at `(col, row)`, wrapping both axes.
fn links_at(col: usize, row: usize, num_cols: usize, num_rows: usize) -> NeighborLinks {
    let up = wrap(row as isize - 1, num_rows);
    let down = wrap(row as isize + 1, num_rows);
    let left = wrap(col as isize - 1, num_cols);
    let right = wrap(col as isize + 1, num_cols);
    let idx = |c: usize, r: usize| r * num_cols + c;

    NeighborLinks {
        up: idx(col, up),
        down: idx(col, down),
        left: idx(left, row),
        right: idx(right, row),
        up_left: idx(left, up),
        up_right: idx(right, up),
        down_left: idx(left, down),
        down_right: idx(right, down),
    }
}

/// Wrap an axis value into `[0, len)`. `len` is at least 1, so a 1-wide
/// axis wraps every step back onto itself.
fn wrap(value: isize, len: usize) -> usize {
    let n = len as isize;
    (((value % n) + n) % n) as usize
}
