//! Quantitative per-frame diagnostics for a speck field.

use rayon::prelude::*;

use crate::system::SpeckField;

/// A speck counts as moving when its speed exceeds this, in surface pixels
/// per frame.
const MOVING_SPEED: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FieldMetrics {
    pub total_kinetic_energy: f32,
    pub max_cell_speed: f32,
    pub avg_cell_speed: f32,
    pub max_pressure: f32,
    pub avg_pressure: f32,
    pub moving_specks: usize,
    pub avg_speck_speed: f32,
    pub frame: usize,
}

impl FieldMetrics {
    /// Read-only reductions over the lattice and the speck population. The
    /// frame loop itself is serial; only this analysis fans out.
    pub fn analyze(field: &SpeckField, frame: usize) -> Self {
        let num_cells = field.lattice.len().max(1);

        let (total_kinetic_energy, cell_speed_sum, max_cell_speed) = field
            .lattice
            .cells
            .par_iter()
            .map(|cell| {
                let speed = cell.vel.length();
                (0.5 * speed * speed, speed, speed)
            })
            .reduce(
                || (0.0_f32, 0.0_f32, 0.0_f32),
                |a, b| (a.0 + b.0, a.1 + b.1, a.2.max(b.2)),
            );

        let (pressure_sum, max_pressure) = field
            .lattice
            .cells
            .par_iter()
            .map(|cell| (cell.pressure.abs(), cell.pressure.abs()))
            .reduce(|| (0.0_f32, 0.0_f32), |a, b| (a.0 + b.0, a.1.max(b.1)));

        let num_specks = field.particles.len().max(1);
        let (speck_speed_sum, moving_specks) = field
            .particles
            .par_iter()
            .map(|p| {
                let speed = p.vel.length();
                (speed, usize::from(speed > MOVING_SPEED))
            })
            .reduce(|| (0.0_f32, 0), |a, b| (a.0 + b.0, a.1 + b.1));

        Self {
            total_kinetic_energy,
            max_cell_speed,
            avg_cell_speed: cell_speed_sum / num_cells as f32,
            max_pressure,
            avg_pressure: pressure_sum / num_cells as f32,
            moving_specks,
            avg_speck_speed: speck_speed_sum / num_specks as f32,
            frame,
        }
    }

    pub fn print_summary(&self) {
        println!("Frame {} Metrics:", self.frame);
        println!("  Kinetic Energy: {:.6}", self.total_kinetic_energy);
        println!("  Max Cell Speed: {:.6}", self.max_cell_speed);
        println!("  Avg Cell Speed: {:.6}", self.avg_cell_speed);
        println!("  Max |Pressure|: {:.6}", self.max_pressure);
        println!("  Avg |Pressure|: {:.6}", self.avg_pressure);
        println!("  Moving Specks: {}", self.moving_specks);
        println!("  Avg Speck Speed: {:.6}", self.avg_speck_speed);
        println!();
    }
}

pub struct AnalysisRecorder {
    pub metrics_history: Vec<FieldMetrics>,
}

impl AnalysisRecorder {
    pub fn new() -> Self {
        Self {
            metrics_history: Vec::new(),
        }
    }

    pub fn record_frame(&mut self, field: &SpeckField, frame: usize) {
        let metrics = FieldMetrics::analyze(field, frame);
        self.metrics_history.push(metrics);
    }

    pub fn print_trends(&self) {
        if self.metrics_history.len() < 2 {
            return;
        }

        let first = &self.metrics_history[0];
        let last = &self.metrics_history[self.metrics_history.len() - 1];

        println!("=== TREND ANALYSIS ===");
        println!(
            "Kinetic Energy change: {:.6} -> {:.6} ({:+.3}%)",
            first.total_kinetic_energy,
            last.total_kinetic_energy,
            (last.total_kinetic_energy - first.total_kinetic_energy)
                / first.total_kinetic_energy.max(0.001)
                * 100.0
        );
        println!(
            "Avg Cell Speed change: {:.6} -> {:.6} ({:+.3}%)",
            first.avg_cell_speed,
            last.avg_cell_speed,
            (last.avg_cell_speed - first.avg_cell_speed) / first.avg_cell_speed.max(0.001) * 100.0
        );
        println!(
            "Moving Specks change: {} -> {}",
            first.moving_specks, last.moving_specks
        );
    }
}

impl Default for AnalysisRecorder {
    fn default() -> Self {
        Self::new()
    }
}
