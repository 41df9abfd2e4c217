//! Frame orchestration: the speck field itself.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::advect::advect_specks;
use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::lattice::Lattice;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::surface::Surface;

/// The whole interactive system: a cell lattice covering the surface, a
/// fixed population of specks, and the pointer sample feeding the solver.
///
/// The field never schedules itself. The host calls [`SpeckField::tick`]
/// once per rendered frame and owns the cadence; pointer events only ever
/// write the [`Pointer`] fields.
#[derive(Debug)]
pub struct SpeckField {
    pub config: FieldConfig,
    pub width: f32,
    pub height: f32,
    pub lattice: Lattice,
    pub particles: Vec<Particle>,
    pub pointer: Pointer,
    rng: StdRng,
}

impl SpeckField {
    /// Build a ready field covering `width x height` surface pixels.
    /// Fails fast on degenerate dimensions or resolution.
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Result<Self, ConfigError> {
        Self::build(config, width, height, StdRng::from_entropy())
    }

    /// Like [`SpeckField::new`] but with a fixed rng seed, for tests and
    /// reproducible captures.
    pub fn with_seed(
        config: FieldConfig,
        width: f32,
        height: f32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::build(config, width, height, StdRng::seed_from_u64(seed))
    }

    fn build(
        config: FieldConfig,
        width: f32,
        height: f32,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        let lattice = Lattice::new(width, height, config.resolution)?;
        let particles = spawn_specks(config.speck_count, width, height, &mut rng);
        Ok(Self {
            config,
            width,
            height,
            lattice,
            particles,
            pointer: Pointer::default(),
            rng,
        })
    }

    /// Advance exactly one frame.
    ///
    /// Order is load-bearing: the pointer stirs the lattice and pressures
    /// are derived for every cell first, then the surface is cleared and
    /// every speck moves and draws against the just-stirred velocities, and
    /// only then does the pressure feedback rewrite the velocities. Specks
    /// therefore always render the field as injected this frame, not the
    /// diffused field the next frame will see.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        if self.lattice.is_empty() {
            // Torn down; no frame may begin.
            return;
        }

        let pointer_vel = self.pointer.velocity();
        if let Some(pos) = self.pointer.pos {
            self.lattice.add_force(pos, pointer_vel, self.config.pen_size);
        }
        self.lattice.update_pressure();

        surface.clear();
        advect_specks(
            &self.lattice,
            &mut self.particles,
            self.width,
            self.height,
            self.config.max_stroke_width,
            surface,
            &mut self.rng,
        );

        self.lattice.update_velocity();
        self.pointer.advance();
    }

    /// Tear the field down: drop the lattice and the specks and forget the
    /// pointer. Idempotent, and safe before the first tick. A torn-down
    /// field skips frames until rebuilt via [`SpeckField::resize`].
    pub fn reset(&mut self) {
        self.lattice.clear();
        self.particles.clear();
        self.pointer.clear();
    }

    /// Rebuild for a new surface size: fresh lattice, fresh speck
    /// population inside the new bounds, pointer cleared. On error the
    /// field is left untouched.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        let lattice = Lattice::new(width, height, self.config.resolution)?;
        self.lattice = lattice;
        self.width = width;
        self.height = height;
        self.particles = spawn_specks(self.config.speck_count, width, height, &mut self.rng);
        self.pointer.clear();
        Ok(())
    }
}

fn spawn_specks(count: usize, width: f32, height: f32, rng: &mut StdRng) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let pos = Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
            Particle::new(pos, rng)
        })
        .collect()
}
