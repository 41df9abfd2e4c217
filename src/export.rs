//! PNG export of rendered frames.

use std::path::Path;

use crate::render::ImageSurface;
use crate::system::SpeckField;

/// Ticks a field against an [`ImageSurface`] and saves the result as PNG,
/// one file per frame.
pub struct FrameExporter {
    surface: ImageSurface,
}

impl FrameExporter {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: ImageSurface::new(width, height),
        }
    }

    /// The surface frames are rendered into. Exposed so a caller can tick
    /// the field itself and save only the frames it wants.
    pub fn surface(&mut self) -> &mut ImageSurface {
        &mut self.surface
    }

    /// Save the most recently rendered frame.
    pub fn save_png(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        self.surface.image().save(path)?;
        Ok(())
    }

    /// Advance the field one frame and save it.
    pub fn export_frame(
        &mut self,
        field: &mut SpeckField,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        field.tick(&mut self.surface);
        self.save_png(path)
    }

    /// Advance the field `frames` times, saving each frame as
    /// `{prefix}_frame_{n:04}.png` under `output_dir`.
    pub fn export_frame_sequence(
        &mut self,
        field: &mut SpeckField,
        frames: usize,
        output_dir: &Path,
        prefix: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        for i in 0..frames {
            let filename = format!("{}_frame_{:04}.png", prefix, i);
            self.export_frame(field, &output_dir.join(filename))?;
        }
        Ok(())
    }
}
