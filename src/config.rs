//! Construction-time tunables for a speck field.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters fixed when a field is built. There is no runtime
/// reconfiguration; rebuilding the field is the way to change them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of specks. The population never grows or shrinks: specks that
    /// drift off the surface are relocated, not removed.
    pub speck_count: usize,
    /// Edge length of one lattice cell, in surface pixels.
    pub resolution: f32,
    /// Radius around the pointer within which motion stirs the lattice.
    pub pen_size: f32,
    /// Upper bound on the stroke width of a speck trail.
    pub max_stroke_width: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            speck_count: 5000,
            resolution: 30.0,
            pen_size: 100.0,
            max_stroke_width: 2.0,
        }
    }
}

impl FieldConfig {
    /// Load a config from a JSON file. Missing fields fall back to the
    /// defaults, so a file may override just one knob.
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }
}
