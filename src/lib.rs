//! Core library for speckflow: a cursor-stirred particle speck field.
//!
//! A coarse toroidal lattice of cells carries velocity and a cheap
//! divergence-style pressure; pointer motion stirs the cells, specks sample
//! and trail the resulting flow. The host owns the frame cadence and calls
//! [`SpeckField::tick`] once per rendered frame.

pub mod advect;
pub mod analysis;
pub mod cell;
pub mod config;
pub mod desktop;
pub mod error;
pub mod export;
pub mod lattice;
pub mod particle;
pub mod pointer;
pub mod render;
pub mod solver;
pub mod surface;
pub mod system;

pub use advect::advect_specks;
pub use analysis::{AnalysisRecorder, FieldMetrics};
pub use cell::{Cell, NeighborLinks};
pub use config::FieldConfig;
pub use desktop::SpeckApp;
pub use error::ConfigError;
pub use export::FrameExporter;
pub use lattice::Lattice;
pub use particle::Particle;
pub use pointer::Pointer;
pub use render::ImageSurface;
pub use surface::{NullSurface, Surface};
pub use system::SpeckField;
