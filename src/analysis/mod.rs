//! Analysis pipeline composing box counting and dimension estimation

/// End-to-end estimation of a single raster
pub mod pipeline;

pub use pipeline::{Analysis, analyze};
