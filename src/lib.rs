//! Box-counting fractal dimension estimation for binary crack images
//!
//! A binary raster is tiled with square boxes at a sequence of sizes, the
//! occupied boxes are counted per size, and a least squares line is fitted to
//! `ln(count)` against `ln(1/size)`. The slope of that line is the estimate.

#![forbid(unsafe_code)]

/// Box counting and log-log dimension estimation
pub mod algorithm;
/// End-to-end analysis of a raster
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Least squares regression utilities
pub mod math;
/// Binary rasters, padding and tile partitioning
pub mod spatial;

pub use algorithm::box_counting::{Sample, count_boxes};
pub use algorithm::estimator::{DegeneratePolicy, FitResult, estimate_dimension};
pub use algorithm::scales::BoxSizeSet;
pub use io::error::{FractalError, Result};
pub use spatial::BinaryRaster;
