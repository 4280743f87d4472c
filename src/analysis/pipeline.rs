//! One-shot box-counting analysis of a raster

use crate::algorithm::box_counting::{Sample, count_boxes};
use crate::algorithm::estimator::{DegeneratePolicy, FitResult, estimate_dimension};
use crate::algorithm::scales::BoxSizeSet;
use crate::io::error::Result;
use crate::spatial::raster::BinaryRaster;

/// Samples and fitted line for one raster
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Raster dimensions as (height, width)
    pub dimensions: (usize, usize),
    /// Number of foreground cells in the raster
    pub foreground: usize,
    /// Box sizes the raster was counted at
    pub sizes: BoxSizeSet,
    /// Occupied tile counts, one per box size in order
    pub samples: Vec<Sample>,
    /// Policy applied to zero counts
    pub policy: DegeneratePolicy,
    /// Log-log fit
    pub fit: FitResult,
}

impl Analysis {
    /// The fractal dimension estimate
    pub const fn dimension(&self) -> f64 {
        self.fit.slope
    }
}

/// Count boxes at every size and fit the log-log line
///
/// # Errors
///
/// Propagates counting errors and the estimator's `DegenerateSample` and
/// `InsufficientSamples` failures
pub fn analyze(
    raster: &BinaryRaster,
    sizes: &BoxSizeSet,
    policy: DegeneratePolicy,
) -> Result<Analysis> {
    let samples = count_boxes(raster, sizes)?;
    let fit = estimate_dimension(&samples, policy)?;

    Ok(Analysis {
        dimensions: raster.dimensions(),
        foreground: raster.foreground_count(),
        sizes: sizes.clone(),
        samples,
        policy,
        fit,
    })
}
