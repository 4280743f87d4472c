//! Dimension estimator: log-log regression over box counting samples
//!
//! Samples are mapped to `(ln(1/size), ln(count))` and a least squares line is
//! fitted; its slope is the box-counting dimension. Zero counts have no logarithm
//! and are handled by an explicit [`DegeneratePolicy`] rather than propagating
//! `-inf` into the fit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::algorithm::box_counting::Sample;
use crate::io::error::{FractalError, Result};
use crate::math::regression::{least_squares, r_squared};

/// Minimum number of usable points for a line fit
pub const MIN_FIT_POINTS: usize = 2;

/// How zero-count samples are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Fail the whole estimation with `DegenerateSample` at the first zero count
    #[default]
    Reject,
    /// Discard zero-count samples and fit the remainder
    Drop,
}

/// A sample in log space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogSample {
    /// Box size the point was derived from
    pub size: usize,
    /// `ln(1 / size)`
    pub x: f64,
    /// `ln(count)`
    pub y: f64,
}

impl LogSample {
    /// Log-transform a sample, `None` when its count is zero
    pub fn from_sample(sample: &Sample) -> Option<Self> {
        (sample.count > 0).then(|| Self {
            size: sample.size,
            x: -(sample.size as f64).ln(),
            y: (sample.count as f64).ln(),
        })
    }
}

/// Fitted log-log line and the points it was fitted to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Slope of the fit, the fractal dimension estimate
    pub slope: f64,
    /// Intercept of the fit
    pub intercept: f64,
    /// `slope * x + intercept` for each fitted point
    pub fitted_y: Vec<f64>,
    /// Log-space points that entered the fit, aligned with `fitted_y`
    pub points: Vec<LogSample>,
    /// Coefficient of determination of the fit
    pub r_squared: f64,
    /// Box sizes discarded under [`DegeneratePolicy::Drop`]
    pub dropped_sizes: Vec<usize>,
}

impl FitResult {
    /// The fractal dimension estimate
    pub const fn dimension(&self) -> f64 {
        self.slope
    }

    /// Vertical residuals `y - fitted_y` per point
    pub fn residuals(&self) -> Vec<f64> {
        self.points
            .iter()
            .zip(&self.fitted_y)
            .map(|(point, fitted)| point.y - fitted)
            .collect()
    }
}

/// Log-transform samples under the given policy
///
/// Returns the usable points and the sizes that were dropped.
///
/// # Errors
///
/// Returns `DegenerateSample` for the first zero count under
/// [`DegeneratePolicy::Reject`]
pub fn to_log_samples(
    samples: &[Sample],
    policy: DegeneratePolicy,
) -> Result<(Vec<LogSample>, Vec<usize>)> {
    let mut points = Vec::with_capacity(samples.len());
    let mut dropped = Vec::new();

    for sample in samples {
        match (LogSample::from_sample(sample), policy) {
            (Some(point), _) => points.push(point),
            (None, DegeneratePolicy::Reject) => {
                return Err(FractalError::DegenerateSample { size: sample.size });
            }
            (None, DegeneratePolicy::Drop) => dropped.push(sample.size),
        }
    }

    Ok((points, dropped))
}

/// Estimate the fractal dimension from box counting samples
///
/// # Errors
///
/// Returns:
/// - `DegenerateSample` if a count is zero under [`DegeneratePolicy::Reject`]
/// - `InsufficientSamples` if fewer than two usable points remain, or they do
///   not span at least two distinct box sizes
pub fn estimate_dimension(samples: &[Sample], policy: DegeneratePolicy) -> Result<FitResult> {
    let (points, dropped_sizes) = to_log_samples(samples, policy)?;

    let distinct = points
        .iter()
        .map(|point| point.size)
        .collect::<BTreeSet<_>>()
        .len();
    let insufficient = || FractalError::InsufficientSamples {
        usable: points.len(),
        distinct,
    };
    if points.len() < MIN_FIT_POINTS || distinct < MIN_FIT_POINTS {
        return Err(insufficient());
    }

    let xs: Vec<f64> = points.iter().map(|point| point.x).collect();
    let ys: Vec<f64> = points.iter().map(|point| point.y).collect();
    let fit = least_squares(&xs, &ys).ok_or_else(insufficient)?;

    let fitted_y = xs.iter().map(|&x| fit.predict(x)).collect();
    let r_squared = r_squared(&fit, &xs, &ys);

    Ok(FitResult {
        slope: fit.slope,
        intercept: fit.intercept,
        fitted_y,
        points,
        r_squared,
        dropped_sizes,
    })
}
