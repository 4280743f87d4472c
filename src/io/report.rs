//! JSON report of an analysis for external plotting and archiving

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::algorithm::box_counting::Sample;
use crate::algorithm::estimator::{DegeneratePolicy, LogSample};
use crate::analysis::Analysis;
use crate::io::error::{Result, file_system};

/// Serializable summary of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionReport {
    /// Name of the analysed image, usually its file name
    pub source: String,
    /// Raster height in pixels
    pub height: usize,
    /// Raster width in pixels
    pub width: usize,
    /// Foreground pixel count
    pub foreground: usize,
    /// Zero-count handling used for the fit
    pub policy: DegeneratePolicy,
    /// Occupied tile counts per box size
    pub samples: Vec<Sample>,
    /// Points that entered the fit
    pub points: Vec<LogSample>,
    /// Fitted `ln(count)` per point
    pub fitted_y: Vec<f64>,
    /// Box sizes excluded from the fit
    pub dropped_sizes: Vec<usize>,
    /// Estimated fractal dimension
    pub dimension: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
}

impl DimensionReport {
    /// Summarize an analysis under the given source name
    pub fn new(source: impl Into<String>, analysis: &Analysis) -> Self {
        let (height, width) = analysis.dimensions;
        Self {
            source: source.into(),
            height,
            width,
            foreground: analysis.foreground,
            policy: analysis.policy,
            samples: analysis.samples.clone(),
            points: analysis.fit.points.clone(),
            fitted_y: analysis.fit.fitted_y.clone(),
            dropped_sizes: analysis.fit.dropped_sizes.clone(),
            dimension: analysis.fit.slope,
            intercept: analysis.fit.intercept,
            r_squared: analysis.fit.r_squared,
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a report back from JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the text is not a valid report
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write the report as JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `Serialization` or `FileSystem` on failure
    pub fn write<P: AsRef<Path>>(&self, output_path: P) -> Result<()> {
        let output_path = output_path.as_ref();
        let json = self.to_json()?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system(parent, "create directory", e))?;
        }

        std::fs::write(output_path, json).map_err(|e| file_system(output_path, "write report", e))
    }
}
