//! Error types for box counting, dimension estimation and the surrounding file I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all estimation operations
#[derive(Debug)]
pub enum FractalError {
    /// Raster or box size set rejected before any computation
    ///
    /// Raised for:
    /// - A raster with zero height or width
    /// - Ragged row data when building a raster
    /// - An empty box size set or a box size of zero
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// A box size produced zero occupied tiles, so its logarithm is undefined
    DegenerateSample {
        /// Box edge length whose count was zero
        size: usize,
    },

    /// Too few usable samples remain to fit a line
    InsufficientSamples {
        /// Samples with a non-zero count
        usable: usize,
        /// Distinct box sizes among the usable samples
        distinct: usize,
    },

    /// Command-line or configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a mask or plot image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Report could not be encoded as JSON
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "Invalid input: {reason}"),
            Self::DegenerateSample { size } => {
                write!(
                    f,
                    "Box size {size} has no occupied tiles; log(0) is undefined"
                )
            }
            Self::InsufficientSamples { usable, distinct } => {
                write!(
                    f,
                    "Insufficient samples for a line fit: {usable} usable, {distinct} distinct box sizes (need at least 2)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize report: {source}")
            }
        }
    }
}

impl std::error::Error for FractalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for estimation results
pub type Result<T> = std::result::Result<T, FractalError>;

impl From<image::ImageError> for FractalError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for FractalError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for FractalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> FractalError {
    FractalError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FractalError {
    FractalError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to the path it concerns
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> FractalError {
    FractalError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
