//! Input/output: command line, images, reports, plots and errors

/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Grayscale loading, binarization and mask export
pub mod image;
/// Terminal progress display
pub mod progress;
/// JSON analysis reports
pub mod report;
/// Log-log plot rendering
pub mod visualization;
