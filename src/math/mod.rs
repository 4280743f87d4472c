//! Mathematical utilities for the estimator

/// Ordinary least squares line fitting
pub mod regression;
