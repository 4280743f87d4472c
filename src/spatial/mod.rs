//! Spatial data structures for box counting
//!
//! This module contains spatial-related functionality including:
//! - The binary raster input
//! - Virtual edge padding to a multiple of the box size
//! - Tile partitioning and occupancy bitmaps

/// Edge padding of rasters to whole box multiples
pub mod padding;
/// Binary foreground raster
pub mod raster;
/// Tile grid layout and occupancy tracking
pub mod tiles;

pub use raster::BinaryRaster;
