//! Box counter: occupied tile counts of a binary raster across a set of scales
//!
//! Each scale is evaluated independently: the raster is virtually padded to a
//! multiple of the box size, partitioned into square tiles from the origin, and
//! every tile holding at least one foreground cell is counted once. With the
//! `rayon` feature scales are evaluated in parallel; samples always come back in
//! box size order.

use serde::{Deserialize, Serialize};

use crate::algorithm::scales::BoxSizeSet;
use crate::io::error::Result;
use crate::spatial::padding::PaddedRaster;
use crate::spatial::raster::BinaryRaster;
use crate::spatial::tiles::{TileGrid, TileOccupancy, is_occupied};

/// Occupied tile count at one box size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Box edge length
    pub size: usize,
    /// Number of occupied tiles
    pub count: usize,
}

impl Sample {
    /// Pair a box size with its count
    pub const fn new(size: usize, count: usize) -> Self {
        Self { size, count }
    }
}

/// Occupancy bitmap of every tile at one box size
///
/// # Errors
///
/// Returns `InvalidInput` if `size` is zero
pub fn occupancy_at(raster: &BinaryRaster, size: usize) -> Result<TileOccupancy> {
    let padded = PaddedRaster::new(raster, size)?;
    Ok(TileOccupancy::from_padded(&padded))
}

/// Number of occupied tiles at one box size
///
/// Stops scanning a tile at its first foreground cell; no bitmap is kept.
///
/// # Errors
///
/// Returns `InvalidInput` if `size` is zero
pub fn count_occupied(raster: &BinaryRaster, size: usize) -> Result<usize> {
    let padded = PaddedRaster::new(raster, size)?;
    let grid = TileGrid::new(&padded);
    Ok(grid
        .tiles()
        .filter(|tile| is_occupied(&padded, tile))
        .count())
}

/// Count occupied tiles for every box size, in box size order
///
/// # Errors
///
/// Returns `InvalidInput` if a box size is zero. A validated [`BoxSizeSet`]
/// never triggers this.
pub fn count_boxes(raster: &BinaryRaster, sizes: &BoxSizeSet) -> Result<Vec<Sample>> {
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;

        sizes
            .as_slice()
            .par_iter()
            .map(|&size| count_occupied(raster, size).map(|count| Sample::new(size, count)))
            .collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        sizes
            .iter()
            .map(|&size| count_occupied(raster, size).map(|count| Sample::new(size, count)))
            .collect()
    }
}
