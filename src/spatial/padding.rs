//! Edge padding of a raster up to a whole number of boxes
//!
//! Padding is virtual: a [`PaddedRaster`] borrows the source raster and reports
//! background for every cell past its original bounds, so no grid is copied and
//! the source is never mutated.

use crate::io::error::{Result, invalid_input};
use crate::spatial::raster::BinaryRaster;

/// Padding required to tile a raster with boxes of a given size
///
/// Padding is only ever added at the bottom and right so tiles stay anchored
/// at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingInfo {
    /// Rows of background appended below the raster
    pub pad_bottom: usize,
    /// Columns of background appended right of the raster
    pub pad_right: usize,
    /// Height after padding, a multiple of the box size
    pub new_height: usize,
    /// Width after padding, a multiple of the box size
    pub new_width: usize,
}

impl PaddingInfo {
    /// Whether padding is required at all
    pub const fn needs_padding(&self) -> bool {
        self.pad_bottom + self.pad_right > 0
    }
}

/// Round both dimensions up to the next multiple of `size`
///
/// `size` must be non-zero; callers validate box sizes before reaching here.
pub const fn padded_dimensions(height: usize, width: usize, size: usize) -> (usize, usize) {
    (height.div_ceil(size) * size, width.div_ceil(size) * size)
}

/// Calculate padding for a raster of the given dimensions
pub const fn calculate_padding(height: usize, width: usize, size: usize) -> PaddingInfo {
    let (new_height, new_width) = padded_dimensions(height, width, size);
    PaddingInfo {
        pad_bottom: new_height - height,
        pad_right: new_width - width,
        new_height,
        new_width,
    }
}

/// Borrowed view of a raster extended with background to a multiple of the box size
#[derive(Debug, Clone, Copy)]
pub struct PaddedRaster<'a> {
    source: &'a BinaryRaster,
    size: usize,
    padding: PaddingInfo,
}

impl<'a> PaddedRaster<'a> {
    /// Pad `source` for boxes of edge length `size`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `size` is zero
    pub fn new(source: &'a BinaryRaster, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(invalid_input(&"box size must be at least 1"));
        }
        let (height, width) = source.dimensions();
        Ok(Self {
            source,
            size,
            padding: calculate_padding(height, width, size),
        })
    }

    /// Box edge length the view was padded for
    pub const fn box_size(&self) -> usize {
        self.size
    }

    /// Padded height
    pub const fn height(&self) -> usize {
        self.padding.new_height
    }

    /// Padded width
    pub const fn width(&self) -> usize {
        self.padding.new_width
    }

    /// Padding applied to the source
    pub const fn padding(&self) -> PaddingInfo {
        self.padding
    }

    /// The unpadded raster
    pub const fn source(&self) -> &'a BinaryRaster {
        self.source
    }

    /// Cell value in padded coordinates; padding cells are background
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.padding.new_height && col < self.padding.new_width && self.source.get(row, col)
    }

    /// Whether the `size × size` block with top-left corner (row, col) has a foreground cell
    pub fn block_any(&self, row: usize, col: usize) -> bool {
        self.source.any_in_window(row, col, self.size, self.size)
    }
}
