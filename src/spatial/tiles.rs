//! Square tile partition of a padded raster and per-scale occupancy bitmaps
//!
//! Tiles are non-overlapping, anchored at (0, 0) and enumerated row-major. A
//! tile is occupied when it holds at least one foreground cell; the occupancy
//! of every tile at one scale is recorded in a [`TileOccupancy`] bitmap.

use bitvec::prelude::*;
use std::fmt;

use crate::spatial::padding::PaddedRaster;

/// One `size × size` tile, addressed by its grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Tile row in the tile grid
    pub grid_row: usize,
    /// Tile column in the tile grid
    pub grid_col: usize,
    /// Top pixel row covered by the tile
    pub row: usize,
    /// Left pixel column covered by the tile
    pub col: usize,
}

/// Layout of the tile grid for one box size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    /// Box edge length
    pub size: usize,
    /// Number of tile rows (`new_height / size`)
    pub rows: usize,
    /// Number of tile columns (`new_width / size`)
    pub cols: usize,
}

impl TileGrid {
    /// Tile grid covering a padded raster
    pub const fn new(padded: &PaddedRaster<'_>) -> Self {
        let size = padded.box_size();
        Self {
            size,
            rows: padded.height() / size,
            cols: padded.width() / size,
        }
    }

    /// Total number of tiles, the upper bound for any occupied count
    pub const fn tile_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Iterate tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.rows).flat_map(move |grid_row| {
            (0..self.cols).map(move |grid_col| Tile {
                grid_row,
                grid_col,
                row: grid_row * self.size,
                col: grid_col * self.size,
            })
        })
    }
}

/// Occupancy predicate: any single foreground cell marks the whole tile
pub fn is_occupied(padded: &PaddedRaster<'_>, tile: &Tile) -> bool {
    padded.block_any(tile.row, tile.col)
}

/// Row-major occupancy bitmap of a tile grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileOccupancy {
    grid: TileGrid,
    bits: BitVec,
}

impl TileOccupancy {
    /// Evaluate the occupancy predicate for every tile of the padded raster
    pub fn from_padded(padded: &PaddedRaster<'_>) -> Self {
        let grid = TileGrid::new(padded);
        let mut bits = bitvec![0; grid.tile_count()];
        for (index, tile) in grid.tiles().enumerate() {
            if is_occupied(padded, &tile) {
                bits.set(index, true);
            }
        }
        Self { grid, bits }
    }

    /// Tile grid layout
    pub const fn grid(&self) -> TileGrid {
        self.grid
    }

    /// Number of occupied tiles
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether the tile at (`grid_row`, `grid_col`) is occupied; out of range is unoccupied
    pub fn is_occupied(&self, grid_row: usize, grid_col: usize) -> bool {
        if grid_row >= self.grid.rows || grid_col >= self.grid.cols {
            return false;
        }
        self.bits.get(grid_row * self.grid.cols + grid_col).as_deref() == Some(&true)
    }

    /// Grid positions of occupied tiles in row-major order
    pub fn occupied_tiles(&self) -> Vec<(usize, usize)> {
        self.bits
            .iter_ones()
            .map(|index| (index / self.grid.cols, index % self.grid.cols))
            .collect()
    }
}

impl fmt::Display for TileOccupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TileOccupancy(size {}, {}/{} occupied)",
            self.grid.size,
            self.count(),
            self.grid.tile_count()
        )
    }
}
