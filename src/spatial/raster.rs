//! Binary raster holding the foreground mask of a crack image
//!
//! Cells are stored row-major in an `ndarray` grid. A raster always has at least
//! one row and one column; every constructor enforces this so downstream counting
//! never has to reason about empty input.

use ndarray::{Array2, ArrayView2, Axis, Slice};

use crate::io::error::{Result, invalid_input};

/// Immutable-by-convention occupancy grid, `true` marks a foreground pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryRaster {
    cells: Array2<bool>,
}

impl BinaryRaster {
    /// Create an all-background raster
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is zero
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Self::from_array(Array2::from_elem((height, width), false))
    }

    /// Wrap an existing boolean grid (rows, cols)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the grid has zero rows or zero columns
    pub fn from_array(cells: Array2<bool>) -> Result<Self> {
        let (height, width) = cells.dim();
        if height == 0 || width == 0 {
            return Err(invalid_input(&format!(
                "raster must be non-empty, got {height}x{width}"
            )));
        }
        Ok(Self { cells })
    }

    /// Build a raster by evaluating `f(row, col)` for every cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is zero
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> bool,
    {
        Self::from_array(Array2::from_shape_fn((height, width), |(row, col)| {
            f(row, col)
        }))
    }

    /// Build a raster from equally long rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if there are no rows, rows are empty, or row lengths differ
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != width)
        {
            return Err(invalid_input(&format!(
                "row {index} has {} cells, expected {width}",
                row.as_ref().len()
            )));
        }

        let flat: Vec<bool> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|e| invalid_input(&e))?;
        Self::from_array(cells)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as (height, width)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Cell value; positions outside the raster read as background
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).copied().unwrap_or(false)
    }

    /// Set a single cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the position lies outside the raster
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        let (height, width) = self.dimensions();
        let cell = self.cells.get_mut((row, col)).ok_or_else(|| {
            invalid_input(&format!(
                "position ({row}, {col}) outside {height}x{width} raster"
            ))
        })?;
        *cell = value;
        Ok(())
    }

    /// Number of foreground cells
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Whether any cell is foreground
    pub fn has_foreground(&self) -> bool {
        self.cells.iter().any(|&cell| cell)
    }

    /// Whether any cell inside the half-open window is foreground
    ///
    /// The window is clipped to the raster, so parts hanging past the bottom or
    /// right edge contribute only background.
    pub fn any_in_window(&self, row: usize, col: usize, height: usize, width: usize) -> bool {
        let (rows, cols) = self.dimensions();
        let row_end = row.saturating_add(height).min(rows);
        let col_end = col.saturating_add(width).min(cols);
        if row >= row_end || col >= col_end {
            return false;
        }
        self.cells
            .slice_axis(Axis(0), Slice::from(row..row_end))
            .slice_axis(Axis(1), Slice::from(col..col_end))
            .iter()
            .any(|&cell| cell)
    }

    /// Read-only view of the underlying grid
    pub fn view(&self) -> ArrayView2<'_, bool> {
        self.cells.view()
    }
}
