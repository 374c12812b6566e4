//! Rectangular grid storage backed by a dense 2D array
//!
//! Rectangularity is enforced at construction time, so traversal code can
//! rely on every row sharing one width without re-validating.

use ndarray::Array2;

use crate::io::error::{Result, TraversalError};

/// Rectangular grid of uniformly typed cells
///
/// Rows are stored contiguously in a dense array. A grid with zero rows
/// (or rows of zero width) is valid and simply has nothing to traverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    /// Build a grid from an ordered sequence of rows
    ///
    /// The first row fixes the expected width; every subsequent row must
    /// match it. The rows are consumed and repacked into dense storage.
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::JaggedRows`] naming the first offending
    /// row when row lengths differ, or [`TraversalError::Shape`] if dense
    /// repacking fails.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != col_count {
                return Err(TraversalError::JaggedRows {
                    row_index,
                    expected: col_count,
                    actual: row.len(),
                });
            }
        }

        let flat: Vec<T> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((row_count, col_count), flat)
            .map_err(|source| TraversalError::Shape {
                reason: source.to_string(),
            })?;

        Ok(Self { cells })
    }

    /// Wrap an existing dense array without copying
    pub const fn from_array(cells: Array2<T>) -> Self {
        Self { cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Borrow the cell at the given position, if it exists
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get((row, col))
    }

    /// Borrow the underlying dense array
    pub const fn as_array(&self) -> &Array2<T> {
        &self.cells
    }
}
