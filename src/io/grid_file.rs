//! Text grid file parsing and result writing
//!
//! Grid files hold one row per line as whitespace-separated integer cells.
//! Blank lines are ignored, so trailing newlines and visual spacing in
//! hand-written files are harmless.

use std::fs;
use std::path::Path;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, TraversalError};
use crate::io::trace::TraceCapture;
use crate::spatial::Grid;

/// Load and parse a grid file
///
/// # Errors
///
/// Returns an error if the file cannot be read, a cell fails to parse,
/// the grid is jagged, or either dimension exceeds the loading cap.
pub fn load_grid(path: &Path) -> Result<Grid<i64>> {
    let text = fs::read_to_string(path).map_err(|source| TraversalError::GridLoad {
        path: path.to_path_buf(),
        source,
    })?;
    parse_grid(&text, path)
}

/// Parse grid text into rectangular storage
///
/// The path is only used to label errors; parsing itself never touches
/// the filesystem.
///
/// # Errors
///
/// Returns [`TraversalError::Parse`] for non-integer cells,
/// [`TraversalError::GridTooLarge`] when a dimension exceeds
/// [`MAX_GRID_DIMENSION`], and propagates jagged-row failures from
/// [`Grid::from_rows`].
pub fn parse_grid(text: &str, path: &Path) -> Result<Grid<i64>> {
    let mut rows: Vec<Vec<i64>> = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut cells = Vec::new();
        for token in line.split_whitespace() {
            let value = token.parse::<i64>().map_err(|source| TraversalError::Parse {
                path: path.to_path_buf(),
                line: line_index + 1,
                reason: format!("'{token}' is not an integer ({source})"),
            })?;
            cells.push(value);
        }
        rows.push(cells);
    }

    let row_count = rows.len();
    let col_count = rows.first().map_or(0, Vec::len);
    if row_count > MAX_GRID_DIMENSION || col_count > MAX_GRID_DIMENSION {
        return Err(TraversalError::GridTooLarge {
            rows: row_count,
            cols: col_count,
            max: MAX_GRID_DIMENSION,
        });
    }

    Grid::from_rows(rows)
}

/// Write a spiral sequence as a single space-separated line
///
/// # Errors
///
/// Returns [`TraversalError::FileSystem`] if the file cannot be written.
pub fn write_sequence(path: &Path, values: &[i64]) -> Result<()> {
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    let mut line = rendered.join(" ");
    line.push('\n');

    fs::write(path, line).map_err(|source| TraversalError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}

/// Write a rendered traversal trace
///
/// # Errors
///
/// Returns [`TraversalError::FileSystem`] if the file cannot be written.
pub fn write_trace(path: &Path, capture: &TraceCapture) -> Result<()> {
    fs::write(path, capture.render()).map_err(|source| TraversalError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}
