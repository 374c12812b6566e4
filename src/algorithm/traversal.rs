//! Boundary-frame spiral traversal
//!
//! Maintains four indices delimiting the still-unvisited sub-rectangle and
//! repeatedly walks its four sides, shrinking one side per leg, until the
//! frame collapses. Every cell of a rectangular grid is appended to the
//! output exactly once.

use crate::algorithm::observer::{Phase, SilentObserver, TraversalObserver};
use crate::spatial::Grid;

/// Boundary indices delimiting the unvisited rectangular sub-region
///
/// All bounds are inclusive. The indices are signed because the end bounds
/// legitimately pass below their begin counterparts (and below zero) once a
/// side has been fully consumed; that crossing is the termination signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// First unvisited row
    pub row_begin: isize,
    /// Last unvisited row
    pub row_end: isize,
    /// First unvisited column
    pub col_begin: isize,
    /// Last unvisited column
    pub col_end: isize,
}

impl Frame {
    /// Frame covering an entire grid of the given dimensions
    pub const fn covering(rows: usize, cols: usize) -> Self {
        Self {
            row_begin: 0,
            row_end: rows as isize - 1,
            col_begin: 0,
            col_end: cols as isize - 1,
        }
    }

    /// Whether any unvisited cells remain inside the frame
    pub const fn is_active(&self) -> bool {
        self.row_begin <= self.row_end && self.col_begin <= self.col_end
    }
}

/// Flatten a rectangular grid into spiral order
///
/// Starts at the top-left corner and walks the outer boundary clockwise,
/// then recurses inward until all cells are consumed. The input is only
/// read; calling twice on the same grid yields identical sequences.
pub fn spiral_traversal<T: Clone>(grid: &Grid<T>) -> Vec<T> {
    spiral_traversal_observed(grid, &mut SilentObserver)
}

/// Spiral traversal reporting each leg and visited cell to an observer
///
/// A [`Phase`] announcement precedes every leg of every pass, including
/// legs whose walk is suppressed because the frame has degenerated to a
/// single remaining row or column. Cell events carry grid coordinates in
/// visitation order.
pub fn spiral_traversal_observed<T, O>(grid: &Grid<T>, observer: &mut O) -> Vec<T>
where
    T: Clone,
    O: TraversalObserver,
{
    let mut sequence = Vec::with_capacity(grid.len());
    if grid.rows() == 0 || grid.cols() == 0 {
        return sequence;
    }

    let mut frame = Frame::covering(grid.rows(), grid.cols());

    while frame.is_active() {
        observer.phase_started(Phase::TopRow);
        for col in frame.col_begin..=frame.col_end {
            visit_cell(grid, frame.row_begin, col, observer, &mut sequence);
        }
        frame.row_begin += 1;

        observer.phase_started(Phase::RightColumn);
        for row in frame.row_begin..=frame.row_end {
            visit_cell(grid, row, frame.col_end, observer, &mut sequence);
        }
        frame.col_end -= 1;

        // A lone remaining row was already consumed by the top leg
        observer.phase_started(Phase::BottomRow);
        if frame.row_begin <= frame.row_end {
            for col in (frame.col_begin..=frame.col_end).rev() {
                visit_cell(grid, frame.row_end, col, observer, &mut sequence);
            }
        }
        frame.row_end -= 1;

        // A lone remaining column was already consumed by the right leg
        observer.phase_started(Phase::LeftColumn);
        if frame.col_begin <= frame.col_end {
            for row in (frame.row_begin..=frame.row_end).rev() {
                visit_cell(grid, row, frame.col_begin, observer, &mut sequence);
            }
        }
        frame.col_begin += 1;
    }

    sequence
}

/// Append one cell to the output and report it, skipping out-of-frame indices
fn visit_cell<T, O>(grid: &Grid<T>, row: isize, col: isize, observer: &mut O, out: &mut Vec<T>)
where
    T: Clone,
    O: TraversalObserver,
{
    if row < 0 || col < 0 {
        return;
    }
    if let Some(value) = grid.get(row as usize, col as usize) {
        observer.cell_visited(row as usize, col as usize);
        out.push(value.clone());
    }
}
