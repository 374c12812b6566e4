//! Spiral-order traversal of rectangular grids
//!
//! Walks a rectangular grid along its outer boundary (top row left to right,
//! right column downwards, bottom row right to left, left column upwards),
//! then recurses inward on the remaining sub-grid until every cell has been
//! visited exactly once, returning the flat visitation sequence.

#![forbid(unsafe_code)]

/// Core traversal implementation including the boundary frame and observation hooks
pub mod algorithm;
/// Input/output operations, error handling, and trace capture
pub mod io;
/// Rectangular grid storage and validation
pub mod spatial;

pub use algorithm::traversal::{spiral_traversal, spiral_traversal_observed};
pub use io::error::{Result, TraversalError};
pub use spatial::Grid;
