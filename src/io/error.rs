//! Error types for grid loading and traversal operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum TraversalError {
    /// Row lengths differ, so the input is not a rectangular grid
    JaggedRows {
        /// Index of the first row whose length deviates
        row_index: usize,
        /// Width established by the first row
        expected: usize,
        /// Width of the offending row
        actual: usize,
    },

    /// Dense array construction failed
    Shape {
        /// Description of the shape mismatch
        reason: String,
    },

    /// Grid dimensions exceed the loading safety cap
    GridTooLarge {
        /// Row count of the rejected grid
        rows: usize,
        /// Column count of the rejected grid
        cols: usize,
        /// Maximum allowed dimension
        max: usize,
    },

    /// Failed to read a grid file from the filesystem
    GridLoad {
        /// Path to the grid file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A cell token in a grid file is not a valid integer
    Parse {
        /// Path to the grid file
        path: PathBuf,
        /// One-based line number of the offending row
        line: usize,
        /// Description of the rejected token
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// CLI target is not a usable grid file or directory
    InvalidTarget {
        /// The rejected target path
        path: PathBuf,
        /// Explanation of why the target is unusable
        reason: &'static str,
    },
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JaggedRows {
                row_index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Row {row_index} has {actual} cells, expected {expected} (grid must be rectangular)"
                )
            }
            Self::Shape { reason } => {
                write!(f, "Grid shape error: {reason}")
            }
            Self::GridTooLarge { rows, cols, max } => {
                write!(f, "Grid size {rows}x{cols} exceeds maximum dimension {max}")
            }
            Self::GridLoad { path, source } => {
                write!(f, "Failed to load grid '{}': {source}", path.display())
            }
            Self::Parse { path, line, reason } => {
                write!(f, "Invalid cell in '{}' line {line}: {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for TraversalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GridLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TraversalError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for traversal results
pub type Result<T> = std::result::Result<T, TraversalError>;

/// Create an invalid target error
pub fn invalid_target(path: &std::path::Path, reason: &'static str) -> TraversalError {
    TraversalError::InvalidTarget {
        path: path.to_path_buf(),
        reason,
    }
}
