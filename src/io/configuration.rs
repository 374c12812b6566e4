//! Runtime constants and output naming defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension when loading from files
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Output settings
/// Suffix added to spiral output filenames
pub const OUTPUT_SUFFIX: &str = "_spiral";
/// Suffix added to trace output filenames
pub const TRACE_SUFFIX: &str = "_trace";
/// File extension recognized as grid input
pub const GRID_FILE_EXTENSION: &str = "txt";

// Progress bar display settings
/// Minimum batch size before a progress bar is shown
pub const MIN_FILES_FOR_PROGRESS: usize = 2;
