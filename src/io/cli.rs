//! Command-line interface for batch spiral traversal of text grid files

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::algorithm::traversal::{spiral_traversal, spiral_traversal_observed};
use crate::io::configuration::{GRID_FILE_EXTENSION, OUTPUT_SUFFIX, TRACE_SUFFIX};
use crate::io::error::{Result, invalid_target};
use crate::io::grid_file;
use crate::io::progress::ProgressManager;
use crate::io::trace::TraceCapture;

/// Command-line arguments for the spiral traversal tool
#[derive(Parser)]
#[command(name = "spiralgrid")]
#[command(
    author,
    version,
    about = "Flatten rectangular grid files into spiral order"
)]
pub struct Cli {
    /// Input grid file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Write a phase/coordinate trace alongside each output
    #[arg(short, long)]
    pub trace: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of grid files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or any file's load, traversal
    /// output, or trace output fails.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some(GRID_FILE_EXTENSION) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_target(
                    &self.cli.target,
                    "target file must be a .txt grid",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(GRID_FILE_EXTENSION)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_target(
                &self.cli.target,
                "target must be a .txt grid file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let grid = grid_file::load_grid(input_path)?;

        let (sequence, capture) = if self.cli.trace {
            let mut capture = TraceCapture::with_capacity(grid.len());
            let sequence = spiral_traversal_observed(&grid, &mut capture);
            (sequence, Some(capture))
        } else {
            (spiral_traversal(&grid), None)
        };

        let output_path = Self::get_output_path(input_path);
        grid_file::write_sequence(&output_path, &sequence)?;

        if let Some(capture) = capture {
            let trace_path = Self::get_trace_path(input_path);
            grid_file::write_trace(&trace_path, &capture)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        Self::derived_path(input_path, OUTPUT_SUFFIX)
    }

    fn get_trace_path(input_path: &Path) -> PathBuf {
        Self::derived_path(input_path, TRACE_SUFFIX)
    }

    fn derived_path(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let file_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            suffix,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(file_name)
        } else {
            PathBuf::from(file_name)
        }
    }
}
