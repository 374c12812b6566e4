//! End-to-end batch processing of grid files through the CLI surface

use clap::Parser;
use spiralgrid::TraversalError;
use spiralgrid::io::cli::{Cli, FileProcessor};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

fn run(args: &[OsString]) -> spiralgrid::Result<()> {
    let mut full: Vec<OsString> = vec![OsString::from("spiralgrid")];
    full.extend(args.iter().cloned());

    let cli = Cli::parse_from(full);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

fn args(path: &Path, flags: &[&str]) -> Vec<OsString> {
    let mut out = vec![path.as_os_str().to_os_string()];
    out.extend(flags.iter().map(OsString::from));
    out
}

fn read(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => unreachable!("output must exist at {}: {error}", path.display()),
    }
}

#[test]
fn test_single_file_round_trip() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir must be creatable");
    };
    let input = dir.path().join("a.txt");
    let _ = fs::write(&input, "1 2 3\n4 5 6\n");

    let result = run(&args(&input, &["--quiet"]));
    assert!(result.is_ok());

    assert_eq!(read(&dir.path().join("a_spiral.txt")), "1 2 3 6 5 4\n");
}

#[test]
fn test_trace_flag_writes_trace_file() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir must be creatable");
    };
    let input = dir.path().join("a.txt");
    let _ = fs::write(&input, "1 2\n3 4\n");

    let result = run(&args(&input, &["--quiet", "--trace"]));
    assert!(result.is_ok());

    assert_eq!(read(&dir.path().join("a_spiral.txt")), "1 2 4 3\n");
    assert_eq!(
        read(&dir.path().join("a_trace.txt")),
        "#1\n0 0\n0 1\n#2\n1 1\n#3\n1 0\n#4\n"
    );
}

#[test]
fn test_directory_target_processes_all_grids() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir must be creatable");
    };
    let _ = fs::write(dir.path().join("a.txt"), "5\n");
    let _ = fs::write(dir.path().join("b.txt"), "1 2 3\n");
    let _ = fs::write(dir.path().join("notes.md"), "not a grid");

    let result = run(&args(dir.path(), &["--quiet"]));
    assert!(result.is_ok());

    assert_eq!(read(&dir.path().join("a_spiral.txt")), "5\n");
    assert_eq!(read(&dir.path().join("b_spiral.txt")), "1 2 3\n");
    assert!(!dir.path().join("notes_spiral.txt").exists());
}

#[test]
fn test_existing_output_is_skipped() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir must be creatable");
    };
    let input = dir.path().join("a.txt");
    let output = dir.path().join("a_spiral.txt");
    let _ = fs::write(&input, "1 2\n3 4\n");
    let _ = fs::write(&output, "sentinel\n");

    let result = run(&args(&input, &["--quiet"]));
    assert!(result.is_ok());

    assert_eq!(read(&output), "sentinel\n");
}

#[test]
fn test_no_skip_overwrites_existing_output() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir must be creatable");
    };
    let input = dir.path().join("a.txt");
    let output = dir.path().join("a_spiral.txt");
    let _ = fs::write(&input, "1 2\n3 4\n");
    let _ = fs::write(&output, "sentinel\n");

    let result = run(&args(&input, &["--quiet", "--no-skip"]));
    assert!(result.is_ok());

    assert_eq!(read(&output), "1 2 4 3\n");
}

#[test]
fn test_jagged_grid_file_fails() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir must be creatable");
    };
    let input = dir.path().join("a.txt");
    let _ = fs::write(&input, "1 2 3\n4 5\n");

    match run(&args(&input, &["--quiet"])) {
        Err(TraversalError::JaggedRows {
            row_index,
            expected,
            actual,
        }) => {
            assert_eq!(row_index, 1);
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        Ok(()) => unreachable!("jagged grid must fail"),
        Err(other) => unreachable!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_integer_cell_fails_with_line_number() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir must be creatable");
    };
    let input = dir.path().join("a.txt");
    let _ = fs::write(&input, "1 2\n3 x\n");

    match run(&args(&input, &["--quiet"])) {
        Err(TraversalError::Parse { line, reason, .. }) => {
            assert_eq!(line, 2);
            assert!(reason.contains('x'));
        }
        Ok(()) => unreachable!("non-integer cell must fail"),
        Err(other) => unreachable!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_grid_target_is_rejected() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir must be creatable");
    };
    let input = dir.path().join("a.csv");
    let _ = fs::write(&input, "1,2\n");

    match run(&args(&input, &["--quiet"])) {
        Err(TraversalError::InvalidTarget { .. }) => {}
        Ok(()) => unreachable!("non-grid target must fail"),
        Err(other) => unreachable!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_target_is_rejected() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir must be creatable");
    };
    let input = dir.path().join("missing.txt");

    match run(&args(&input, &["--quiet"])) {
        Err(TraversalError::InvalidTarget { .. }) => {}
        Ok(()) => unreachable!("missing target must fail"),
        Err(other) => unreachable!("unexpected error: {other}"),
    }
}

#[test]
fn test_blank_lines_are_ignored() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir must be creatable");
    };
    let input = dir.path().join("a.txt");
    let _ = fs::write(&input, "\n1 2 3\n\n4 5 6\n\n");

    let result = run(&args(&input, &["--quiet"]));
    assert!(result.is_ok());

    assert_eq!(read(&dir.path().join("a_spiral.txt")), "1 2 3 6 5 4\n");
}
