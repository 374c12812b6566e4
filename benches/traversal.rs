//! Performance measurement for spiral traversal across grid sizes and shapes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spiralgrid::spatial::Grid;
use spiralgrid::spiral_traversal;
use std::hint::black_box;

fn square_grid(size: usize) -> Option<Grid<u64>> {
    let rows: Vec<Vec<u64>> = (0..size)
        .map(|r| (0..size).map(|c| (r * size + c) as u64).collect())
        .collect();
    Grid::from_rows(rows).ok()
}

/// Measures traversal cost as square grids grow
fn bench_square_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral_traversal_square");

    for size in &[64_usize, 256, 1024] {
        let Some(grid) = square_grid(*size) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(spiral_traversal(black_box(&grid))));
        });
    }

    group.finish();
}

/// Measures the guard-heavy extremes: one cell wide and one cell tall
fn bench_degenerate_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral_traversal_degenerate");

    let cells = 65_536_usize;
    let shapes = [("wide", 1_usize, cells), ("tall", cells, 1_usize)];

    for (label, rows, cols) in &shapes {
        let source: Vec<Vec<u64>> = (0..*rows)
            .map(|r| (0..*cols).map(|c| (r * cols + c) as u64).collect())
            .collect();
        let Ok(grid) = Grid::from_rows(source) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(label), label, |b, _| {
            b.iter(|| black_box(spiral_traversal(black_box(&grid))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_square_grids, bench_degenerate_shapes);
criterion_main!(benches);
