//! Benchmarks for full solves and the elimination pass.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ninefold_core::Grid;
use ninefold_solver::{Eliminator, Solver};

const HARD_PUZZLE: &str = "
    8__ ___ ___
    __3 6__ ___
    _7_ _9_ 2__
    _5_ __7 ___
    ___ _45 7__
    ___ 1__ _3_
    __1 ___ _68
    __8 5__ _1_
    _9_ ___ 4__
";

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("hard", HARD_PUZZLE.parse::<Grid>().unwrap()),
        ("empty", Grid::new()),
    ];

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let mut solver = Solver::new();
                    let solved = solver.solve(grid);
                    hint::black_box(solved)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_eliminate(c: &mut Criterion) {
    let grid = HARD_PUZZLE.parse::<Grid>().unwrap();

    c.bench_with_input(BenchmarkId::new("eliminate", "hard"), &grid, |b, grid| {
        b.iter_batched_ref(
            || hint::black_box((Eliminator::new(grid), grid.clone())),
            |(eliminator, grid)| {
                eliminator.eliminate(grid);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solve, bench_eliminate);
criterion_main!(benches);
