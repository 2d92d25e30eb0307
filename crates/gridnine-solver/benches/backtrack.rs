//! Benchmarks for the backtracking solver.
//!
//! Measures solving a 30-given puzzle, a sparse generated puzzle, and the
//! empty grid (the largest search the solver can face).
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::{hint, str::FromStr as _};

use criterion::{Criterion, criterion_group, criterion_main};
use gridnine_core::Grid;
use gridnine_generator::{PuzzleGenerator, PuzzleSeed};
use gridnine_solver::BacktrackSolver;

const PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

fn bench_solve_known_puzzle(c: &mut Criterion) {
    let puzzle: Grid = PUZZLE.parse().unwrap();
    let solver = BacktrackSolver::new();

    c.bench_function("solve_known_puzzle", |b| {
        b.iter(|| solver.solve(hint::black_box(&puzzle)));
    });
}

fn bench_solve_sparse_puzzle(c: &mut Criterion) {
    let seed = PuzzleSeed::from_str(SEED).unwrap();
    let puzzle = PuzzleGenerator::with_blanks(60).generate_with_seed(seed);
    let solver = BacktrackSolver::new();

    c.bench_function("solve_sparse_puzzle", |b| {
        b.iter(|| solver.solve(hint::black_box(&puzzle.problem)));
    });
}

fn bench_solve_empty_grid(c: &mut Criterion) {
    let empty = Grid::new();
    let solver = BacktrackSolver::new();

    c.bench_function("solve_empty_grid", |b| {
        b.iter(|| solver.solve(hint::black_box(&empty)));
    });
}

criterion_group!(
    benches,
    bench_solve_known_puzzle,
    bench_solve_sparse_puzzle,
    bench_solve_empty_grid
);
criterion_main!(benches);
