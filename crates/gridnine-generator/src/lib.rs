//! Sudoku puzzle generation.
//!
//! [`PuzzleGenerator`] produces a fully solved grid and then blanks a
//! configurable number of cells to yield a playable puzzle:
//!
//! 1. **Diagonal seeding**: the three boxes on the main diagonal share no
//!    row, column, or box with each other, so each is filled with an
//!    independent random permutation of the digits 1-9.
//! 2. **Completion**: the remaining 54 cells are filled by backtracking in
//!    row-major order, which always succeeds for a freshly seeded grid.
//! 3. **Removal**: a random selection of cells is cleared to 0. No
//!    uniqueness-of-solution check is performed; a puzzle with many blanks
//!    may admit more than one completion.
//!
//! Generation is deterministic given a [`PuzzleSeed`]: the same seed always
//! produces the same [`GeneratedPuzzle`]. Every call owns its random number
//! generator, so concurrent generation needs no coordination.
//!
//! # Examples
//!
//! ```
//! use gridnine_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::with_blanks(30).generate();
//! assert_eq!(puzzle.problem.filled_count(), 81 - 30);
//! assert!(puzzle.solution.is_complete());
//! println!("seed: {}", puzzle.seed);
//! ```

mod generator;
mod seed;

pub use self::{
    generator::{DEFAULT_BLANKS, GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
