//! The puzzle generation pipeline.

use gridnine_core::{Grid, Position};
use rand::{Rng, seq::SliceRandom as _};

use crate::PuzzleSeed;

/// Default number of cells blanked out of a generated puzzle.
pub const DEFAULT_BLANKS: u8 = 20;

/// A generated puzzle together with its solution and seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid with blanked cells.
    pub problem: Grid,
    /// The fully solved grid the problem was carved from.
    pub solution: Grid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates Sudoku puzzles with a configurable number of blank cells.
///
/// The number of blanks is the only difficulty knob; no
/// uniqueness-of-solution check is performed on the carved puzzle.
///
/// # Examples
///
/// ```
/// use gridnine_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::with_blanks(40);
///
/// // Reproducible generation from a fixed seed
/// let seed = PuzzleSeed::from_bytes([7; 32]);
/// let first = generator.generate_with_seed(seed);
/// let second = generator.generate_with_seed(seed);
/// assert_eq!(first, second);
/// assert_eq!(first.problem.empty_count(), 40);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    blanks: u8,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator blanking [`DEFAULT_BLANKS`] cells.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            blanks: DEFAULT_BLANKS,
        }
    }

    /// Creates a generator blanking the given number of cells.
    ///
    /// Values above 81 are clamped to 81 (an entirely empty puzzle).
    #[must_use]
    pub fn with_blanks(blanks: u8) -> Self {
        Self {
            blanks: blanks.min(81),
        }
    }

    /// Returns the configured number of blank cells.
    #[must_use]
    pub const fn blanks(&self) -> u8 {
        self.blanks
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// The seed is recorded in the returned [`GeneratedPuzzle`], so the
    /// result can be reproduced later with [`generate_with_seed`].
    ///
    /// [`generate_with_seed`]: PuzzleGenerator::generate_with_seed
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::from_entropy())
    }

    /// Generates the puzzle determined by the given seed.
    ///
    /// Equal seeds and blank counts always produce equal puzzles.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = fill_solution(&mut rng);
        let problem = blank_cells(&solution, self.blanks, &mut rng);
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

/// Produces a complete solved grid.
fn fill_solution<R: Rng>(rng: &mut R) -> Grid {
    let mut grid = Grid::new();
    fill_diagonal_boxes(&mut grid, rng);
    let completed = fill_remaining(&mut grid, 0);
    // A diagonally seeded grid always completes; anything else is a bug in
    // the seeding step.
    debug_assert!(completed);
    grid
}

/// Fills the three boxes on the main diagonal with random permutations.
///
/// These boxes share no row, column, or box, so each permutation needs no
/// legality check against the others.
fn fill_diagonal_boxes<R: Rng>(grid: &mut Grid, rng: &mut R) {
    for origin in [0u8, 3, 6] {
        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(rng);
        let mut next = digits.iter();
        for dr in 0..3u8 {
            for dc in 0..3u8 {
                let digit = next.next().copied().unwrap_or_default();
                grid.set(Position::new(origin + dr, origin + dc), digit);
            }
        }
    }
}

/// Fills all empty cells from the given row-major index onward, trying
/// digits in ascending order and backtracking on dead ends.
fn fill_remaining(grid: &mut Grid, index: u8) -> bool {
    if index == 81 {
        return true;
    }
    let pos = Position::from_index(index);
    if grid[pos] != 0 {
        return fill_remaining(grid, index + 1);
    }
    for num in 1..=9 {
        if grid.is_safe(pos, num) {
            grid.set(pos, num);
            if fill_remaining(grid, index + 1) {
                return true;
            }
            grid.set(pos, 0);
        }
    }
    false
}

/// Clears `count` randomly chosen cells of the solved grid.
///
/// The cells are drawn by shuffling all 81 positions and blanking a prefix,
/// so exactly `count` cells are cleared and the loop terminates for every
/// `count`, including 81.
fn blank_cells<R: Rng>(solution: &Grid, count: u8, rng: &mut R) -> Grid {
    let mut cells = Position::ALL;
    cells.shuffle(rng);

    let mut problem = solution.clone();
    for &pos in cells.iter().take(usize::from(count)) {
        problem.set(pos, 0);
    }
    problem
}
