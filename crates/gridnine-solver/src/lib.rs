//! Backtracking Sudoku solver.
//!
//! [`BacktrackSolver`] completes an arbitrary partially filled [`Grid`] by
//! depth-first search: cells are visited in row-major order, candidate
//! digits 1-9 are tried in ascending order, and every placement is checked
//! against the row/column/box legality predicate before recursing. A
//! placement whose subtree is exhausted is undone before the next candidate
//! is tried.
//!
//! The solver never mutates its input. It works on a private copy and
//! returns the completed grid on success, so a failed solve leaves the
//! caller's grid exactly as it was.
//!
//! # Examples
//!
//! ```
//! use gridnine_core::Grid;
//! use gridnine_solver::BacktrackSolver;
//!
//! let puzzle: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let solver = BacktrackSolver::new();
//! let solution = solver.solve(&puzzle).expect("puzzle is solvable");
//! assert!(solution.is_complete());
//! ```

use gridnine_core::{Grid, Position};

/// A solver that completes grids by exhaustive backtracking.
///
/// Stateless; a single instance can solve any number of grids.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Attempts to complete the given grid.
    ///
    /// Returns the completed grid, or `None` when no assignment of the empty
    /// cells satisfies the row/column/box constraints. Input whose filled
    /// cells already violate a constraint is likewise reported as `None`;
    /// the solver does not diagnose which constraint is broken.
    ///
    /// The input grid is never mutated.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        if !grid.is_consistent() {
            return None;
        }
        let mut work = grid.clone();
        complete_from(&mut work, 0).then_some(work)
    }
}

/// Fills all empty cells from the given row-major index onward.
///
/// Recursion depth is bounded by the 81 cells of the board.
fn complete_from(grid: &mut Grid, index: u8) -> bool {
    if index == 81 {
        return true;
    }
    let pos = Position::from_index(index);
    if grid[pos] != 0 {
        return complete_from(grid, index + 1);
    }
    for num in 1..=9 {
        if grid.is_safe(pos, num) {
            grid.set(pos, num);
            if complete_from(grid, index + 1) {
                return true;
            }
            grid.set(pos, 0);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

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

    const SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    #[test]
    fn test_solves_known_puzzle_exactly() {
        let puzzle: Grid = PUZZLE.parse().unwrap();
        let expected: Grid = SOLUTION.parse().unwrap();

        let solution = BacktrackSolver::new().solve(&puzzle).unwrap();
        assert_eq!(solution, expected);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let puzzle: Grid = PUZZLE.parse().unwrap();
        let before = puzzle.clone();
        let _ = BacktrackSolver::new().solve(&puzzle);
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_solved_input_returned_unchanged() {
        let solved: Grid = SOLUTION.parse().unwrap();
        let result = BacktrackSolver::new().solve(&solved).unwrap();
        assert_eq!(result, solved);
    }

    #[test]
    fn test_empty_grid_is_solvable() {
        let solution = BacktrackSolver::new().solve(&Grid::new()).unwrap();
        assert!(solution.is_complete());
    }

    #[test]
    fn test_duplicate_in_row_fails() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), 5);
        grid.set(Position::new(0, 8), 5);
        assert_eq!(BacktrackSolver::new().solve(&grid), None);
    }

    #[test]
    fn test_consistent_but_unsolvable_fails() {
        // Row 0 needs a 9 in its last cell, but column 8 already has one.
        let mut grid = Grid::new();
        for (col, num) in (0..8).zip(1..=8) {
            grid.set(Position::new(0, col), num);
        }
        grid.set(Position::new(4, 8), 9);
        assert!(grid.is_consistent());
        assert_eq!(BacktrackSolver::new().solve(&grid), None);
    }

    #[test]
    fn test_solves_generated_puzzle() {
        use std::str::FromStr as _;

        use gridnine_generator::{PuzzleGenerator, PuzzleSeed};

        let seed = PuzzleSeed::from_str(
            "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
        )
        .unwrap();
        let puzzle = PuzzleGenerator::with_blanks(45).generate_with_seed(seed);

        let solution = BacktrackSolver::new().solve(&puzzle.problem).unwrap();
        assert!(solution.is_complete());
        // The generator's own solution must also be accepted as-is.
        assert_eq!(
            BacktrackSolver::new().solve(&puzzle.solution),
            Some(puzzle.solution)
        );
    }
}
