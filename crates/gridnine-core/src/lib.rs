//! Core grid type and constraint primitives for 9×9 Sudoku.
//!
//! This crate provides the [`Grid`] value type shared by puzzle generation
//! and solving, together with the legality checks that define the game:
//! no digit 1-9 may appear twice in any row, column, or 3×3 box.
//!
//! A grid is a plain 9×9 matrix of cell values in `0..=9`, where `0` marks
//! an empty cell. It carries no identity beyond its contents and is cheap
//! to clone.
//!
//! # Examples
//!
//! ```
//! use gridnine_core::{Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 0), 5);
//!
//! // 5 is now taken in row 0, column 0, and the top-left box
//! assert!(!grid.is_safe(Position::new(0, 8), 5));
//! assert!(!grid.is_safe(Position::new(8, 0), 5));
//! assert!(!grid.is_safe(Position::new(1, 1), 5));
//! assert!(grid.is_safe(Position::new(4, 4), 5));
//! ```

pub mod grid;
pub mod position;

pub use self::{
    grid::{Grid, GridError},
    position::Position,
};
