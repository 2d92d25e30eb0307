//! Cell coordinates on the 9×9 board.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// Rows and columns are numbered 0-8 from the top-left corner. Positions map
/// to a row-major linear index in `0..81`, which is the traversal order used
/// by the backtracking search.
///
/// # Examples
///
/// ```
/// use gridnine_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.index(), 4 * 9 + 7);
/// assert_eq!(pos.box_origin(), Position::new(3, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a row-major linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self {
            row: index / 9,
            col: index % 9,
        }
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major linear index (0-80).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.row * 9 + self.col
    }

    /// Returns the top-left corner of the 3×3 box containing this position.
    #[must_use]
    #[inline]
    pub const fn box_origin(self) -> Self {
        Self {
            row: self.row - self.row % 3,
            col: self.col - self.col % 3,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
