//! The 9×9 grid and its constraint-checking primitives.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::Position;

/// Number of cells on the board.
const CELL_COUNT: usize = 81;

/// A 9×9 Sudoku grid.
///
/// Cells hold values in `0..=9`, where `0` marks an empty cell. A grid with
/// some empty cells is a *puzzle*; a consistent grid with no empty cells is
/// a *solution*.
///
/// The legality checks ([`unused_in_row`], [`unused_in_col`],
/// [`unused_in_box`], and their conjunction [`is_safe`]) are pure queries
/// over the current contents; they never mutate the grid.
///
/// [`unused_in_row`]: Grid::unused_in_row
/// [`unused_in_col`]: Grid::unused_in_col
/// [`unused_in_box`]: Grid::unused_in_box
/// [`is_safe`]: Grid::is_safe
///
/// # Text format
///
/// Grids parse from and print to a plain text form: digits `1-9` for filled
/// cells, `.`, `_`, or `0` for empty cells, whitespace ignored on input.
///
/// ```
/// use gridnine_core::Grid;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// assert!(grid.is_consistent());
/// assert_eq!(grid.filled_count(), 30);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Grid {
    /// Creates an empty grid with all cells set to 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[0; 9]; 9],
        }
    }

    /// Creates a grid from a raw row-major cell matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DigitOutOfRange`] if any cell value exceeds 9.
    pub fn from_cells(cells: [[u8; 9]; 9]) -> Result<Self, GridError> {
        for row in &cells {
            for &value in row {
                if value > 9 {
                    return Err(GridError::DigitOutOfRange(value));
                }
            }
        }
        Ok(Self { cells })
    }

    /// Returns the raw row-major cell matrix.
    #[must_use]
    #[inline]
    pub const fn cells(&self) -> &[[u8; 9]; 9] {
        &self.cells
    }

    /// Sets the cell at `pos` to `value` (0 clears the cell).
    ///
    /// # Panics
    ///
    /// Panics if `value` exceeds 9.
    #[inline]
    pub fn set(&mut self, pos: Position, value: u8) {
        assert!(value <= 9, "cell value must be 0-9, got {value}");
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = value;
    }

    /// Resets every cell to 0.
    #[inline]
    pub fn clear(&mut self) {
        self.cells = [[0; 9]; 9];
    }

    /// Returns `true` iff `num` does not already appear in the given row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-8.
    #[must_use]
    pub fn unused_in_row(&self, row: u8, num: u8) -> bool {
        debug_assert!((1..=9).contains(&num));
        !self.cells[usize::from(row)].contains(&num)
    }

    /// Returns `true` iff `num` does not already appear in the given column.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in the range 0-8.
    #[must_use]
    pub fn unused_in_col(&self, col: u8, num: u8) -> bool {
        debug_assert!((1..=9).contains(&num));
        self.cells
            .iter()
            .all(|row| row[usize::from(col)] != num)
    }

    /// Returns `true` iff `num` does not already appear in the 3×3 box whose
    /// top-left corner is at `(box_row, box_col)`.
    ///
    /// The origin for the box containing an arbitrary cell is obtained from
    /// [`Position::box_origin`].
    ///
    /// # Panics
    ///
    /// Panics if `box_row` or `box_col` exceeds 6 (the last valid box
    /// origin).
    #[must_use]
    pub fn unused_in_box(&self, box_row: u8, box_col: u8, num: u8) -> bool {
        debug_assert!((1..=9).contains(&num));
        let (box_row, box_col) = (usize::from(box_row), usize::from(box_col));
        self.cells[box_row..box_row + 3]
            .iter()
            .all(|row| !row[box_col..box_col + 3].contains(&num))
    }

    /// Returns `true` iff `num` can legally occupy the cell at `pos`.
    ///
    /// This is the single legality predicate used by both the generator's
    /// fill step and the solver: the digit must be unused in the cell's row,
    /// column, and 3×3 box.
    #[must_use]
    pub fn is_safe(&self, pos: Position, num: u8) -> bool {
        let origin = pos.box_origin();
        self.unused_in_row(pos.row(), num)
            && self.unused_in_col(pos.col(), num)
            && self.unused_in_box(origin.row(), origin.col(), num)
    }

    /// Returns `true` iff no digit 1-9 appears twice in any row, column, or
    /// 3×3 box.
    ///
    /// Empty cells are ignored; both partial and full grids can be
    /// consistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        for i in 0..9 {
            let mut row_seen = 0u16;
            let mut col_seen = 0u16;
            for j in 0..9 {
                if !mark_seen(&mut row_seen, self.cells[i][j]) {
                    return false;
                }
                if !mark_seen(&mut col_seen, self.cells[j][i]) {
                    return false;
                }
            }
        }
        for box_row in [0, 3, 6] {
            for box_col in [0, 3, 6] {
                let mut seen = 0u16;
                for dr in 0..3 {
                    for dc in 0..3 {
                        if !mark_seen(&mut seen, self.cells[box_row + dr][box_col + dc]) {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    /// Returns `true` iff the grid is consistent and has no empty cells.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0 && self.is_consistent()
    }

    /// Returns the number of non-zero cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&value| value != 0)
            .count()
    }

    /// Returns the number of empty (zero) cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.filled_count()
    }
}

/// Records `value` in the bitmask, returning `false` on a duplicate digit.
fn mark_seen(seen: &mut u16, value: u8) -> bool {
    if value == 0 {
        return true;
    }
    let bit = 1 << value;
    if *seen & bit != 0 {
        return false;
    }
    *seen |= bit;
    true
}

impl Index<Position> for Grid {
    type Output = u8;

    #[inline]
    fn index(&self, pos: Position) -> &u8 {
        &self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &value) in row.iter().enumerate() {
                if j > 0 && j % 3 == 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "_")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[0u8; 9]; 9];
        let mut count = 0usize;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let value = cell_value(c).ok_or(GridError::UnexpectedCharacter(c))?;
            if count < CELL_COUNT {
                cells[count / 9][count % 9] = value;
            }
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(GridError::WrongCellCount(count));
        }
        Ok(Self { cells })
    }
}

fn cell_value(c: char) -> Option<u8> {
    if matches!(c, '.' | '_') {
        return Some(0);
    }
    let digit = c.to_digit(10)?;
    #[expect(clippy::cast_possible_truncation)]
    let digit = digit as u8;
    Some(digit)
}

/// Errors produced when building a grid from external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A character other than a digit, `.`, `_`, or whitespace was found.
    #[display("unexpected character {_0:?} in grid text")]
    UnexpectedCharacter(#[error(not(source))] char),
    /// The input did not contain exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
    /// A raw cell value was outside the range 0-9.
    #[display("cell value {_0} is outside 0-9")]
    DigitOutOfRange(#[error(not(source))] u8),
}
