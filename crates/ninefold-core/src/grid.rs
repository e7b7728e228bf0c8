//! Flat 9x9 cell storage.
//!
//! A [`Grid`] is a row-major array of 81 cell values, `0` for empty cells and
//! `1`-`9` for assigned digits. Cells are addressed either by linear offset
//! (`0..81`) or by `(x, y)` coordinates; the conversions are fixed-width
//! arithmetic and available as associated functions.
//!
//! The grid carries no sudoku rules. Boxes, candidates, and legality checks
//! belong to the solver crate, which reads and writes cells through the
//! accessors here.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Grid, UNASSIGNED};
//!
//! let mut grid = Grid::new();
//! grid.set(80, 9);
//!
//! assert_eq!(grid.get_at(8, 8), 9);
//! assert_eq!(Grid::offset_to_x(80), 8);
//! assert_eq!(Grid::offset_to_y(80), 8);
//! assert_eq!(grid.get(0), UNASSIGNED);
//! ```

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{BOX_DIMENSION, CELL_COUNT, DIMENSION, UNASSIGNED};

/// A 9x9 grid of cell values stored in row-major order.
///
/// Values are `0` ([`UNASSIGNED`]) for empty cells and `1`-`9` for digits.
/// The accessors are total over valid offsets and coordinates; they perform
/// no value validation, so keeping stored values in `0..=9` is the caller's
/// contract.
///
/// The text form used across the workspace is parseable with [`FromStr`] and
/// produced by [`Display`](fmt::Display): nine rows of nine cells, `_` (or
/// `.` / `0` on input) for empty cells, whitespace ignored.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
///
/// let grid: Grid = "
///     ___ ___ ___
///     ___ _1_ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ __2
/// "
/// .parse()?;
///
/// assert_eq!(grid.get_at(4, 1), 1);
/// assert_eq!(grid.get_at(8, 8), 2);
/// # Ok::<(), ninefold_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    values: [u8; CELL_COUNT],
}

impl Grid {
    /// Grid width in cells.
    pub const WIDTH: usize = DIMENSION;

    /// Grid height in cells.
    pub const HEIGHT: usize = DIMENSION;

    /// Creates a grid with every cell unassigned.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [UNASSIGNED; CELL_COUNT],
        }
    }

    /// Wraps a flat row-major value array.
    ///
    /// The caller is responsible for keeping values in `0..=9`; the grid
    /// stores whatever it is given.
    #[inline]
    #[must_use]
    pub const fn from_values(values: [u8; CELL_COUNT]) -> Self {
        Self { values }
    }

    /// Returns the value of the cell at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not below [`CELL_COUNT`].
    #[inline]
    #[must_use]
    pub const fn get(&self, offset: usize) -> u8 {
        self.values[offset]
    }

    /// Returns the value of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not below [`DIMENSION`].
    #[inline]
    #[must_use]
    pub const fn get_at(&self, x: usize, y: usize) -> u8 {
        self.values[Self::offset_of(x, y)]
    }

    /// Sets the cell at `offset` to `value`; [`UNASSIGNED`] clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not below [`CELL_COUNT`].
    #[inline]
    pub const fn set(&mut self, offset: usize, value: u8) {
        self.values[offset] = value;
    }

    /// Sets the cell at `(x, y)` to `value`; [`UNASSIGNED`] clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not below [`DIMENSION`].
    #[inline]
    pub const fn set_at(&mut self, x: usize, y: usize, value: u8) {
        self.values[Self::offset_of(x, y)] = value;
    }

    /// Returns the x coordinate (column) of `offset`.
    #[inline]
    #[must_use]
    pub const fn offset_to_x(offset: usize) -> usize {
        offset % Self::WIDTH
    }

    /// Returns the y coordinate (row) of `offset`.
    #[inline]
    #[must_use]
    pub const fn offset_to_y(offset: usize) -> usize {
        offset / Self::WIDTH
    }

    /// Returns the linear offset of `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not below [`DIMENSION`].
    #[inline]
    #[must_use]
    pub const fn offset_of(x: usize, y: usize) -> usize {
        assert!(
            x < Self::WIDTH && y < Self::HEIGHT,
            "coordinates out of range"
        );
        y * Self::WIDTH + x
    }

    /// Returns the flat row-major value array.
    #[inline]
    #[must_use]
    pub const fn values(&self) -> &[u8; CELL_COUNT] {
        &self.values
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the grid in its text form: nine rows of nine cells, `_` for
/// empty cells, one space between box triples, no trailing newline. The
/// output parses back to an equal grid.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..Self::HEIGHT {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..Self::WIDTH {
                if x > 0 && x % BOX_DIMENSION == 0 {
                    write!(f, " ")?;
                }
                let value = self.get_at(x, y);
                if value == UNASSIGNED {
                    write!(f, "_")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
        }
        Ok(())
    }
}

/// Parses a grid from text: digits `1`-`9` for givens, `.`, `_`, or `0` for
/// empty cells. All whitespace is ignored. Exactly 81 cells are required.
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut values = [UNASSIGNED; CELL_COUNT];
        let mut count = 0;
        for c in s.chars() {
            let value = match c {
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let digit = c as u8 - b'0';
                    digit
                }
                '.' | '_' | '0' => UNASSIGNED,
                c if c.is_whitespace() => continue,
                _ => return Err(ParseGridError::InvalidCharacter(c)),
            };
            if count < CELL_COUNT {
                values[count] = value;
            }
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(ParseGridError::WrongCellCount(count));
        }
        Ok(Self { values })
    }
}

/// Error returned when grid text cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// A character other than a digit, a placeholder, or whitespace.
    #[display("invalid character {_0:?} in grid text")]
    InvalidCharacter(#[error(not(source))] char),
    /// The text held fewer or more than 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}
