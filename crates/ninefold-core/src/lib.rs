//! Core data types for the Ninefold sudoku solver.
//!
//! This crate holds the building blocks the solver works on:
//!
//! - [`Grid`]: flat 9x9 cell storage with offset/coordinate conversion and a
//!   parseable text form. The grid knows its dimensions and nothing else;
//!   boxes, candidates, and legality live in `ninefold-solver`.
//! - [`DigitSet`]: a bounded set of digits 1-9 backed by a single bit mask,
//!   used for per-cell candidate tracking.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Grid, UNASSIGNED};
//!
//! let mut grid: Grid = "
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
//! .parse()?;
//!
//! assert_eq!(grid.get_at(0, 0), 5);
//! assert_eq!(grid.get_at(2, 0), UNASSIGNED);
//!
//! grid.set_at(2, 0, 4);
//! assert_eq!(grid.get(Grid::offset_of(2, 0)), 4);
//! # Ok::<(), ninefold_core::ParseGridError>(())
//! ```

pub mod digit_set;
pub mod grid;

// Re-export commonly used types
pub use self::{
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
};

/// Number of cells per row and column, and the largest digit.
pub const DIMENSION: usize = 9;

/// Side length of the 3x3 boxes a grid divides into.
pub const BOX_DIMENSION: usize = 3;

/// Total number of cells in a grid.
pub const CELL_COUNT: usize = DIMENSION * DIMENSION;

/// Cell value marking an empty cell.
pub const UNASSIGNED: u8 = 0;
