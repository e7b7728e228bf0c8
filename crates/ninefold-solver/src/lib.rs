//! Constraint propagation and backtracking search for the Ninefold sudoku
//! solver.
//!
//! Solving runs in two stages over a [`ninefold_core::Grid`]:
//!
//! 1. An [`Eliminator`] maintains a candidate set for every unassigned cell
//!    and narrows the sets by applying the sudoku rules until no set changes,
//!    writing forced values straight into the grid.
//! 2. A [`Solver`] resolves the cells that stayed ambiguous by depth-first
//!    search, trying candidate digits in ascending order and backtracking out
//!    of dead ends.
//!
//! The [`rules`] module provides the whole-grid legality checks both stages
//! (and callers) rely on.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::Grid;
//! use ninefold_solver::{Solver, rules};
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
//! let mut solver = Solver::new();
//! assert!(solver.solve(&mut grid));
//! assert!(rules::is_solved(&grid));
//! # Ok::<(), ninefold_core::ParseGridError>(())
//! ```

pub mod eliminator;
mod house;
pub mod rules;
pub mod solver;

// Re-export commonly used types
pub use self::{
    eliminator::Eliminator,
    solver::{SearchStats, Solver},
};
