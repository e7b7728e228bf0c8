//! Whole-grid legality checks.
//!
//! These functions look only at assigned cell values; candidate bookkeeping
//! belongs to the [`Eliminator`](crate::Eliminator). The solver uses them to
//! reject contradictory givens up front, and tests use them to state the
//! legality invariant of a solved grid.

use ninefold_core::{DigitSet, Grid, UNASSIGNED};

use crate::house;

/// Returns `true` if no digit occurs twice in any row, column, or box.
///
/// Unassigned cells are ignored, so a partially filled grid can be
/// consistent.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_solver::rules;
///
/// assert!(rules::is_consistent(&Grid::new()));
///
/// let mut grid = Grid::new();
/// grid.set_at(0, 0, 5);
/// grid.set_at(8, 0, 5);
/// assert!(!rules::is_consistent(&grid));
/// ```
#[must_use]
pub fn is_consistent(grid: &Grid) -> bool {
    house::all().all(|cells| {
        let mut seen = DigitSet::new();
        for offset in cells {
            let value = grid.get(offset);
            if value == UNASSIGNED {
                continue;
            }
            if seen.contains(value) {
                return false;
            }
            seen.insert(value);
        }
        true
    })
}

/// Returns `true` if every cell is assigned.
#[must_use]
pub fn is_complete(grid: &Grid) -> bool {
    grid.values().iter().all(|&value| value != UNASSIGNED)
}

/// Returns `true` if the grid is a solution: complete and consistent, so
/// every row, column, and box holds each digit exactly once.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_solver::rules;
///
/// assert!(!rules::is_solved(&Grid::new()));
/// ```
#[must_use]
pub fn is_solved(grid: &Grid) -> bool {
    is_complete(grid) && is_consistent(grid)
}
