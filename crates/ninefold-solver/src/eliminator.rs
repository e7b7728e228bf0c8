//! Candidate elimination to a fixed point.
//!
//! The [`Eliminator`] owns the per-cell candidate table. Each round of
//! [`eliminate`](Eliminator::eliminate) runs two sweeps: the assigned sweep
//! strikes every assigned digit from the candidate sets of its row, column,
//! and box peers, and the dangling sweep collapses a cell's set when a digit
//! has no other home within one of its groups. Sets that shrink to a single
//! digit are then written into the grid, which feeds the next round; the loop
//! stops when a round assigns nothing. The offsets of the cells left
//! ambiguous are recorded for the backtracking search.

use std::array;

use ninefold_core::{CELL_COUNT, DIMENSION, DigitSet, Grid, UNASSIGNED};
use tinyvec::ArrayVec;

use crate::house;

/// Constraint-propagation engine over a grid's candidate sets.
///
/// # Examples
///
/// Propagation alone restores a solved grid with one cell cleared, leaving
/// nothing for the search:
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_solver::Eliminator;
///
/// let mut grid: Grid = "
///     812 753 649
///     943 682 175
///     675 491 283
///     154 237 896
///     369 845 721
///     287 169 534
///     521 974 368
///     438 526 917
///     796 318 452
/// "
/// .parse()?;
/// grid.set_at(4, 4, 0);
///
/// let mut eliminator = Eliminator::new(&grid);
/// eliminator.eliminate(&mut grid);
///
/// assert_eq!(grid.get_at(4, 4), 4);
/// assert_eq!(eliminator.ambiguous_offset(0), None);
/// # Ok::<(), ninefold_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Eliminator {
    candidates: [Option<DigitSet>; CELL_COUNT],
    ambiguous: Vec<usize>,
}

impl Eliminator {
    /// Builds the candidate table for `grid`: a full set for every unassigned
    /// cell, no set for assigned ones.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        let candidates =
            array::from_fn(|offset| (grid.get(offset) == UNASSIGNED).then_some(DigitSet::FULL));
        Self {
            candidates,
            ambiguous: Vec::new(),
        }
    }

    /// Runs propagation until no candidate set changes, then records the
    /// ambiguous cells.
    ///
    /// Forced values are written into `grid` as they are proven. Propagation
    /// cannot fail: a contradictory grid just leaves some cell with an empty
    /// candidate set, which the search discovers and backtracks out of.
    pub fn eliminate(&mut self, grid: &mut Grid) {
        loop {
            self.sweep_assigned(grid);
            self.sweep_dangling();
            if !self.transfer_singles(grid) {
                break;
            }
        }
        self.build_offsets();
    }

    /// Returns the full candidate table, indexed by cell offset.
    ///
    /// Entries are `None` for assigned cells.
    #[must_use]
    pub fn candidates(&self) -> &[Option<DigitSet>; CELL_COUNT] {
        &self.candidates
    }

    /// Returns the candidate set of the cell at `offset`, `None` for an
    /// assigned cell.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not below [`CELL_COUNT`].
    #[must_use]
    pub fn candidates_at(&self, offset: usize) -> Option<DigitSet> {
        self.candidates[offset]
    }

    /// Returns the `index`th entry of the ambiguous-cell sequence, or `None`
    /// past its end.
    ///
    /// The `None` is how the search detects that every ambiguous cell has
    /// been decided.
    #[must_use]
    pub fn ambiguous_offset(&self, index: usize) -> Option<usize> {
        self.ambiguous.get(index).copied()
    }

    /// Strikes every assigned digit from the candidate sets of the cells
    /// sharing its row, column, or box. Cells are visited in row-major order.
    fn sweep_assigned(&mut self, grid: &Grid) {
        for offset in 0..CELL_COUNT {
            let value = grid.get(offset);
            if value == UNASSIGNED {
                continue;
            }
            let x = Grid::offset_to_x(offset);
            let y = Grid::offset_to_y(offset);
            for peer in house::row(y)
                .into_iter()
                .chain(house::column(x))
                .chain(house::box_containing(x, y))
            {
                if let Some(set) = &mut self.candidates[peer] {
                    set.remove(value);
                }
            }
        }
    }

    /// Collapses hidden singles, one group at a time: rows top to bottom,
    /// then columns left to right, then boxes in row-major order.
    fn sweep_dangling(&mut self) {
        for cells in house::all() {
            self.collapse_group(cells);
        }
    }

    /// Collapses every digit that has exactly one candidate home in `cells`.
    ///
    /// The homes are tallied from a snapshot taken before any write, so a
    /// collapse cannot feed another collapse within the same group pass. When
    /// two digits collapse the same cell, the larger digit wins.
    fn collapse_group(&mut self, cells: [usize; DIMENSION]) {
        let mut homes = [ArrayVec::<[usize; DIMENSION]>::new(); DIMENSION];
        for &offset in &cells {
            if let Some(set) = self.candidates[offset] {
                for digit in set {
                    homes[usize::from(digit - 1)].push(offset);
                }
            }
        }
        for digit in DigitSet::FULL {
            if let &[offset] = homes[usize::from(digit - 1)].as_slice() {
                self.candidates[offset] = Some(DigitSet::from_elem(digit));
            }
        }
    }

    /// Writes every single-candidate cell's digit into the grid and drops the
    /// set. Returns `true` if any cell was assigned.
    fn transfer_singles(&mut self, grid: &mut Grid) -> bool {
        let mut assigned = false;
        for (offset, slot) in self.candidates.iter_mut().enumerate() {
            if let Some(digit) = slot.and_then(DigitSet::as_single) {
                grid.set(offset, digit);
                *slot = None;
                assigned = true;
            }
        }
        assigned
    }

    /// Rebuilds the ambiguous-cell sequence: every offset that still holds a
    /// candidate set, in ascending order.
    fn build_offsets(&mut self) {
        self.ambiguous = self
            .candidates
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(offset, _)| offset)
            .collect();
    }
}
