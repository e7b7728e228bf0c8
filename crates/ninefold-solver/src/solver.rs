//! Backtracking search over the ambiguous cells.
//!
//! The [`Solver`] runs the [`Eliminator`] once, then resolves the remaining
//! ambiguous cells by depth-first search. Each recursion level owns one cell
//! of the precomputed ambiguous sequence and tries that cell's candidates in
//! ascending order, so there is no re-scan for the "next empty cell" and the
//! result is fully deterministic. Legality is re-verified against the live
//! grid at every attempt, because sibling branches overwrite cells the
//! candidate table knows nothing about.

use ninefold_core::{DigitSet, Grid, UNASSIGNED};

use crate::{Eliminator, house, rules};

/// Counters describing one solving run.
///
/// `recursions` counts search frames entered (one per ambiguous cell reached,
/// plus the final frame that detects completion); `candidates_tried` counts
/// digit attempts, including illegal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    recursions: usize,
    candidates_tried: usize,
}

impl SearchStats {
    /// Returns the number of search frames entered.
    #[must_use]
    pub fn recursions(&self) -> usize {
        self.recursions
    }

    /// Returns the number of candidate digits attempted.
    #[must_use]
    pub fn candidates_tried(&self) -> usize {
        self.candidates_tried
    }
}

/// Recursive backtracking search seeded by one elimination run.
///
/// [`solve`](Self::solve) propagates constraints first, then walks the
/// ambiguous cells in offset order. On success the solution is left in the
/// grid; on failure the grid keeps its post-propagation state.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_solver::{Solver, rules};
///
/// let mut grid: Grid = "
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
/// .parse()?;
///
/// let mut solver = Solver::new();
/// assert!(solver.solve(&mut grid));
/// assert!(rules::is_solved(&grid));
/// assert_eq!(grid.get_at(0, 0), 5); // givens are conserved
/// # Ok::<(), ninefold_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    stats: SearchStats,
}

impl Solver {
    /// Creates a solver with zeroed statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Solves `grid` in place.
    ///
    /// Returns `true` when a complete legal assignment was found and written
    /// into `grid`, `false` when no solution exists. Grids whose givens
    /// already conflict are rejected without searching, so a directly
    /// contradictory puzzle fails in bounded time.
    pub fn solve(&mut self, grid: &mut Grid) -> bool {
        self.stats = SearchStats::default();
        if !rules::is_consistent(grid) {
            return false;
        }
        let mut eliminator = Eliminator::new(grid);
        eliminator.eliminate(grid);
        self.search(grid, &eliminator, 0)
    }

    /// Returns the statistics of the most recent [`solve`](Self::solve) call.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn search(&mut self, grid: &mut Grid, eliminator: &Eliminator, index: usize) -> bool {
        self.stats.recursions += 1;
        let Some(offset) = eliminator.ambiguous_offset(index) else {
            // Every ambiguous cell holds a legal digit.
            return true;
        };
        let x = Grid::offset_to_x(offset);
        let y = Grid::offset_to_y(offset);
        let candidates = eliminator.candidates_at(offset).unwrap_or(DigitSet::EMPTY);
        for digit in candidates {
            self.stats.candidates_tried += 1;
            if is_legal(grid, x, y, digit) {
                grid.set(offset, digit);
                if self.search(grid, eliminator, index + 1) {
                    return true;
                }
            }
        }
        // Dead end: undo this cell's tentative value before unwinding.
        grid.set(offset, UNASSIGNED);
        false
    }
}

/// Returns `true` if `digit` appears nowhere in row `y`, column `x`, or the
/// box containing `(x, y)`.
fn is_legal(grid: &Grid, x: usize, y: usize, digit: u8) -> bool {
    house::row(y)
        .into_iter()
        .chain(house::column(x))
        .chain(house::box_containing(x, y))
        .all(|offset| grid.get(offset) != digit)
}

#[cfg(test)]
mod tests {
    use ninefold_core::{CELL_COUNT, UNASSIGNED};

    use super::*;

    const HARD: &str = "
        8__ ___ ___
        __3 6__ ___
        _7_ _9_ 2__
        _5_ __7 ___
        ___ _45 7__
        ___ 1__ _3_
        __1 ___ _68
        __8 5__ _1_
        _9_ ___ 4__
    ";

    const SOLVED: &str = "
        812 753 649
        943 682 175
        675 491 283
        154 237 896
        369 845 721
        287 169 534
        521 974 368
        438 526 917
        796 318 452
    ";

    #[test]
    fn test_solves_hard_puzzle() {
        let original: Grid = HARD.parse().unwrap();
        let mut grid = original.clone();
        let mut solver = Solver::new();

        assert!(solver.solve(&mut grid));
        assert!(rules::is_solved(&grid));

        // Givens are conserved.
        for offset in 0..CELL_COUNT {
            if original.get(offset) != UNASSIGNED {
                assert_eq!(grid.get(offset), original.get(offset));
            }
        }

        assert!(solver.stats().recursions() >= 1);
        assert!(solver.stats().candidates_tried() >= 1);
    }

    #[test]
    fn test_solves_empty_grid() {
        let mut grid = Grid::new();
        let mut solver = Solver::new();

        assert!(solver.solve(&mut grid));
        assert!(rules::is_solved(&grid));
    }

    #[test]
    fn test_restores_cleared_cell_without_branching() {
        let original: Grid = SOLVED.parse().unwrap();
        let mut grid = original.clone();
        grid.set_at(4, 4, UNASSIGNED);

        let mut solver = Solver::new();
        assert!(solver.solve(&mut grid));
        assert_eq!(grid, original);

        // Propagation did all the work: the search entered one frame and
        // tried no candidates.
        assert_eq!(solver.stats().recursions(), 1);
        assert_eq!(solver.stats().candidates_tried(), 0);
    }

    #[test]
    fn test_rejects_duplicate_givens_without_searching() {
        let mut grid: Grid = "
            5__ _5_ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();
        let snapshot = grid.clone();

        let mut solver = Solver::new();
        assert!(!solver.solve(&mut grid));
        assert_eq!(solver.stats().recursions(), 0);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_dead_cell_fails_after_one_frame() {
        // (0, 0) sees 1-8 in its row and 9 in its column, so no digit fits,
        // yet no two givens conflict.
        let mut grid: Grid = "
            _12 345 678
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            9__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();

        let mut solver = Solver::new();
        assert!(!solver.solve(&mut grid));
        assert_eq!(solver.stats().recursions(), 1);
        assert_eq!(solver.stats().candidates_tried(), 0);
        assert_eq!(grid.get_at(0, 0), UNASSIGNED);
    }

    #[test]
    fn test_determinism() {
        let mut first: Grid = HARD.parse().unwrap();
        let mut second: Grid = HARD.parse().unwrap();
        let mut solver = Solver::new();

        assert!(solver.solve(&mut first));
        let first_stats = solver.stats();

        assert!(solver.solve(&mut second));
        assert_eq!(first, second);
        assert_eq!(solver.stats(), first_stats);
    }

    #[test]
    fn test_is_legal_checks_all_three_groups() {
        let mut grid = Grid::new();
        grid.set_at(0, 0, 5);

        assert!(!is_legal(&grid, 8, 0, 5)); // same row
        assert!(!is_legal(&grid, 0, 8, 5)); // same column
        assert!(!is_legal(&grid, 1, 1, 5)); // same box
        assert!(is_legal(&grid, 4, 4, 5));
        assert!(is_legal(&grid, 8, 0, 6));
    }

    #[test]
    fn test_stats_start_at_zero() {
        let solver = Solver::new();
        assert_eq!(solver.stats().recursions(), 0);
        assert_eq!(solver.stats().candidates_tried(), 0);
    }
}
