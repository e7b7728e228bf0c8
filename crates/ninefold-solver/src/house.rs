//! Offset groups for rows, columns, and boxes.
//!
//! Each sudoku constraint ranges over one of 27 cell groups. The functions
//! here produce a group as an array of cell offsets in ascending order, which
//! fixes the deterministic sweep order used by the eliminator and the search.

use std::array;

use ninefold_core::{BOX_DIMENSION, DIMENSION, Grid};

/// Offsets of row `y`, left to right.
pub(crate) fn row(y: usize) -> [usize; DIMENSION] {
    array::from_fn(|x| Grid::offset_of(x, y))
}

/// Offsets of column `x`, top to bottom.
pub(crate) fn column(x: usize) -> [usize; DIMENSION] {
    array::from_fn(|y| Grid::offset_of(x, y))
}

/// Offsets of the box containing `(x, y)`, in row-major order.
pub(crate) fn box_containing(x: usize, y: usize) -> [usize; DIMENSION] {
    let left = x - x % BOX_DIMENSION;
    let top = y - y % BOX_DIMENSION;
    array::from_fn(|i| Grid::offset_of(left + i % BOX_DIMENSION, top + i / BOX_DIMENSION))
}

/// All 27 groups: rows top to bottom, then columns left to right, then boxes
/// in row-major order.
pub(crate) fn all() -> impl Iterator<Item = [usize; DIMENSION]> {
    let rows = (0..DIMENSION).map(row);
    let columns = (0..DIMENSION).map(column);
    let boxes = (0..DIMENSION).map(|i| {
        box_containing(
            i % BOX_DIMENSION * BOX_DIMENSION,
            i / BOX_DIMENSION * BOX_DIMENSION,
        )
    });
    rows.chain(columns).chain(boxes)
}
