//! Decorated grid rendering for terminal output.

use ninefold_core::{BOX_DIMENSION, DIMENSION, Grid, UNASSIGNED};

/// Renders `grid` with box rules: three-character cells, `|` between box
/// columns, a dashed line between box rows, `-` for unassigned cells.
pub fn decorated(grid: &Grid) -> String {
    const RULE: &str = "---------+---------+---------";

    let mut out = String::new();
    for y in 0..DIMENSION {
        if y > 0 && y % BOX_DIMENSION == 0 {
            out.push_str(RULE);
            out.push('\n');
        }
        for x in 0..DIMENSION {
            if x > 0 && x % BOX_DIMENSION == 0 {
                out.push('|');
            }
            let value = grid.get_at(x, y);
            out.push(' ');
            if value == UNASSIGNED {
                out.push('-');
            } else {
                out.push(char::from(b'0' + value));
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
