//! Command-line sudoku solver.
//!
//! Reads a puzzle in the workspace grid text form (digits for givens, `.`,
//! `_`, or `0` for empty cells) from `FILE`, or solves the built-in puzzle
//! when no file is given, then prints the solved grid and the time taken.
//! Exits with status 1 when the puzzle has no solution and status 2 on I/O
//! or parse problems.

mod render;

use std::{
    fs,
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::Parser;
use ninefold_core::Grid;
use ninefold_solver::Solver;

/// Arto Inkala's 2012 puzzle, solved when no puzzle file is given.
const DEFAULT_PUZZLE: &str = "
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

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file in grid text form; the built-in puzzle when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut grid = match load_puzzle(args.file.as_deref()) {
        Ok(grid) => grid,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let mut solver = Solver::new();
    let start = Instant::now();
    let solved = solver.solve(&mut grid);
    let elapsed = start.elapsed();

    let stats = solver.stats();
    log::debug!(
        "search entered {} frames and tried {} candidates",
        stats.recursions(),
        stats.candidates_tried()
    );

    if !solved {
        println!("No solution exists");
        process::exit(1);
    }

    print!("{}", render::decorated(&grid));
    println!("Time taken {:.3} seconds", elapsed.as_secs_f64());
}

fn load_puzzle(file: Option<&Path>) -> Result<Grid, String> {
    let Some(path) = file else {
        return DEFAULT_PUZZLE
            .parse()
            .map_err(|e| format!("built-in puzzle: {e}"));
    };
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    text.parse().map_err(|e| format!("{}: {e}", path.display()))
}
