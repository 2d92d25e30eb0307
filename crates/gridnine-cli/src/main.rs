//! Command-line interface for generating and solving Sudoku puzzles.
//!
//! # Usage
//!
//! Generate a puzzle with the default 20 blank cells:
//!
//! ```sh
//! gridnine generate
//! ```
//!
//! Generate a sparser puzzle, print its solution, and reproduce it later
//! from the printed seed:
//!
//! ```sh
//! gridnine generate --blanks 50 --show-solution
//! gridnine generate --blanks 50 --seed <HEX>
//! ```
//!
//! Solve a puzzle from a file or standard input (digits 1-9; `.`, `_`, or
//! `0` for empty cells):
//!
//! ```sh
//! gridnine solve puzzle.txt
//! cat puzzle.txt | gridnine solve
//! ```
//!
//! Exit status is 1 when no solution exists and 2 on malformed input.

use std::{fs, io::Read as _, path::PathBuf, process, str::FromStr as _};

use clap::{Parser, Subcommand};
use gridnine_core::Grid;
use gridnine_generator::{DEFAULT_BLANKS, PuzzleGenerator, PuzzleSeed};
use gridnine_solver::BacktrackSolver;
use log::{debug, info};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a puzzle.
    Generate {
        /// Number of cells to blank out (0-81).
        #[arg(
            long,
            value_name = "COUNT",
            default_value_t = DEFAULT_BLANKS,
            value_parser = clap::value_parser!(u8).range(0..=81),
        )]
        blanks: u8,

        /// Seed as 64 hex characters; a random seed is drawn when omitted.
        #[arg(long, value_name = "HEX")]
        seed: Option<String>,

        /// Also print the solution grid.
        #[arg(long)]
        show_solution: bool,
    },
    /// Solve a puzzle read from FILE or standard input.
    Solve {
        /// Path to the puzzle file; reads standard input when omitted.
        file: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    match args.command {
        Command::Generate {
            blanks,
            seed,
            show_solution,
        } => run_generate(blanks, seed.as_deref(), show_solution),
        Command::Solve { file } => run_solve(file.as_deref()),
    }
}

fn run_generate(blanks: u8, seed: Option<&str>, show_solution: bool) {
    let seed = match seed {
        Some(text) => match PuzzleSeed::from_str(text) {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("invalid seed: {err}");
                process::exit(2);
            }
        },
        None => PuzzleSeed::from_entropy(),
    };

    info!("generating puzzle with {blanks} blank cells");
    let puzzle = PuzzleGenerator::with_blanks(blanks).generate_with_seed(seed);
    debug!("solution:\n{}", puzzle.solution);

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    print_indented(&puzzle.problem);
    if show_solution {
        println!();
        println!("Solution:");
        print_indented(&puzzle.solution);
    }
}

fn run_solve(file: Option<&std::path::Path>) {
    let text = match read_input(file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read puzzle: {err}");
            process::exit(2);
        }
    };
    let grid = match Grid::from_str(&text) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            process::exit(2);
        }
    };

    info!("solving puzzle with {} empty cells", grid.empty_count());
    match BacktrackSolver::new().solve(&grid) {
        Some(solution) => print_indented(&solution),
        None => {
            eprintln!("no solution found");
            process::exit(1);
        }
    }
}

fn read_input(file: Option<&std::path::Path>) -> std::io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_indented(grid: &Grid) {
    for line in grid.to_string().lines() {
        println!("  {line}");
    }
}
