//! Example demonstrating basic hexadoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty level
//! - Generate a random puzzle, or reproduce one from a seed
//! - Display the seed, problem, and solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a previously generated puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```

use clap::{Parser, ValueEnum};
use hexadoku_core::{BOARD_SIZE, Difficulty, Position, ValueGrid};
use hexadoku_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level controlling how many cells are blanked.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Seed reproducing a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty.into());

    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {}", generator.difficulty());
    println!();
    println!("Problem:");
    print_grid(&puzzle.problem);
    println!();
    println!("Solution:");
    print_grid(&puzzle.solution);
}

fn print_grid(grid: &ValueGrid) {
    for y in 0..BOARD_SIZE {
        print!("  ");
        for x in 0..BOARD_SIZE {
            match grid.get(Position::new(x, y)) {
                Some(symbol) => print!("{symbol} "),
                None => print!(". "),
            }
        }
        println!();
    }
}
