//! Puzzle generation for the hexadoku engine.
//!
//! This crate produces playable 16×16 puzzles in two steps:
//!
//! 1. [`SolutionGenerator`] fills an empty grid with a randomized
//!    backtracking search, yielding a complete constraint-satisfying
//!    solution.
//! 2. [`Carver`] blanks a difficulty-driven number of uniformly chosen
//!    cells from a copy of that solution, yielding the problem grid.
//!
//! [`PuzzleGenerator`] ties both steps to a [`PuzzleSeed`], so every puzzle
//! is reproducible from its seed and independent sessions draw from
//! uncorrelated random streams.
//!
//! # Examples
//!
//! ```
//! use hexadoku_core::Difficulty;
//! use hexadoku_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new(Difficulty::Medium).generate();
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(puzzle.problem.filled_count(), 256 - 120);
//! ```

pub mod carver;
pub mod generator;
pub mod seed;
pub mod solution;

pub use self::{
    carver::{CarveConfigError, Carver},
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
    solution::SolutionGenerator,
};
