//! Live game state for hexadoku sessions.
//!
//! This crate holds one puzzle session's board: which cells are fixed by the
//! carved puzzle, which the player may edit, and whether each cell's current
//! value conflicts with a peer. Every mutation revalidates the edited cell
//! and all of its peers, so the per-cell validity flags always reflect the
//! live state of the whole board, including when deciding completion.
//!
//! Presentation concerns (rendering, selection, timers, theming) are the
//! caller's; this crate only exposes the state they draw from.
//!
//! # Examples
//!
//! ```
//! use hexadoku_core::{Difficulty, Position};
//! use hexadoku_game::Board;
//! use hexadoku_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
//! let mut board = Board::new(puzzle.clone());
//!
//! // Fill every blank from the solution and the puzzle completes.
//! for pos in Position::ALL {
//!     if !board.cell(pos).is_fixed() {
//!         board.set_value(pos, puzzle.solution.get(pos)).unwrap();
//!     }
//! }
//! assert!(board.is_complete());
//! ```

pub mod board;
pub mod error;

pub use self::{
    board::{Board, Cell},
    error::GameError,
};
