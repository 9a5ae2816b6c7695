//! Core data structures for the hexadoku engine.
//!
//! This crate provides the fundamental types for representing and validating
//! 16×16 generalized Sudoku (hexadoku) boards: 4×4 sub-boxes, sixteen
//! distinct symbols per row, column, and box. These structures are shared by
//! the generation and game-state crates.
//!
//! # Overview
//!
//! - [`symbol`]: Type-safe representation of the sixteen symbols
//! - [`position`]: Board coordinates, box geometry, and peer enumeration
//! - [`candidates`]: A 16-bit symbol set for candidate tracking
//! - [`grid`]: The [`ValueGrid`] working grid and its placement-legality
//!   check (row, column, and box uniqueness)
//! - [`difficulty`]: The fixed difficulty-to-removal-count table
//! - [`theme`]: Presentation-only symbol-to-glyph bijections
//!
//! # Examples
//!
//! ```
//! use hexadoku_core::{Position, Symbol, ValueGrid};
//!
//! let mut grid = ValueGrid::new();
//! grid.set(Position::new(4, 4), Some(Symbol::S5));
//!
//! // 5 conflicts along the row, column, and 4×4 box
//! assert!(!grid.is_placement_legal(Position::new(0, 4), Symbol::S5));
//! assert!(!grid.is_placement_legal(Position::new(4, 0), Symbol::S5));
//! assert!(!grid.is_placement_legal(Position::new(7, 7), Symbol::S5));
//! assert!(grid.is_placement_legal(Position::new(0, 0), Symbol::S5));
//! ```

pub mod candidates;
pub mod difficulty;
pub mod grid;
pub mod position;
pub mod symbol;
pub mod theme;

// Re-export commonly used types
pub use self::{
    candidates::Candidates,
    difficulty::Difficulty,
    grid::{ParseGridError, ValueGrid},
    position::{BOARD_SIZE, BOX_SIZE, CELL_COUNT, Position},
    symbol::Symbol,
    theme::SymbolTheme,
};
