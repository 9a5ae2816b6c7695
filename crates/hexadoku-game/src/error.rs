//! Game-state errors.

use derive_more::{Display, Error};
use hexadoku_core::Position;

/// Error mutating or constructing a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is part of the carved puzzle and immutable to the
    /// player.
    #[display("cannot modify a fixed cell")]
    CannotModifyFixedCell,
    /// A problem cell holds a symbol that differs from the solution grid it
    /// was supposedly carved from.
    #[display("problem cell {pos} does not match the solution")]
    ProblemSolutionMismatch {
        /// Position of the mismatching cell.
        pos: Position,
    },
    /// The supplied solution grid is not a complete, constraint-satisfying
    /// solution.
    #[display("solution grid is not a valid solution")]
    InvalidSolution,
}
