//! Puzzle difficulty levels.

use std::fmt::{self, Display};

/// Difficulty of a carved puzzle.
///
/// Each level maps to a fixed number of cells blanked out of the 256-cell
/// solution. The mapping is an explicit table rather than numbers embedded in
/// the carving routine.
///
/// # Examples
///
/// ```
/// use hexadoku_core::Difficulty;
///
/// assert_eq!(Difficulty::Easy.cells_to_remove(), 80);
/// assert_eq!(Difficulty::Medium.cells_to_remove(), 120);
/// assert_eq!(Difficulty::Hard.cells_to_remove(), 160);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// 80 of 256 cells blanked (31%).
    Easy,
    /// 120 of 256 cells blanked (47%).
    #[default]
    Medium,
    /// 160 of 256 cells blanked (63%).
    Hard,
}

impl Difficulty {
    /// Array containing all difficulty levels in ascending order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of cells removed from a solved grid at this level.
    #[must_use]
    pub const fn cells_to_remove(self) -> usize {
        match self {
            Self::Easy => 80,
            Self::Medium => 120,
            Self::Hard => 160,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}
