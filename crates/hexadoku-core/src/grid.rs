//! The 16×16 value grid and its placement rules.

use std::{fmt, ops::Index, str::FromStr};

use derive_more::{Display, Error};

use crate::{
    Symbol,
    position::{CELL_COUNT, Position},
};

/// A 16×16 grid of optional symbols.
///
/// `None` means an empty cell. This is the working representation shared by
/// the solution generator (which fills it), the carver (which blanks cells of
/// a copy), and the game layer (which reads problem and solution grids).
///
/// The grid has a single-line text form of 256 characters in row-major order,
/// using `1`-`9`/`A`-`G` for symbols and `.` for empty cells.
///
/// # Examples
///
/// ```
/// use hexadoku_core::{Position, Symbol, ValueGrid};
///
/// let mut grid = ValueGrid::new();
/// grid.set(Position::new(0, 0), Some(Symbol::S7));
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Symbol::S7));
/// assert!(!grid.is_placement_legal(Position::new(5, 0), Symbol::S7));
/// assert!(grid.is_placement_legal(Position::new(5, 5), Symbol::S7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueGrid {
    cells: [Option<Symbol>; CELL_COUNT],
}

impl Default for ValueGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Returns the symbol at a position, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Symbol> {
        self.cells[pos.index()]
    }

    /// Sets or clears the symbol at a position.
    pub const fn set(&mut self, pos: Position, symbol: Option<Symbol>) {
        self.cells[pos.index()] = symbol;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns whether every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns whether placing `symbol` at `pos` would violate no row,
    /// column, or box constraint.
    ///
    /// The cell at `pos` itself is excluded from the scan, so the check can
    /// be applied to an already-filled cell to ask whether its current value
    /// conflicts with a peer. The scan reads at most the 16 cells of each of
    /// the three houses, independent of grid contents.
    #[must_use]
    pub fn is_placement_legal(&self, pos: Position, symbol: Symbol) -> bool {
        pos.house_peers().all(|peer| self.get(peer) != Some(symbol))
    }

    /// Returns whether the grid is a complete, constraint-satisfying
    /// solution: every cell filled and no duplicate symbol within any row,
    /// column, or box.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Position::ALL.iter().all(|&pos| {
            self.get(pos)
                .is_some_and(|symbol| self.is_placement_legal(pos, symbol))
        })
    }
}

impl Index<Position> for ValueGrid {
    type Output = Option<Symbol>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl fmt::Display for ValueGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(symbol) => write!(f, "{symbol}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Error parsing a [`ValueGrid`] from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The string is not exactly 256 characters long.
    #[display("invalid grid string length {len}, expected {CELL_COUNT}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The string contains a character that is neither a symbol nor `.`.
    #[display("invalid grid character {c:?}")]
    InvalidCharacter {
        /// The offending character.
        c: char,
    },
}

impl FromStr for ValueGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != CELL_COUNT {
            return Err(ParseGridError::InvalidLength { len });
        }
        let mut grid = Self::new();
        for (pos, c) in Position::ALL.into_iter().zip(s.chars()) {
            match c {
                '.' => {}
                _ => {
                    let symbol =
                        Symbol::from_char(c).ok_or(ParseGridError::InvalidCharacter { c })?;
                    grid.set(pos, Some(symbol));
                }
            }
        }
        Ok(grid)
    }
}
