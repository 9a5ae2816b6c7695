//! Board position types for the 16×16 grid.

use std::fmt::{self, Display};

/// Number of cells along one side of the board.
pub const BOARD_SIZE: u8 = 16;

/// Number of cells along one side of a sub-box.
pub const BOX_SIZE: u8 = 4;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A cell position on the 16×16 board.
///
/// Positions are `(x, y)` coordinates where `x` is the column (0-15, left to
/// right) and `y` is the row (0-15, top to bottom). Both coordinates are
/// validated at construction time, so a `Position` always refers to a real
/// cell.
///
/// # Examples
///
/// ```
/// use hexadoku_core::Position;
///
/// let pos = Position::new(3, 7);
/// assert_eq!(pos.x(), 3);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 4); // box row 1, box column 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 256 positions in row-major order.
    pub const ALL: [Self; CELL_COUNT] = {
        let mut all = [Self { x: 0, y: 0 }; CELL_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < CELL_COUNT {
            all[i] = Self {
                x: (i % BOARD_SIZE as usize) as u8,
                y: (i / BOARD_SIZE as usize) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-15.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        Self { x, y }
    }

    /// Returns the column coordinate (0-15).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-15).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-255).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    /// Returns the index of the 4×4 box containing this position (0-15,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / BOX_SIZE) * BOX_SIZE + self.x / BOX_SIZE
    }

    /// Returns the top-left position of the 4×4 box containing this position.
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            x: self.x / BOX_SIZE * BOX_SIZE,
            y: self.y / BOX_SIZE * BOX_SIZE,
        }
    }

    /// Returns an iterator over the peers of this position: the other cells
    /// of its row, its column, and its 4×4 box.
    ///
    /// Each of the 39 peers (15 row + 15 column + 9 remaining box cells) is
    /// yielded exactly once; the position itself is excluded.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexadoku_core::Position;
    ///
    /// let pos = Position::new(0, 0);
    /// assert_eq!(pos.house_peers().count(), 39);
    /// assert!(pos.house_peers().all(|peer| peer != pos));
    /// ```
    #[must_use]
    pub fn house_peers(self) -> impl Iterator<Item = Self> {
        let row = (0..BOARD_SIZE)
            .filter(move |&x| x != self.x)
            .map(move |x| Self { x, y: self.y });
        let column = (0..BOARD_SIZE)
            .filter(move |&y| y != self.y)
            .map(move |y| Self { x: self.x, y });
        let origin = self.box_origin();
        // Box cells sharing this row or column are already covered above.
        let boxed = (origin.y..origin.y + BOX_SIZE).flat_map(move |y| {
            (origin.x..origin.x + BOX_SIZE)
                .filter(move |&x| x != self.x && y != self.y)
                .map(move |x| Self { x, y })
        });
        row.chain(column).chain(boxed)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
