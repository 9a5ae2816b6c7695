//! Cell removal turning a solved grid into a playable problem.

use derive_more::{Display, Error};
use hexadoku_core::{BOARD_SIZE, CELL_COUNT, Difficulty, Position, ValueGrid};
use rand::Rng;

/// Removes cells from a solved grid to produce a puzzle problem.
///
/// The carver blanks a fixed number of uniformly chosen distinct cells; the
/// count comes from the [`Difficulty`] table or an explicit override. Carved
/// problems are not guaranteed to have a unique solution.
///
/// # Examples
///
/// ```
/// use hexadoku_core::Difficulty;
/// use hexadoku_generator::{Carver, SolutionGenerator};
/// use rand_pcg::Pcg64Mcg;
///
/// let mut rng = Pcg64Mcg::new(5);
/// let solution = SolutionGenerator::generate(&mut rng);
/// let problem = Carver::new(Difficulty::Easy).carve(&solution, &mut rng);
/// assert_eq!(problem.filled_count(), 256 - 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carver {
    cells_to_remove: usize,
}

/// Error constructing a [`Carver`] with an unusable removal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CarveConfigError {
    /// The removal count is at least the total cell count, so the removal
    /// loop could never terminate.
    #[display("removal count {count} must be less than {CELL_COUNT}")]
    RemovalCountTooLarge {
        /// The rejected count.
        count: usize,
    },
}

impl Carver {
    /// Creates a carver removing the cell count fixed for `difficulty`.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        // The difficulty table only holds counts below CELL_COUNT.
        Self {
            cells_to_remove: difficulty.cells_to_remove(),
        }
    }

    /// Creates a carver removing an explicit number of cells.
    ///
    /// # Errors
    ///
    /// Returns [`CarveConfigError::RemovalCountTooLarge`] if `count` is not
    /// less than the total cell count.
    pub const fn with_removal_count(count: usize) -> Result<Self, CarveConfigError> {
        if count >= CELL_COUNT {
            return Err(CarveConfigError::RemovalCountTooLarge { count });
        }
        Ok(Self {
            cells_to_remove: count,
        })
    }

    /// Returns the number of cells this carver blanks.
    #[must_use]
    pub const fn cells_to_remove(&self) -> usize {
        self.cells_to_remove
    }

    /// Blanks cells of a copy of `solution` and returns the problem grid.
    ///
    /// Cells are picked uniformly at random; a pick that is already blank is
    /// re-sampled rather than counted, so exactly
    /// [`cells_to_remove`](Self::cells_to_remove) distinct cells end up
    /// empty. Every remaining filled cell equals the corresponding solution
    /// cell.
    pub fn carve<R: Rng + ?Sized>(&self, solution: &ValueGrid, rng: &mut R) -> ValueGrid {
        let mut problem = solution.clone();
        let mut removed = 0;
        while removed < self.cells_to_remove {
            let x = rng.random_range(0..BOARD_SIZE);
            let y = rng.random_range(0..BOARD_SIZE);
            let pos = Position::new(x, y);
            if problem.get(pos).is_some() {
                problem.set(pos, None);
                removed += 1;
            }
        }
        problem
    }
}
