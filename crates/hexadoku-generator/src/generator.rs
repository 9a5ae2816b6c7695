//! The public puzzle-generation entry point.

use hexadoku_core::{Difficulty, ValueGrid};

use crate::{Carver, PuzzleSeed, SolutionGenerator};

/// A generated puzzle: the carved problem, its solution, and the seed that
/// produced both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The carved problem grid; empty cells are the player's to fill.
    pub problem: ValueGrid,
    /// The complete solution the problem was carved from.
    pub solution: ValueGrid,
    /// The seed reproducing this exact puzzle.
    pub seed: PuzzleSeed,
}

/// Generates playable hexadoku puzzles.
///
/// Each generation run derives two independent random streams from one
/// [`PuzzleSeed`]: one drives the backtracking fill of the solved grid, the
/// other drives cell removal. Because the streams are seed-derived, the whole
/// puzzle is reproducible from the seed alone, and separate sessions using
/// separate seeds are uncorrelated.
///
/// # Examples
///
/// ```
/// use hexadoku_core::Difficulty;
/// use hexadoku_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate();
///
/// assert!(puzzle.solution.is_solved());
/// assert_eq!(puzzle.problem.filled_count(), 256 - 80);
///
/// // The seed reproduces the puzzle exactly.
/// let again = generator.generate_with_seed(puzzle.seed);
/// assert_eq!(again, puzzle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty this generator carves at.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a freshly drawn random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed and difficulty always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut solve_rng = seed.stream("solution");
        let solution = SolutionGenerator::generate(&mut solve_rng);

        let mut carve_rng = seed.stream("carve");
        let problem = Carver::new(self.difficulty).carve(&solution, &mut carve_rng);

        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}
