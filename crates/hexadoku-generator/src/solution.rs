//! Solved-grid generation via randomized backtracking.

use hexadoku_core::{Position, Symbol, ValueGrid};
use rand::{Rng, seq::SliceRandom as _};

/// Generator producing complete, constraint-satisfying 16×16 grids.
///
/// The search is a depth-first backtracking fill over the cells in row-major
/// order, trying the sixteen candidates of each empty cell in a uniformly
/// shuffled order. Row, column, and box pruning keeps the search shallow in
/// practice; the shuffle is what makes successive runs produce different
/// grids.
///
/// # Examples
///
/// ```
/// use hexadoku_generator::SolutionGenerator;
/// use rand_pcg::Pcg64Mcg;
///
/// let mut rng = Pcg64Mcg::new(42);
/// let grid = SolutionGenerator::generate(&mut rng);
/// assert!(grid.is_solved());
/// ```
#[derive(Debug)]
pub struct SolutionGenerator;

impl SolutionGenerator {
    /// Generates a fully solved grid using the given random source.
    ///
    /// Always succeeds: the empty 16×16 boxed Latin square is satisfiable
    /// and the search is exhaustive. The same random source state always
    /// yields the same grid.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> ValueGrid {
        let mut grid = ValueGrid::new();
        let solved = Self::fill_from(&mut grid, 0, rng);
        debug_assert!(solved, "exhaustive search over a satisfiable instance");
        grid
    }

    /// Fills the grid from cell `index` onward, backtracking on dead ends.
    ///
    /// Returns `true` when every cell from `index` to the end is filled
    /// legally. On failure the grid is left exactly as it was on entry.
    /// Recursion depth is bounded by the 256 cells.
    fn fill_from<R: Rng + ?Sized>(grid: &mut ValueGrid, index: usize, rng: &mut R) -> bool {
        let Some(&pos) = Position::ALL.get(index) else {
            return true;
        };

        // Already-filled cells are skipped so the fill composes with
        // pre-seeded grids, although generation always starts empty.
        if grid.get(pos).is_some() {
            return Self::fill_from(grid, index + 1, rng);
        }

        let mut candidates = Symbol::ALL;
        candidates.shuffle(rng);
        for symbol in candidates {
            if grid.is_placement_legal(pos, symbol) {
                grid.set(pos, Some(symbol));
                if Self::fill_from(grid, index + 1, rng) {
                    return true;
                }
                grid.set(pos, None);
            }
        }
        false
    }
}
