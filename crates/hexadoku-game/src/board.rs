//! Live board state for one puzzle session.

use hexadoku_core::{CELL_COUNT, Position, Symbol, ValueGrid};
use hexadoku_generator::GeneratedPuzzle;

use crate::GameError;

/// One cell of a live [`Board`].
///
/// A cell is either fixed (pre-filled by the carver, immutable to the player)
/// or editable. `is_valid` caches whether the cell's current value conflicts
/// with any peer; the board keeps that cache fresh by revalidating a cell and
/// all its peers whenever any of them changes. Empty cells are always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    value: Option<Symbol>,
    is_fixed: bool,
    is_valid: bool,
    is_hint: bool,
    is_superscript: bool,
}

impl Cell {
    const fn fixed(symbol: Symbol) -> Self {
        Self {
            value: Some(symbol),
            is_fixed: true,
            is_valid: true,
            is_hint: false,
            is_superscript: false,
        }
    }

    const fn empty() -> Self {
        Self {
            value: None,
            is_fixed: false,
            is_valid: true,
            is_hint: false,
            is_superscript: false,
        }
    }

    /// Returns the symbol in this cell, or `None` if it is blank.
    #[must_use]
    pub const fn value(&self) -> Option<Symbol> {
        self.value
    }

    /// Returns whether this cell was pre-filled by the carver.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.is_fixed
    }

    /// Returns whether this cell's value conflicts with no peer.
    ///
    /// Blank cells report `true`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns whether this cell was filled in by a hint reveal.
    #[must_use]
    pub const fn is_hint(&self) -> bool {
        self.is_hint
    }

    /// Returns whether the cell renders its value as a superscript
    /// (a pencil-mark style annotation chosen by the player).
    #[must_use]
    pub const fn is_superscript(&self) -> bool {
        self.is_superscript
    }
}

/// The live 16×16 board for one puzzle session.
///
/// A board is created from a [`GeneratedPuzzle`]: every problem cell becomes
/// a fixed [`Cell`], every blank becomes an editable one. Player edits go
/// through [`set_value`](Self::set_value)/[`clear_cell`](Self::clear_cell),
/// which enforce fixed-cell immutability and keep every cell's cached
/// validity in sync with the whole board.
///
/// # Examples
///
/// ```
/// use hexadoku_core::Difficulty;
/// use hexadoku_game::Board;
/// use hexadoku_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
/// let board = Board::new(puzzle);
///
/// assert!(!board.is_complete()); // 80 cells are blank
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    solution: ValueGrid,
}

impl Board {
    /// Creates a board from a generated puzzle.
    ///
    /// Filled problem cells become fixed; blanks become editable. Every cell
    /// starts valid (the carver only ever blanks cells of a valid solution).
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        let mut cells = [const { Cell::empty() }; CELL_COUNT];
        for pos in Position::ALL {
            if let Some(symbol) = problem.get(pos) {
                cells[pos.index()] = Cell::fixed(symbol);
            }
        }
        Self { cells, solution }
    }

    /// Creates a board from untrusted problem and solution grids.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSolution`] if `solution` is not a
    /// complete, constraint-satisfying grid, and
    /// [`GameError::ProblemSolutionMismatch`] if a filled problem cell
    /// differs from the solution.
    pub fn from_grids(problem: &ValueGrid, solution: &ValueGrid) -> Result<Self, GameError> {
        if !solution.is_solved() {
            return Err(GameError::InvalidSolution);
        }
        let mut cells = [const { Cell::empty() }; CELL_COUNT];
        for pos in Position::ALL {
            if let Some(symbol) = problem.get(pos) {
                if solution.get(pos) != Some(symbol) {
                    return Err(GameError::ProblemSolutionMismatch { pos });
                }
                cells[pos.index()] = Cell::fixed(symbol);
            }
        }
        Ok(Self {
            cells,
            solution: solution.clone(),
        })
    }

    /// Returns the cell at the given position.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }

    /// Returns the stored solution grid for this puzzle.
    #[must_use]
    pub const fn solution(&self) -> &ValueGrid {
        &self.solution
    }

    /// Returns whether placing `symbol` at `pos` would conflict with no peer
    /// currently on the board.
    ///
    /// Both fixed and player-entered values count as peers; the cell at
    /// `pos` itself is excluded, so the check also answers whether an
    /// already-placed value is in conflict.
    #[must_use]
    pub fn is_move_valid(&self, pos: Position, symbol: Symbol) -> bool {
        pos.house_peers()
            .all(|peer| self.cell(peer).value() != Some(symbol))
    }

    /// Sets or clears the value of an editable cell.
    ///
    /// The edited cell and all 39 of its peers are revalidated afterwards,
    /// so no cell's cached validity can go stale through this edit. Setting
    /// a value clears any hint mark on the cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyFixedCell`] if the cell is fixed.
    pub fn set_value(&mut self, pos: Position, value: Option<Symbol>) -> Result<(), GameError> {
        if self.cell(pos).is_fixed {
            return Err(GameError::CannotModifyFixedCell);
        }
        let cell = &mut self.cells[pos.index()];
        cell.value = value;
        cell.is_hint = false;
        if value.is_none() {
            cell.is_superscript = false;
        }
        self.revalidate_around(pos);
        Ok(())
    }

    /// Clears the value of an editable cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyFixedCell`] if the cell is fixed.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        self.set_value(pos, None)
    }

    /// Toggles the superscript annotation of an editable, filled cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyFixedCell`] if the cell is fixed.
    pub fn set_superscript(&mut self, pos: Position, superscript: bool) -> Result<(), GameError> {
        if self.cell(pos).is_fixed {
            return Err(GameError::CannotModifyFixedCell);
        }
        self.cells[pos.index()].is_superscript = superscript;
        Ok(())
    }

    /// Fills an editable cell with its solution value and marks it as a
    /// hint.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyFixedCell`] if the cell is fixed.
    pub fn reveal_hint(&mut self, pos: Position) -> Result<Symbol, GameError> {
        if self.cell(pos).is_fixed {
            return Err(GameError::CannotModifyFixedCell);
        }
        let symbol = self
            .solution
            .get(pos)
            .ok_or(GameError::InvalidSolution)?;
        let cell = &mut self.cells[pos.index()];
        cell.value = Some(symbol);
        cell.is_hint = true;
        cell.is_superscript = false;
        self.revalidate_around(pos);
        Ok(symbol)
    }

    /// Returns whether the puzzle is complete: every cell filled and no
    /// cell in conflict.
    ///
    /// Because every edit revalidates the edited cell and its peers, the
    /// cached flags this reads always agree with a fresh full-board
    /// validation pass.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.value.is_some() && cell.is_valid)
    }

    /// Recomputes the cached validity of every cell from scratch.
    pub fn revalidate_all(&mut self) {
        for pos in Position::ALL {
            self.revalidate(pos);
        }
    }

    /// Recomputes the cached validity of `pos` and all of its peers.
    fn revalidate_around(&mut self, pos: Position) {
        self.revalidate(pos);
        for peer in pos.house_peers() {
            self.revalidate(peer);
        }
    }

    fn revalidate(&mut self, pos: Position) {
        let is_valid = match self.cell(pos).value {
            Some(symbol) => self.is_move_valid(pos, symbol),
            None => true,
        };
        self.cells[pos.index()].is_valid = is_valid;
    }
}

#[cfg(test)]
mod tests {
    use hexadoku_core::Difficulty;
    use hexadoku_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    const SEED_HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    fn test_board(difficulty: Difficulty) -> Board {
        let seed: PuzzleSeed = SEED_HEX.parse().unwrap();
        Board::new(PuzzleGenerator::new(difficulty).generate_with_seed(seed))
    }

    fn first_empty(board: &Board) -> Position {
        Position::ALL
            .into_iter()
            .find(|&pos| board.cell(pos).value().is_none())
            .expect("carved board has empty cells")
    }

    #[test]
    fn test_new_board_preserves_puzzle_structure() {
        let seed: PuzzleSeed = SEED_HEX.parse().unwrap();
        let puzzle = PuzzleGenerator::new(Difficulty::Medium).generate_with_seed(seed);
        let board = Board::new(puzzle.clone());

        for pos in Position::ALL {
            let cell = board.cell(pos);
            match puzzle.problem.get(pos) {
                Some(symbol) => {
                    assert_eq!(cell.value(), Some(symbol));
                    assert!(cell.is_fixed());
                }
                None => {
                    assert_eq!(cell.value(), None);
                    assert!(!cell.is_fixed());
                }
            }
            assert!(cell.is_valid());
        }
    }

    #[test]
    fn test_from_grids_validates_input() {
        let seed: PuzzleSeed = SEED_HEX.parse().unwrap();
        let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate_with_seed(seed);

        let board = Board::from_grids(&puzzle.problem, &puzzle.solution).unwrap();
        assert_eq!(board.solution(), &puzzle.solution);

        // Incomplete "solution" is rejected.
        assert_eq!(
            Board::from_grids(&puzzle.problem, &puzzle.problem),
            Err(GameError::InvalidSolution)
        );

        // A problem cell disagreeing with the solution is rejected.
        let pos = first_empty(&board);
        let wrong = puzzle
            .solution
            .get(pos)
            .map(|s| if s == Symbol::S1 { Symbol::S2 } else { Symbol::S1 });
        let mut tampered = puzzle.problem.clone();
        tampered.set(pos, wrong);
        assert_eq!(
            Board::from_grids(&tampered, &puzzle.solution),
            Err(GameError::ProblemSolutionMismatch { pos })
        );
    }

    #[test]
    fn test_cannot_modify_fixed_cells() {
        let mut board = test_board(Difficulty::Easy);
        let fixed_pos = Position::ALL
            .into_iter()
            .find(|&pos| board.cell(pos).is_fixed())
            .expect("carved board has fixed cells");

        assert_eq!(
            board.set_value(fixed_pos, Some(Symbol::S1)),
            Err(GameError::CannotModifyFixedCell)
        );
        assert_eq!(
            board.clear_cell(fixed_pos),
            Err(GameError::CannotModifyFixedCell)
        );
        assert_eq!(
            board.set_superscript(fixed_pos, true),
            Err(GameError::CannotModifyFixedCell)
        );
        assert_eq!(
            board.reveal_hint(fixed_pos),
            Err(GameError::CannotModifyFixedCell)
        );
    }

    #[test]
    fn test_set_and_clear_cell() {
        let mut board = test_board(Difficulty::Easy);
        let pos = first_empty(&board);

        board.set_value(pos, Some(Symbol::S5)).unwrap();
        assert_eq!(board.cell(pos).value(), Some(Symbol::S5));

        // Replacing is allowed
        board.set_value(pos, Some(Symbol::S7)).unwrap();
        assert_eq!(board.cell(pos).value(), Some(Symbol::S7));

        board.clear_cell(pos).unwrap();
        assert_eq!(board.cell(pos).value(), None);
        assert!(board.cell(pos).is_valid());
    }

    #[test]
    fn test_move_validity_matches_peer_contents() {
        let mut board = test_board(Difficulty::Medium);
        let pos = first_empty(&board);

        for symbol in Symbol::ALL {
            let conflicting = pos
                .house_peers()
                .any(|peer| board.cell(peer).value() == Some(symbol));
            assert_eq!(board.is_move_valid(pos, symbol), !conflicting);
        }

        // A placed value is excluded from its own check.
        let legal = Symbol::ALL
            .into_iter()
            .find(|&s| board.is_move_valid(pos, s))
            .expect("some symbol is legal");
        board.set_value(pos, Some(legal)).unwrap();
        assert!(board.is_move_valid(pos, legal));
    }

    #[test]
    fn test_conflicting_entry_marks_both_cells() {
        let mut board = test_board(Difficulty::Hard);
        let pos = first_empty(&board);

        let (peer, symbol) = pos
            .house_peers()
            .find_map(|peer| board.cell(peer).value().map(|s| (peer, s)))
            .expect("empty cell has a filled peer");

        board.set_value(pos, Some(symbol)).unwrap();
        assert!(!board.cell(pos).is_valid());
        // The peer holding the duplicate goes invalid too, even when fixed.
        assert!(!board.cell(peer).is_valid());

        // Clearing the duplicate restores the peer's validity.
        board.clear_cell(pos).unwrap();
        assert!(board.cell(pos).is_valid());
        assert!(board.cell(peer).is_valid());
    }

    #[test]
    fn test_peer_revalidation_prevents_stale_cache() {
        let mut board = test_board(Difficulty::Hard);

        // Two empty cells in the same row.
        let a = first_empty(&board);
        let b = a
            .house_peers()
            .find(|&peer| peer.y() == a.y() && board.cell(peer).value().is_none())
            .expect("row has two empty cells");

        let symbol = Symbol::ALL
            .into_iter()
            .find(|&s| board.is_move_valid(a, s) && board.is_move_valid(b, s))
            .expect("some symbol fits both cells");

        board.set_value(a, Some(symbol)).unwrap();
        assert!(board.cell(a).is_valid());

        // B's edit must refresh A's cached validity, not just B's own.
        board.set_value(b, Some(symbol)).unwrap();
        assert!(!board.cell(a).is_valid());
        assert!(!board.cell(b).is_valid());

        // The cache agrees with a full recomputation.
        let mut fresh = board.clone();
        fresh.revalidate_all();
        assert_eq!(fresh, board);
    }

    #[test]
    fn test_superscript_toggle() {
        let mut board = test_board(Difficulty::Easy);
        let pos = first_empty(&board);

        board.set_value(pos, Some(Symbol::S3)).unwrap();
        board.set_superscript(pos, true).unwrap();
        assert!(board.cell(pos).is_superscript());

        // Clearing the cell drops the annotation.
        board.clear_cell(pos).unwrap();
        assert!(!board.cell(pos).is_superscript());
    }

    #[test]
    fn test_reveal_hint_fills_solution_value() {
        let mut board = test_board(Difficulty::Medium);
        let pos = first_empty(&board);
        let expected = board.solution().get(pos).unwrap();

        let revealed = board.reveal_hint(pos).unwrap();
        assert_eq!(revealed, expected);
        let cell = board.cell(pos);
        assert_eq!(cell.value(), Some(expected));
        assert!(cell.is_hint());
        assert!(cell.is_valid());

        // Overwriting by hand clears the hint mark.
        board.set_value(pos, Some(expected)).unwrap();
        assert!(!board.cell(pos).is_hint());
    }

    #[test]
    fn test_completion_requires_full_and_valid_board() {
        let mut board = test_board(Difficulty::Easy);
        assert!(!board.is_complete());

        for pos in Position::ALL {
            if board.cell(pos).value().is_none() {
                let symbol = board.solution().get(pos).unwrap();
                board.set_value(pos, Some(symbol)).unwrap();
            }
        }
        assert!(board.is_complete());

        // Introducing a single duplicate breaks completion.
        let editable = Position::ALL
            .into_iter()
            .find(|&pos| !board.cell(pos).is_fixed())
            .expect("board has editable cells");
        let duplicate = editable
            .house_peers()
            .find_map(|peer| board.cell(peer).value())
            .expect("peer holds a value");
        board.set_value(editable, Some(duplicate)).unwrap();
        assert!(!board.is_complete());
    }

    /// Full session walk-through: generate, carve, misplay, recover, finish.
    #[test]
    fn test_end_to_end_session() {
        let seed: PuzzleSeed = SEED_HEX.parse().unwrap();
        let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate_with_seed(seed);
        assert!(puzzle.solution.is_solved());

        let mut board = Board::new(puzzle.clone());
        let fixed_count = Position::ALL
            .iter()
            .filter(|&&pos| board.cell(pos).is_fixed())
            .count();
        assert_eq!(fixed_count, 256 - 80);
        for pos in Position::ALL {
            if board.cell(pos).is_fixed() {
                assert_eq!(board.cell(pos).value(), puzzle.solution.get(pos));
            }
        }

        // Enter a value that already appears in the chosen cell's row.
        let (pos, duplicate) = Position::ALL
            .into_iter()
            .filter(|&pos| board.cell(pos).value().is_none())
            .find_map(|pos| {
                pos.house_peers()
                    .filter(|peer| peer.y() == pos.y())
                    .find_map(|peer| board.cell(peer).value())
                    .map(|symbol| (pos, symbol))
            })
            .expect("some empty cell has a filled row peer");

        assert!(!board.is_move_valid(pos, duplicate));
        board.set_value(pos, Some(duplicate)).unwrap();
        assert!(!board.cell(pos).is_valid());
        assert!(!board.is_complete());

        // Recover and fill the rest from the solution.
        for pos in Position::ALL {
            if !board.cell(pos).is_fixed() {
                board
                    .set_value(pos, puzzle.solution.get(pos))
                    .unwrap();
            }
        }
        assert!(board.is_complete());
    }
}
