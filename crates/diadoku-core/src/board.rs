//! Mutable candidate-set board state.

use std::fmt::{self, Display};

use crate::{
    cell::Cell, cell_set::CellSet, digit::Digit, digit_set::DigitSet, error::ParseError,
    topology::Topology,
};

/// The blank marker accepted by [`Board::parse`] and emitted by
/// [`Board::to_line`].
pub const BLANK: char = '.';

/// The full board state: one candidate [`DigitSet`] per cell.
///
/// A `Board` is the unit of value passed through propagation and branched
/// over during search. Each search branch owns an independent clone; no
/// board is ever shared mutably across branches.
///
/// # Examples
///
/// ```
/// use diadoku_core::{Board, Cell, Digit};
///
/// let line = format!("4{}7", ".".repeat(79));
/// let board = Board::parse(&line)?;
/// assert_eq!(board.solved_digit(Cell::from_coords(0, 0)), Some(Digit::D4));
/// assert_eq!(board.solved_digit(Cell::from_coords(8, 8)), Some(Digit::D7));
/// assert_eq!(board.candidates(Cell::from_coords(0, 1)).len(), 9);
/// # Ok::<(), diadoku_core::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board where every cell still admits every digit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Parses an 81-character grid string in row-major order (`A1`..`A9`,
    /// `B1`.., `I9`).
    ///
    /// A digit character yields a singleton candidate set; the blank marker
    /// `.` yields the full set.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::BadLength`] if the input is not exactly 81
    /// characters, or [`ParseError::BadCharacter`] if it contains anything
    /// other than `1`-`9` and `.`.
    pub fn parse(grid: &str) -> Result<Self, ParseError> {
        let len = grid.chars().count();
        if len != 81 {
            return Err(ParseError::BadLength { len });
        }

        let mut board = Self::new();
        for (index, ch) in grid.chars().enumerate() {
            if ch == BLANK {
                continue;
            }
            let digit =
                Digit::from_char(ch).ok_or(ParseError::BadCharacter { index, found: ch })?;
            #[expect(clippy::cast_possible_truncation)]
            let cell = Cell::from_index(index as u8);
            board.cells[cell.index()] = DigitSet::from_elem(digit);
        }
        Ok(board)
    }

    /// Returns the candidate set of `cell`.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Replaces the candidate set of `cell`.
    pub fn set_candidates(&mut self, cell: Cell, candidates: DigitSet) {
        self.cells[cell.index()] = candidates;
    }

    /// Returns the digit of `cell` if its candidate set is a singleton.
    #[must_use]
    pub fn solved_digit(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index()].as_single()
    }

    /// Returns the set of cells whose candidate set is a singleton.
    #[must_use]
    pub fn solved_cells(&self) -> CellSet {
        Cell::ALL
            .into_iter()
            .filter(|cell| self.cells[cell.index()].len() == 1)
            .collect()
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns `true` if all 81 cells are solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_count() == 81
    }

    /// Returns `true` if some cell has run out of candidates.
    ///
    /// An empty candidate set can never appear on a valid search path; it
    /// marks the current branch as unsatisfiable.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(DigitSet::is_empty)
    }

    /// Returns `true` if the board is fully solved and every unit of
    /// `topology` contains each digit 1-9 exactly once.
    #[must_use]
    pub fn is_valid_solution(&self, topology: &Topology) -> bool {
        if !self.is_solved() {
            return false;
        }
        topology.units().iter().all(|unit| {
            let digits = unit
                .cells()
                .iter()
                .map(|&cell| self.cells[cell.index()])
                .fold(DigitSet::EMPTY, |acc, set| acc | set);
            digits == DigitSet::FULL
        })
    }

    /// Renders the board as a single 81-character line, with `.` for every
    /// unsolved cell.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|set| set.as_single().map_or(BLANK, Digit::to_char))
            .collect()
    }
}

impl Display for Board {
    /// Renders the board as a 2-D grid.
    ///
    /// Each cell shows its remaining candidates centered in a fixed-width
    /// column, with `|` separators after the 3rd and 6th columns and a
    /// `-`/`+` separator line after the 3rd and 6th rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + self.cells.iter().map(DigitSet::len).max().unwrap_or(1);
        let separator = vec!["-".repeat(width * 3); 3].join("+");
        for row in 0..9 {
            for col in 0..9 {
                let candidates = self.candidates(Cell::from_coords(row, col)).to_string();
                write!(f, "{candidates:^width$}")?;
                if col == 2 || col == 5 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "{separator}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

    fn line_with_given(index: usize, digit: char) -> String {
        let mut line = vec![BLANK; 81];
        line[index] = digit;
        line.into_iter().collect()
    }

    #[test]
    fn test_parse_blank_and_given() {
        let board = Board::parse(&line_with_given(0, '2')).unwrap();
        assert_eq!(
            board.candidates(Cell::from_index(0)),
            DigitSet::from_elem(Digit::D2)
        );
        assert_eq!(board.candidates(Cell::from_index(1)), DigitSet::FULL);
        assert_eq!(board.solved_count(), 1);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let err = Board::parse(&".".repeat(80)).unwrap_err();
        assert_eq!(err, ParseError::BadLength { len: 80 });
    }

    #[test]
    fn test_parse_rejects_long_input() {
        let err = Board::parse(&".".repeat(82)).unwrap_err();
        assert_eq!(err, ParseError::BadLength { len: 82 });
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let err = Board::parse(&line_with_given(40, 'x')).unwrap_err();
        assert_eq!(
            err,
            ParseError::BadCharacter {
                index: 40,
                found: 'x'
            }
        );
    }

    #[test]
    fn test_line_round_trip() {
        let line = line_with_given(17, '9');
        let board = Board::parse(&line).unwrap();
        assert_eq!(board.to_line(), line);

        let board = Board::parse(SOLVED).unwrap();
        assert_eq!(board.to_line(), SOLVED);
    }

    #[test]
    fn test_solved_queries() {
        let board = Board::parse(SOLVED).unwrap();
        assert!(board.is_solved());
        assert_eq!(board.solved_count(), 81);
        assert_eq!(board.solved_cells().len(), 81);
        assert!(!board.has_contradiction());
        assert!(board.is_valid_solution(&Topology::standard()));
    }

    #[test]
    fn test_contradiction_detection() {
        let mut board = Board::new();
        assert!(!board.has_contradiction());
        board.set_candidates(Cell::from_index(40), DigitSet::EMPTY);
        assert!(board.has_contradiction());
    }

    #[test]
    fn test_invalid_solution_rejected() {
        // All cells solved, but every row repeats digits.
        let board = Board::parse(&"1".repeat(81)).unwrap();
        assert!(board.is_solved());
        assert!(!board.is_valid_solution(&Topology::standard()));
    }

    #[test]
    fn test_render_layout() {
        let board = Board::parse(SOLVED).unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        // 9 board rows plus 2 separator lines.
        assert_eq!(lines.len(), 11);
        assert!(lines[3].contains('+'));
        assert!(lines[3].contains('-'));
        assert!(lines[0].matches('|').count() == 2);
        assert!(lines[0].contains('1'));
    }
}
