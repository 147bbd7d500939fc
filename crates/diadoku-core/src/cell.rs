//! Board coordinates.

use std::fmt::{self, Display};

const ROW_LETTERS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// One of the 81 positions on the board.
///
/// A cell is identified by a row letter `A`-`I` and a column digit `1`-`9`,
/// and stored as its row-major index 0-80 (`A1` is 0, `A9` is 8, `I9` is
/// 80). The index order of [`Cell::ALL`] is the deterministic enumeration
/// order used for tie-breaking throughout the solver.
///
/// # Examples
///
/// ```
/// use diadoku_core::Cell;
///
/// let cell = Cell::from_coords(4, 4);
/// assert_eq!(cell.to_string(), "E5");
/// assert_eq!(cell.index(), 40);
/// assert_eq!(cell.box_index(), 4);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// All 81 cells in row-major order (`A1`, `A2`, .., `I9`).
    pub const ALL: [Self; 81] = {
        let mut all = [Self(0); 81];
        let mut i = 0;
        while i < 81 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a cell from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81, "cell index out of range");
        Self(index)
    }

    /// Creates a cell from zero-based row and column numbers (0-8 each).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn from_coords(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "cell coordinates out of range");
        Self(row * 9 + col)
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the zero-based row number (0 for row `A`, 8 for row `I`).
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.0 / 9
    }

    /// Returns the zero-based column number (0 for column `1`).
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.0 % 9
    }

    /// Returns the index of the 3x3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(&self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            ROW_LETTERS[self.row() as usize],
            self.col() + 1
        )
    }
}
