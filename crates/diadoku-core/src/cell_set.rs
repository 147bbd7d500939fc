//! Bitsets over the 81 board cells.

use std::{
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::cell::Cell;

const MASK: u128 = (1 << 81) - 1;

/// A set of board cells, backed by a 128-bit integer.
///
/// Bit `i` represents the cell with row-major index `i`. Peer sets and unit
/// membership are represented this way so that propagation works on plain
/// index sets rather than coordinate lookups.
///
/// # Examples
///
/// ```
/// use diadoku_core::{Cell, CellSet};
///
/// let mut set = CellSet::new();
/// set.insert(Cell::from_coords(0, 0));
/// set.insert(Cell::from_coords(8, 8));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Cell::from_coords(0, 0)));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet(u128);

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all 81 cells.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(cell: Cell) -> u128 {
        1 << cell.index()
    }

    /// Returns `true` if the set contains `cell`.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        self.0 & Self::bit(cell) != 0
    }

    /// Inserts a cell. Returns `true` if the set changed.
    pub const fn insert(&mut self, cell: Cell) -> bool {
        let old = self.0;
        self.0 |= Self::bit(cell);
        self.0 != old
    }

    /// Removes a cell. Returns `true` if the set changed.
    pub const fn remove(&mut self, cell: Cell) -> bool {
        let old = self.0;
        self.0 &= !Self::bit(cell);
        self.0 != old
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the cells in ascending index order.
    #[must_use]
    pub const fn iter(&self) -> Iter {
        Iter(self.0)
    }
}

impl BitAnd for CellSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellSet`] in ascending index order.
#[derive(Debug, Clone)]
pub struct Iter(u128);

impl Iterator for Iter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let cell = Cell::from_index(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
