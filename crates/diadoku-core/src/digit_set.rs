//! Candidate digit sets for a single cell.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

const MASK: u16 = 0x1ff;

/// A set of candidate digits (1-9) for a single cell.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing compact storage and fast set operations. A
/// cell of the board is *solved* exactly when its `DigitSet` contains a
/// single digit, and *contradictory* when it is empty.
///
/// # Examples
///
/// ```
/// use diadoku_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert_eq!(candidates.as_single(), None);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing exactly one digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self(1 << (digit.value() - 1))
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(&self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Inserts a digit. Returns `true` if the set changed.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let old = self.0;
        self.0 |= Self::bit(digit);
        self.0 != old
    }

    /// Removes a digit. Returns `true` if the set changed.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let old = self.0;
        self.0 &= !Self::bit(digit);
        self.0 != old
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the single digit in the set, or `None` if the set does not
    /// contain exactly one digit.
    #[must_use]
    pub fn as_single(&self) -> Option<Digit> {
        if self.len() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            Some(Digit::from_value(self.0.trailing_zeros() as u8 + 1))
        } else {
            None
        }
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(&self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(&self) -> Iter {
        Iter(self.0)
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = Digit::from_value(self.0.trailing_zeros() as u8 + 1);
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn test_insert_remove() {
        let mut set = DigitSet::new();
        assert!(set.insert(D1));
        assert!(!set.insert(D1));
        assert!(set.insert(D9));
        assert_eq!(set.len(), 2);
        assert!(set.remove(D1));
        assert!(!set.remove(D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
        assert_eq!(DigitSet::from_elem(D7).as_single(), Some(D7));
        assert_eq!(DigitSet::from_iter([D2, D3]).as_single(), None);
    }

    #[test]
    fn test_operations() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);

        assert_eq!(a | b, DigitSet::from_iter([D1, D2, D3, D4]));
        assert_eq!(a & b, DigitSet::from_iter([D2, D3]));
        assert_eq!(a.difference(b), DigitSet::from_elem(D1));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DigitSet::from_iter([D3, D7]).to_string(), "37");
        assert_eq!(DigitSet::FULL.to_string(), "123456789");
        assert_eq!(DigitSet::EMPTY.to_string(), "");
    }

    proptest! {
        /// The bitset behaves like a `BTreeSet<u8>` model.
        #[test]
        fn prop_matches_btree_model(values in proptest::collection::vec(1u8..=9, 0..20)) {
            let mut set = DigitSet::new();
            let mut model = BTreeSet::new();
            for value in values {
                set.insert(Digit::from_value(value));
                model.insert(value);
            }
            prop_assert_eq!(set.len(), model.len());
            let digits: Vec<u8> = set.iter().map(|d| d.value()).collect();
            let expected: Vec<u8> = model.into_iter().collect();
            prop_assert_eq!(digits, expected);
        }
    }
}
