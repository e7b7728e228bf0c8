//! A set of candidate digits from 1 to 9.
//!
//! This module provides [`DigitSet`], the per-cell candidate representation
//! used throughout the solver. The set is a single 16-bit mask where bits
//! 0-8 stand for digits 1-9, so membership tests, insertion, and removal are
//! single bit operations and the set itself is `Copy`.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::DigitSet;
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(5);
//! candidates.remove(7);
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(5));
//! assert!(candidates.contains(1));
//! ```

use std::{fmt, iter::FusedIterator};

/// A set of digits from 1 to 9, represented as a bit mask.
///
/// Candidate sets only ever hold digits in the range 1-9; passing any other
/// value to a method taking a digit is a bug in the caller and panics.
///
/// Iteration yields digits in ascending order, which is what gives the
/// solver its deterministic candidate ordering.
///
/// # Examples
///
/// ```
/// use ninefold_core::DigitSet;
///
/// let mut set = DigitSet::new();
/// set.insert(4);
/// set.insert(9);
/// set.insert(1);
///
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 4, 9]);
/// assert_eq!(set.as_single(), None);
///
/// set.remove(4);
/// set.remove(9);
/// assert_eq!(set.as_single(), Some(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing every digit from 1 to 9.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing only `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is outside the range 1-9.
    #[inline]
    #[must_use]
    pub fn from_elem(digit: u8) -> Self {
        Self { bits: Self::bit(digit) }
    }

    /// Adds `digit` to the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is outside the range 1-9.
    #[inline]
    pub fn insert(&mut self, digit: u8) {
        self.bits |= Self::bit(digit);
    }

    /// Removes `digit` from the set. Removing an absent digit is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is outside the range 1-9.
    #[inline]
    pub fn remove(&mut self, digit: u8) {
        self.bits &= !Self::bit(digit);
    }

    /// Returns `true` if the set contains `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is outside the range 1-9.
    #[inline]
    #[must_use]
    pub fn contains(self, digit: u8) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole digit if the set holds exactly one, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::DigitSet;
    ///
    /// assert_eq!(DigitSet::from_elem(6).as_single(), Some(6));
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_single(self) -> Option<u8> {
        if self.len() == 1 { self.iter().next() } else { None }
    }

    /// Returns an iterator over the digits in ascending order.
    #[inline]
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }

    fn bit(digit: u8) -> u16 {
        assert!(
            (1..=9).contains(&digit),
            "digit must be between 1 and 9, got {digit}"
        );
        1 << (digit - 1)
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        #[expect(clippy::cast_possible_truncation)]
        let digit = index as u8 + 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_digit_range() {
        let mut set = DigitSet::new();
        set.insert(1);
        set.insert(9);
        assert!(set.contains(1));
        assert!(set.contains(9));
        assert_eq!(set.len(), 2);
    }

    #[test]
    #[should_panic(expected = "digit must be")]
    fn test_rejects_zero() {
        let mut set = DigitSet::new();
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "digit must be")]
    fn test_rejects_ten() {
        let mut set = DigitSet::new();
        set.insert(10);
    }

    #[test]
    fn test_from_iter() {
        let set = DigitSet::from_iter([1, 5, 9]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(1));
        assert!(set.contains(5));
        assert!(set.contains(9));
    }

    #[test]
    fn test_from_elem() {
        let set = DigitSet::from_elem(7);
        assert_eq!(set.len(), 1);
        assert!(set.contains(7));
        assert!(!set.contains(6));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut set = DigitSet::from_iter([2, 3]);
        set.remove(3);
        set.remove(3);
        assert_eq!(set.len(), 1);
        assert!(set.contains(2));
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([9, 1, 5, 3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::from_elem(4).as_single(), Some(4));
        assert_eq!(DigitSet::from_iter([4, 5]).as_single(), None);
        assert_eq!(DigitSet::EMPTY.as_single(), None);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);

        for digit in 1..=9 {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_exact_size_iterator() {
        let set = DigitSet::from_iter([2, 4, 6, 8]);
        let mut iter = set.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
    }

    proptest! {
        #[test]
        fn test_tracks_reference_set(
            ops in prop::collection::vec((any::<bool>(), 1u8..=9), 0..64),
        ) {
            let mut set = DigitSet::new();
            let mut model = BTreeSet::new();
            for (insert, digit) in ops {
                if insert {
                    set.insert(digit);
                    model.insert(digit);
                } else {
                    set.remove(digit);
                    model.remove(&digit);
                }
            }
            prop_assert_eq!(set.len(), model.len());
            prop_assert_eq!(set.is_empty(), model.is_empty());
            prop_assert_eq!(
                set.iter().collect::<Vec<_>>(),
                model.iter().copied().collect::<Vec<_>>()
            );
        }
    }
}
