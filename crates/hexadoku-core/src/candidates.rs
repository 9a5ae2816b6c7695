//! A set of symbols, optimized for hexadoku cells.

use std::iter::FusedIterator;

use crate::Symbol;

/// A set of [`Symbol`]s represented as a 16-bit mask.
///
/// Bit `n` represents symbol value `n + 1`, giving efficient storage and fast
/// set operations for candidate tracking during generation and validation.
///
/// # Examples
///
/// ```
/// use hexadoku_core::{Candidates, Symbol};
///
/// let mut candidates = Candidates::FULL;
/// candidates.remove(Symbol::S5);
/// candidates.remove(Symbol::S16);
///
/// assert_eq!(candidates.len(), 14);
/// assert!(!candidates.contains(Symbol::S5));
/// assert!(candidates.contains(Symbol::S1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Candidates {
    bits: u16,
}

impl Candidates {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all sixteen symbols.
    pub const FULL: Self = Self { bits: u16::MAX };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(symbol: Symbol) -> u16 {
        1 << (symbol.value() - 1)
    }

    /// Inserts a symbol into the set.
    pub const fn insert(&mut self, symbol: Symbol) {
        self.bits |= Self::bit(symbol);
    }

    /// Removes a symbol from the set.
    pub const fn remove(&mut self, symbol: Symbol) {
        self.bits &= !Self::bit(symbol);
    }

    /// Returns whether the set contains a symbol.
    #[must_use]
    pub const fn contains(self, symbol: Symbol) -> bool {
        self.bits & Self::bit(symbol) != 0
    }

    /// Returns the number of symbols in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the symbols in the set, in ascending order.
    #[must_use]
    pub fn iter(self) -> CandidatesIter {
        CandidatesIter { bits: self.bits }
    }
}

impl FromIterator<Symbol> for Candidates {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = Self::new();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

impl IntoIterator for Candidates {
    type Item = Symbol;
    type IntoIter = CandidatesIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the symbols of a [`Candidates`] set.
#[derive(Debug, Clone)]
pub struct CandidatesIter {
    bits: u16,
}

impl Iterator for CandidatesIter {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Symbol::try_from_value(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for CandidatesIter {}
impl ExactSizeIterator for CandidatesIter {}
