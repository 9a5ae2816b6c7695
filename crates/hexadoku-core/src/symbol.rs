//! Hexadoku symbol representation.

use std::fmt::{self, Display};

/// A hexadoku symbol in the range 1-16.
///
/// This enum provides type-safe representation of the sixteen symbols used on
/// a 16×16 board, preventing invalid values at compile time. Each variant
/// corresponds to exactly one symbol value.
///
/// Symbols are abstract: how they render (letters, animal glyphs, color
/// swatches) is decided by [`SymbolTheme`](crate::SymbolTheme), not here.
///
/// # Examples
///
/// ```
/// use hexadoku_core::Symbol;
///
/// let symbol = Symbol::S5;
/// assert_eq!(symbol.value(), 5);
///
/// // Create from a u8 value
/// let symbol = Symbol::from_value(16);
/// assert_eq!(symbol, Symbol::S16);
///
/// // Iterate over all symbols
/// for symbol in Symbol::ALL {
///     assert!((1..=16).contains(&symbol.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// The symbol 1.
    S1 = 1,
    /// The symbol 2.
    S2 = 2,
    /// The symbol 3.
    S3 = 3,
    /// The symbol 4.
    S4 = 4,
    /// The symbol 5.
    S5 = 5,
    /// The symbol 6.
    S6 = 6,
    /// The symbol 7.
    S7 = 7,
    /// The symbol 8.
    S8 = 8,
    /// The symbol 9.
    S9 = 9,
    /// The symbol 10.
    S10 = 10,
    /// The symbol 11.
    S11 = 11,
    /// The symbol 12.
    S12 = 12,
    /// The symbol 13.
    S13 = 13,
    /// The symbol 14.
    S14 = 14,
    /// The symbol 15.
    S15 = 15,
    /// The symbol 16.
    S16 = 16,
}

impl Symbol {
    /// Array containing all symbols from 1 to 16 in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexadoku_core::Symbol;
    ///
    /// assert_eq!(Symbol::ALL.len(), 16);
    /// assert_eq!(Symbol::ALL[0], Symbol::S1);
    /// assert_eq!(Symbol::ALL[15], Symbol::S16);
    /// ```
    pub const ALL: [Self; 16] = [
        Self::S1,
        Self::S2,
        Self::S3,
        Self::S4,
        Self::S5,
        Self::S6,
        Self::S7,
        Self::S8,
        Self::S9,
        Self::S10,
        Self::S11,
        Self::S12,
        Self::S13,
        Self::S14,
        Self::S15,
        Self::S16,
    ];

    /// Creates a symbol from a u8 value in the range 1-16.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-16.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexadoku_core::Symbol;
    ///
    /// assert_eq!(Symbol::from_value(5), Symbol::S5);
    /// ```
    ///
    /// ```should_panic
    /// use hexadoku_core::Symbol;
    ///
    /// // This will panic
    /// let _ = Symbol::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid symbol value: {value}"))
    }

    /// Creates a symbol from a u8 value, returning `None` when out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexadoku_core::Symbol;
    ///
    /// assert_eq!(Symbol::try_from_value(16), Some(Symbol::S16));
    /// assert_eq!(Symbol::try_from_value(0), None);
    /// assert_eq!(Symbol::try_from_value(17), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        if matches!(value, 1..=16) {
            Some(Self::ALL[(value - 1) as usize])
        } else {
            None
        }
    }

    /// Returns the numeric value of this symbol (1-16).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the single-character text form of this symbol.
    ///
    /// Values 1-9 map to `'1'`-`'9'` and values 10-16 map to `'A'`-`'G'`,
    /// giving every symbol a one-character encoding for grid strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexadoku_core::Symbol;
    ///
    /// assert_eq!(Symbol::S9.to_char(), '9');
    /// assert_eq!(Symbol::S10.to_char(), 'A');
    /// assert_eq!(Symbol::S16.to_char(), 'G');
    /// ```
    #[must_use]
    pub const fn to_char(self) -> char {
        let value = self.value();
        if value <= 9 {
            (b'0' + value) as char
        } else {
            (b'A' + value - 10) as char
        }
    }

    /// Creates a symbol from its single-character text form.
    ///
    /// Accepts `'1'`-`'9'` and `'A'`-`'G'` (case-insensitive); returns `None`
    /// for every other character.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexadoku_core::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('7'), Some(Symbol::S7));
    /// assert_eq!(Symbol::from_char('g'), Some(Symbol::S16));
    /// assert_eq!(Symbol::from_char('.'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='9' => Self::try_from_value(c as u8 - b'0'),
            'A'..='G' => Self::try_from_value(c as u8 - b'A' + 10),
            'a'..='g' => Self::try_from_value(c as u8 - b'a' + 10),
            _ => None,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_char(), f)
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> u8 {
        symbol.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        assert_eq!(Symbol::from_value(1), Symbol::S1);
        assert_eq!(Symbol::from_value(16), Symbol::S16);
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_value(symbol.value()), symbol);
        }

        assert_eq!(Symbol::ALL.len(), 16);
        assert_eq!(Symbol::ALL[0], Symbol::S1);
        assert_eq!(Symbol::ALL[15], Symbol::S16);

        let value: u8 = Symbol::S5.into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_char_round_trip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_char(symbol.to_char()), Some(symbol));
        }
        assert_eq!(format!("{}", Symbol::S1), "1");
        assert_eq!(format!("{}", Symbol::S10), "A");
        assert_eq!(format!("{}", Symbol::S16), "G");
        assert_eq!(Symbol::from_char('0'), None);
        assert_eq!(Symbol::from_char('H'), None);
    }

    #[test]
    fn test_try_from_value_bounds() {
        assert_eq!(Symbol::try_from_value(0), None);
        assert_eq!(Symbol::try_from_value(17), None);
        assert_eq!(Symbol::try_from_value(1), Some(Symbol::S1));
        assert_eq!(Symbol::try_from_value(16), Some(Symbol::S16));
    }

    #[test]
    #[should_panic(expected = "Invalid symbol value: 0")]
    fn test_from_value_zero_panics() {
        let _ = Symbol::from_value(0);
    }

    #[test]
    #[should_panic(expected = "Invalid symbol value: 17")]
    fn test_from_value_seventeen_panics() {
        let _ = Symbol::from_value(17);
    }
}
