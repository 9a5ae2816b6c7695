//! Presentation themes mapping symbols to display glyphs.

use crate::Symbol;

/// A bijection between the sixteen symbols and presentation glyphs.
///
/// Themes only affect how a cell is rendered; engine correctness never
/// depends on them. Callers pick a theme and resolve each [`Symbol`] to a
/// glyph at draw time.
///
/// # Examples
///
/// ```
/// use hexadoku_core::{Symbol, SymbolTheme};
///
/// assert_eq!(SymbolTheme::Letters.glyph(Symbol::S1), "A");
/// assert_eq!(SymbolTheme::Letters.glyph(Symbol::S16), "P");
/// assert_eq!(SymbolTheme::Colors.glyph(Symbol::S1), "#e6194b");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SymbolTheme {
    /// The letters A through P.
    #[default]
    Letters,
    /// Sixteen animal glyphs.
    Animals,
    /// Sixteen distinguishable color swatches (hex RGB).
    Colors,
}

const LETTERS: [&str; 16] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P",
];

const ANIMALS: [&str; 16] = [
    "🐶", "🐱", "🐭", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵", "🐔", "🦉",
];

const COLORS: [&str; 16] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe", "#008080", "#e6beff", "#9a6324", "#fffac8", "#800000", "#aaffc3",
];

impl SymbolTheme {
    /// Array containing all themes.
    pub const ALL: [Self; 3] = [Self::Letters, Self::Animals, Self::Colors];

    /// Returns the glyph this theme assigns to a symbol.
    #[must_use]
    pub const fn glyph(self, symbol: Symbol) -> &'static str {
        let table = match self {
            Self::Letters => &LETTERS,
            Self::Animals => &ANIMALS,
            Self::Colors => &COLORS,
        };
        table[(symbol.value() - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_each_theme_is_a_bijection() {
        for theme in SymbolTheme::ALL {
            let glyphs: HashSet<_> = Symbol::ALL.iter().map(|&s| theme.glyph(s)).collect();
            assert_eq!(glyphs.len(), 16, "{theme:?} maps two symbols to one glyph");
        }
    }

    #[test]
    fn test_letter_theme_order() {
        assert_eq!(SymbolTheme::Letters.glyph(Symbol::S1), "A");
        assert_eq!(SymbolTheme::Letters.glyph(Symbol::S2), "B");
        assert_eq!(SymbolTheme::Letters.glyph(Symbol::S16), "P");
    }
}
