//! Card faces.

use serde::{Deserialize, Serialize};

use crate::core::PAIR_COUNT;

/// The eight faces on the board. Each appears on exactly two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    Apple,
    Banana,
    Grape,
    Watermelon,
    Strawberry,
    Pineapple,
    Cherry,
    Kiwi,
}

impl Symbol {
    /// All faces in declaration order.
    pub const ALL: [Symbol; PAIR_COUNT] = [
        Symbol::Apple,
        Symbol::Banana,
        Symbol::Grape,
        Symbol::Watermelon,
        Symbol::Strawberry,
        Symbol::Pineapple,
        Symbol::Cherry,
        Symbol::Kiwi,
    ];

    /// Position in [`Symbol::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Emoji shown when the cell is face up.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Symbol::Apple => "🍎",
            Symbol::Banana => "🍌",
            Symbol::Grape => "🍇",
            Symbol::Watermelon => "🍉",
            Symbol::Strawberry => "🍓",
            Symbol::Pineapple => "🍍",
            Symbol::Cherry => "🍒",
            Symbol::Kiwi => "🥝",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
