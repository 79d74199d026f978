//! Suit and card value objects.

use core::fmt;
use core::hash::{Hash, Hasher};

/// A card suit declared by a deck spec.
///
/// Suits are compared and hashed by their single-character code only; the
/// display name is carried along for rendering.
#[derive(Debug, Clone)]
pub struct Suit {
    /// Single-character code used in deck listings (e.g. `'S'`).
    pub code: char,
    /// Full display name (e.g. `"Spades"`).
    pub name: String,
}

impl Suit {
    /// Creates a new suit.
    #[must_use]
    pub const fn new(code: char, name: String) -> Self {
        Self { code, name }
    }

    /// Returns the base codepoint of this suit's row in the Unicode
    /// playing-card block, if the suit is one of the four French suits.
    #[must_use]
    pub const fn unicode_codepoint_base(&self) -> Option<u32> {
        match self.code {
            'S' => Some(0x1F0A0),
            'H' => Some(0x1F0B0),
            'D' => Some(0x1F0C0),
            'C' => Some(0x1F0D0),
            _ => None,
        }
    }

    /// Returns the suit symbol (♠ ♥ ♦ ♣), if the suit is one of the four
    /// French suits.
    #[must_use]
    pub const fn unicode_char(&self) -> Option<char> {
        match self.code {
            'S' => Some('\u{2660}'),
            'H' => Some('\u{2665}'),
            'D' => Some('\u{2666}'),
            'C' => Some('\u{2663}'),
            _ => None,
        }
    }
}

impl PartialEq for Suit {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Suit {}

impl Hash for Suit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A playing card: a suit plus a rank in compact and full form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// Single-character rank code (e.g. `'A'`).
    pub compact_value: char,
    /// Full rank name (e.g. `"Ace"`).
    pub full_value: String,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, compact_value: char, full_value: String) -> Self {
        Self {
            suit,
            compact_value,
            full_value,
        }
    }

    /// Returns the two-character compact form, rank code then suit code
    /// (e.g. `"AS"`).
    #[must_use]
    pub fn compact(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.compact_value);
        s.push(self.suit.code);
        s
    }

    /// Returns the Unicode playing-card character for this card (🂡..🃞), if
    /// both the suit and the rank have standard codepoints.
    ///
    /// The Unicode block reserves a knight between queen and king, so queen
    /// and king sit at offsets 13 and 14 of their suit's row.
    #[must_use]
    pub fn unicode_char(&self) -> Option<char> {
        let base = self.suit.unicode_codepoint_base()?;
        let offset = match self.compact_value {
            'A' => 1,
            '2'..='9' => self.compact_value as u32 - '0' as u32,
            'T' => 10,
            'J' => 11,
            'Q' => 13,
            'K' => 14,
            _ => return None,
        };
        char::from_u32(base + offset)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} ({}{})",
            self.full_value, self.suit.name, self.compact_value, self.suit.code
        )
    }
}
