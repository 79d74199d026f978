//! A deck-file driven card dealing engine with pluggable game variants.
//!
//! Decks are declared in small text files: a spec file naming a companion
//! card list, a card count, and single-character code declarations for
//! ranks and suits; and a card list packing two characters per card. The
//! [`Deck`] type loads these, shuffles with a seedable random source, and
//! deals single cards or lazy batches. Game variants implement the
//! [`Game`] trait and are discovered through a static [`registry`].
//!
//! # Example
//!
//! ```
//! use deckr::Deck;
//!
//! let spec = "mini_cards.txt\n2\nA,Ace\nS,Spades\nH,Hearts\n";
//! let mut deck = Deck::from_strings(spec, "ASAH", 7).unwrap();
//!
//! deck.shuffle();
//! let hand: Result<Vec<_>, _> = deck.deal_cards(2).unwrap().collect();
//! assert_eq!(hand.unwrap().len(), 2);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod registry;

// Re-export main types
pub use card::{Card, Suit};
pub use deck::{DealCards, Deck};
pub use error::{DealError, LoadError, ParseError};
pub use game::{BridgeGame, BridgeHonorsGame, Game};
pub use registry::{Variant, variants};
