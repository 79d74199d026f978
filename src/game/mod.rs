//! Game variants built on a deck.

use crate::card::Card;
use crate::deck::{DealCards, Deck};
use crate::error::DealError;

mod bridge;

pub use bridge::{BridgeGame, BridgeHonorsGame};

/// A game variant: a deck, a fixed hand size, and a scoring rule.
///
/// Variants own one [`Deck`], loaded and shuffled at construction, and
/// differ only in configuration and in how they score a hand. Implementors
/// supply [`Game::score`]; dealing comes for free.
pub trait Game {
    /// Display name of the variant.
    fn name(&self) -> &str;

    /// Number of cards in a single hand. Always greater than zero.
    fn hand_size(&self) -> usize;

    /// The variant's deck.
    fn deck(&self) -> &Deck;

    /// Mutable access to the variant's deck.
    fn deck_mut(&mut self) -> &mut Deck;

    /// Upper bound on the number of full hands one deck can supply.
    fn max_hands_per_deck(&self) -> usize {
        self.deck().size() / self.hand_size()
    }

    /// Deals one hand of [`Game::hand_size`] cards lazily.
    ///
    /// Exhausting the deck mid-hand surfaces [`DealError::EmptyDeck`]
    /// through the iterator after the remaining cards have been yielded.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::ZeroCount`] if the hand size is zero, which a
    /// well-formed variant never configures.
    fn deal_hand(&mut self) -> Result<DealCards<'_>, DealError> {
        let hand_size = self.hand_size();
        self.deck_mut().deal_cards(hand_size)
    }

    /// Scores a dealt hand.
    ///
    /// Pure: depends only on the supplied cards, never on deck state.
    fn score(&self, hand: &[Card]) -> u32;
}
