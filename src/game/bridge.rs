//! Bridge-style game variants.

use std::path::Path;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::LoadError;

use super::Game;

/// Bridge: ten-card hands, scored by the number of cards dealt.
#[derive(Debug)]
pub struct BridgeGame {
    deck: Deck,
}

impl BridgeGame {
    /// Display name.
    pub const NAME: &'static str = "Bridge";
    /// Cards per hand.
    pub const HAND_SIZE: usize = 10;
    /// Deck spec filename, resolved against the deck directory.
    pub const DECK_FILE: &'static str = "bridge1.txt";

    /// Loads the variant's deck from `deck_dir` and shuffles it.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the deck spec or its companion card list
    /// is missing, unreadable, or malformed.
    pub fn new<P: AsRef<Path>>(deck_dir: P, seed: u64) -> Result<Self, LoadError> {
        let mut deck = Deck::from_file(deck_dir.as_ref().join(Self::DECK_FILE), seed)?;
        deck.shuffle();
        Ok(Self { deck })
    }
}

impl Game for BridgeGame {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn hand_size(&self) -> usize {
        Self::HAND_SIZE
    }

    fn deck(&self) -> &Deck {
        &self.deck
    }

    fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    fn score(&self, hand: &[Card]) -> u32 {
        hand.len() as u32
    }
}

/// Bridge honors: full thirteen-card hands, scored by high-card points
/// (ace 4, king 3, queen 2, jack 1).
#[derive(Debug)]
pub struct BridgeHonorsGame {
    deck: Deck,
}

impl BridgeHonorsGame {
    /// Display name.
    pub const NAME: &'static str = "Bridge Honors";
    /// Cards per hand.
    pub const HAND_SIZE: usize = 13;
    /// Deck spec filename, resolved against the deck directory.
    pub const DECK_FILE: &'static str = "bridge1.txt";

    /// Loads the variant's deck from `deck_dir` and shuffles it.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the deck spec or its companion card list
    /// is missing, unreadable, or malformed.
    pub fn new<P: AsRef<Path>>(deck_dir: P, seed: u64) -> Result<Self, LoadError> {
        let mut deck = Deck::from_file(deck_dir.as_ref().join(Self::DECK_FILE), seed)?;
        deck.shuffle();
        Ok(Self { deck })
    }
}

impl Game for BridgeHonorsGame {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn hand_size(&self) -> usize {
        Self::HAND_SIZE
    }

    fn deck(&self) -> &Deck {
        &self.deck
    }

    fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    fn score(&self, hand: &[Card]) -> u32 {
        hand.iter()
            .map(|card| match card.compact_value {
                'A' => 4,
                'K' => 3,
                'Q' => 2,
                'J' => 1,
                _ => 0,
            })
            .sum()
    }
}
