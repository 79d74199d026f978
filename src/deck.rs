//! Deck loading, shuffling, and dealing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Suit};
use crate::error::{DealError, LoadError, ParseError};

/// An ordered collection of cards loaded from a deck spec.
///
/// A deck keeps the canonical card sequence from the spec alongside the live
/// dealable pool. Dealing removes cards from the live pool only; shuffling
/// rebuilds the pool from the canonical sequence, so dealt cards return.
///
/// The deck owns a seedable random source, so shuffles are reproducible for
/// a given seed.
///
/// # Example
///
/// ```
/// use deckr::Deck;
///
/// let spec = "tiny_cards.txt\n4\nA,Ace\nK,King\nS,Spades\nH,Hearts\n";
/// let mut deck = Deck::from_strings(spec, "ASKSAHKH", 42).unwrap();
///
/// assert_eq!(deck.size(), 4);
/// assert_eq!(deck.deal_card().unwrap().to_string(), "King of Hearts (KH)");
/// ```
#[derive(Debug)]
pub struct Deck {
    /// The canonical, undealt card sequence in load order.
    original_cards: Vec<Card>,
    /// The current dealable pool. Cards are dealt from the end.
    live_cards: Vec<Card>,
    /// Distinct suits encountered in the card list, in order of first
    /// appearance.
    suits: Vec<Suit>,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Parses a deck spec and its card list into a deck.
    ///
    /// The spec format is line-oriented: line 0 names the companion
    /// card-list file (only [`Deck::from_file`] uses it), line 1 is the card
    /// count `N`, and every following line declares a `code,name` pair.
    /// Rank and suit codes share one namespace. The card list is read as
    /// `N` consecutive two-character chunks, rank code then suit code;
    /// characters beyond the first `2 * N` are ignored.
    ///
    /// The returned deck's live pool is in load order. Call
    /// [`Deck::shuffle`] to randomize it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the spec is malformed, declares a code
    /// twice, declares more cards than the card list holds, or the card
    /// list uses an undeclared code.
    pub fn from_strings(deck_spec: &str, card_list: &str, seed: u64) -> Result<Self, ParseError> {
        let mut lines = deck_spec.lines();
        let _card_list_name = lines.next().ok_or(ParseError::MissingCardList)?;
        let count_line = lines.next().ok_or(ParseError::MissingCardCount)?;
        let count: usize =
            count_line
                .trim()
                .parse()
                .map_err(|_| ParseError::BadCardCount {
                    line: count_line.to_string(),
                })?;

        // One code -> name mapping shared by ranks and suits.
        let mut names: HashMap<char, String> = HashMap::new();
        for line in lines {
            let (code, name) = parse_code_line(line)?;
            if names.insert(code, name).is_some() {
                return Err(ParseError::DuplicateCode { code });
            }
        }

        let chunk_chars: Vec<char> = card_list.trim_end().chars().collect();
        if chunk_chars.len() < count * 2 {
            return Err(ParseError::NotEnoughCards {
                declared: count,
                available: chunk_chars.len() / 2,
            });
        }

        let mut cards = Vec::with_capacity(count);
        let mut suits: Vec<Suit> = Vec::new();
        for chunk in chunk_chars.chunks_exact(2).take(count) {
            let (value_code, suit_code) = (chunk[0], chunk[1]);
            let value_name = names
                .get(&value_code)
                .ok_or(ParseError::UnknownCode { code: value_code })?;
            let suit_name = names
                .get(&suit_code)
                .ok_or(ParseError::UnknownCode { code: suit_code })?;

            let suit = Suit::new(suit_code, suit_name.clone());
            if !suits.contains(&suit) {
                suits.push(suit.clone());
            }
            cards.push(Card::new(suit, value_code, value_name.clone()));
        }

        Ok(Self {
            live_cards: cards.clone(),
            original_cards: cards,
            suits,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Loads a deck from a spec file.
    ///
    /// The companion card-list filename is taken from the spec's first line
    /// and resolved relative to the spec file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if either file is missing or unreadable,
    /// and [`LoadError::Parse`] if the contents do not parse as a deck.
    pub fn from_file<P: AsRef<Path>>(path: P, seed: u64) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let spec = fs::read_to_string(path)?;

        let card_list_name = spec
            .lines()
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ParseError::MissingCardList)?;
        let card_list_path = path
            .parent()
            .map_or_else(|| card_list_name.into(), |dir| dir.join(card_list_name));
        let card_list = fs::read_to_string(card_list_path)?;

        Ok(Self::from_strings(&spec, &card_list, seed)?)
    }

    /// Resets the live pool to a fresh randomized permutation of the full
    /// deck. Cards dealt so far return to the pool.
    pub fn shuffle(&mut self) {
        self.live_cards = self.original_cards.clone();
        self.live_cards.shuffle(&mut self.rng);
    }

    /// Removes and returns one card from the end of the live pool.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal_card(&mut self) -> Result<Card, DealError> {
        self.live_cards.pop().ok_or(DealError::EmptyDeck)
    }

    /// Deals `count` cards lazily, one per iterator step.
    ///
    /// Each step draws from the live pool only as it is consumed. If the
    /// pool runs out mid-deal, the iterator yields every remaining card and
    /// then a single [`DealError::EmptyDeck`] before fusing, so callers must
    /// be prepared for a partial hand.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::ZeroCount`] if `count` is zero. No card is
    /// drawn in that case.
    pub fn deal_cards(&mut self, count: usize) -> Result<DealCards<'_>, DealError> {
        if count == 0 {
            return Err(DealError::ZeroCount);
        }
        Ok(DealCards {
            deck: self,
            remaining: count,
        })
    }

    /// Returns the cards currently in the live pool, in deal order from the
    /// end.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.live_cards
    }

    /// Returns the canonical card sequence in load order.
    #[must_use]
    pub fn original_cards(&self) -> &[Card] {
        &self.original_cards
    }

    /// Returns the distinct suits in the deck, in order of first appearance
    /// in the card list.
    #[must_use]
    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }

    /// Returns the full deck size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.original_cards.len()
    }

    /// Returns the number of cards remaining in the live pool.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.live_cards.len()
    }

    /// Returns whether the live pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_cards.is_empty()
    }
}

/// Parses one `code,name` declaration line.
fn parse_code_line(line: &str) -> Result<(char, String), ParseError> {
    let bad = || ParseError::BadCodeLine {
        line: line.to_string(),
    };

    let (code_part, name) = line.split_once(',').ok_or_else(bad)?;
    let mut code_chars = code_part.chars();
    let code = code_chars.next().ok_or_else(bad)?;
    if code_chars.next().is_some() || name.is_empty() {
        return Err(bad());
    }
    Ok((code, name.to_string()))
}

/// Lazy dealing iterator returned by [`Deck::deal_cards`].
///
/// Yields `Ok(card)` for each card drawn and at most one
/// `Err(`[`DealError::EmptyDeck`]`)` if the deck runs out before the
/// requested count is reached. The iterator is not restartable: every card
/// it yields has already been removed from the deck.
#[derive(Debug)]
pub struct DealCards<'a> {
    deck: &'a mut Deck,
    remaining: usize,
}

impl Iterator for DealCards<'_> {
    type Item = Result<Card, DealError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.deck.deal_card() {
            Ok(card) => {
                self.remaining -= 1;
                Some(Ok(card))
            }
            Err(err) => {
                // Fuse after reporting exhaustion once.
                self.remaining = 0;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
