//! Error types for deck loading and dealing.

use thiserror::Error;

/// Errors that can occur while parsing a deck spec and card list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The deck spec is missing the card-list filename line.
    #[error("deck spec is missing the card-list filename line")]
    MissingCardList,
    /// The deck spec is missing the card count line.
    #[error("deck spec is missing the card count line")]
    MissingCardCount,
    /// The card count line is not a non-negative integer.
    #[error("invalid card count: {line:?}")]
    BadCardCount {
        /// The offending line.
        line: String,
    },
    /// A code declaration line is not a `code,name` pair with a
    /// single-character code.
    #[error("invalid code declaration: {line:?}")]
    BadCodeLine {
        /// The offending line.
        line: String,
    },
    /// A code was declared twice. Rank and suit codes share one namespace.
    #[error("duplicate code declaration: {code:?}")]
    DuplicateCode {
        /// The code that was declared twice.
        code: char,
    },
    /// A card-list code was never declared in the deck spec.
    #[error("unknown card code: {code:?}")]
    UnknownCode {
        /// The unresolved code.
        code: char,
    },
    /// The card list holds fewer cards than the deck spec declares.
    #[error("card list has {available} cards but the deck spec declares {declared}")]
    NotEnoughCards {
        /// The count declared by the deck spec.
        declared: usize,
        /// The number of complete two-character chunks available.
        available: usize,
    },
}

/// Errors that can occur while loading a deck from files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The spec or companion card-list file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file contents did not parse as a deck.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// Deal count is zero.
    #[error("deal count is zero")]
    ZeroCount,
}
