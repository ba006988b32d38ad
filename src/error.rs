//! Error types for deck construction.

use thiserror::Error;

/// Errors that can occur while building or transforming a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Rank value outside `1..=13`.
    #[error("rank {0} is outside 1..=13")]
    InvalidRank(u8),
    /// Suit index outside `0..4`.
    #[error("suit index {0} is outside 0..4")]
    InvalidSuit(u8),
    /// Duplicating the deck would overflow the addressable length.
    #[error("{copies} copies of {len} cards overflow the deck length")]
    TooManyCards {
        /// Length of the input sequence.
        len: usize,
        /// Requested number of copies.
        copies: usize,
    },
    /// A caller-supplied transform refused its input.
    #[error("transform `{0}` rejected the deck")]
    Rejected(&'static str),
}
