//! A composable playing-card deck builder with optional `no_std` support.
//!
//! [`build_deck`] generates the 52-card base deck and passes it through an
//! ordered list of [`Transform`]s: sorting, shuffling, filtering, joker
//! insertion, and multi-deck duplication. Shuffling draws from a seedable
//! [`Shuffler`], so results can be made reproducible.
//!
//! # Example
//!
//! ```
//! use cardstack::{Card, Rank, Suit, build_deck, default_sort, jokers, shuffle};
//!
//! let cards = build_deck(&[&shuffle(), &jokers(2), &default_sort()]).unwrap();
//! assert_eq!(cards.len(), 54);
//! assert_eq!(cards[0], Card::new(Suit::Spade, Rank::Ace));
//! assert_eq!(cards[53].to_string(), "Joker");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod shuffle;
mod sync;
pub mod transform;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_RANK, Rank, Suit};
pub use deck::{DeckBuilder, base_deck, build_deck};
pub use error::DeckError;
pub use options::DeckOptions;
pub use shuffle::Shuffler;
pub use transform::{
    DefaultSort, Decks, Filter, Jokers, Shuffle, Sort, SortBy, Transform, decks, default_sort,
    filter, jokers, less, shuffle, shuffle_with, sort, sort_by,
};
