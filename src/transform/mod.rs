//! Deck transforms.
//!
//! A transform takes a card sequence and returns a new one, possibly of a
//! different length. [`build_deck`](crate::deck::build_deck) threads the base
//! deck through a list of them in order.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DeckError;
use crate::shuffle::Shuffler;

mod sort;

pub use sort::{DefaultSort, Sort, SortBy, default_sort, less, sort, sort_by};

/// A step in the deck-building pipeline.
///
/// Closures of the form `Fn(Vec<Card>) -> Result<Vec<Card>, DeckError>` are
/// transforms too:
///
/// ```
/// use cardstack::{Card, DeckError, build_deck};
///
/// let reverse = |mut cards: Vec<Card>| -> Result<Vec<Card>, DeckError> {
///     cards.reverse();
///     Ok(cards)
/// };
/// let cards = build_deck(&[&reverse]).unwrap();
/// assert_eq!(cards[0].to_string(), "King of Hearts");
/// ```
pub trait Transform {
    /// Transforms `cards` into a new sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform cannot produce a sequence; the
    /// pipeline stops at the first failure.
    fn apply(&self, cards: Vec<Card>) -> Result<Vec<Card>, DeckError>;

    /// Short name used in log output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> Transform for F
where
    F: Fn(Vec<Card>) -> Result<Vec<Card>, DeckError>,
{
    fn apply(&self, cards: Vec<Card>) -> Result<Vec<Card>, DeckError> {
        self(cards)
    }
}

/// Reorders the deck with a [`Shuffler`].
#[derive(Debug, Clone, Copy)]
pub struct Shuffle<'a> {
    shuffler: &'a Shuffler,
}

impl Transform for Shuffle<'_> {
    fn apply(&self, cards: Vec<Card>) -> Result<Vec<Card>, DeckError> {
        Ok(self.shuffler.shuffle(&cards))
    }

    fn name(&self) -> &'static str {
        "shuffle"
    }
}

/// Shuffles with the process-wide source.
#[must_use]
pub fn shuffle() -> Shuffle<'static> {
    shuffle_with(crate::shuffle::shared())
}

/// Shuffles with a caller-owned source.
///
/// # Example
///
/// ```
/// use cardstack::{Shuffler, build_deck, shuffle_with};
///
/// let a = build_deck(&[&shuffle_with(&Shuffler::from_seed(3))]).unwrap();
/// let b = build_deck(&[&shuffle_with(&Shuffler::from_seed(3))]).unwrap();
/// assert_eq!(a, b);
/// ```
#[must_use]
pub const fn shuffle_with(shuffler: &Shuffler) -> Shuffle<'_> {
    Shuffle { shuffler }
}

/// Appends jokers to the end of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jokers(pub usize);

impl Transform for Jokers {
    fn apply(&self, mut cards: Vec<Card>) -> Result<Vec<Card>, DeckError> {
        cards.extend((0..self.0).map(Card::joker));
        Ok(cards)
    }

    fn name(&self) -> &'static str {
        "jokers"
    }
}

/// Appends `n` jokers indexed `0..n`.
#[must_use]
pub const fn jokers(n: usize) -> Jokers {
    Jokers(n)
}

/// Removes every card the predicate matches.
#[derive(Debug, Clone, Copy)]
pub struct Filter<P>(P);

impl<P> Transform for Filter<P>
where
    P: Fn(&Card) -> bool,
{
    fn apply(&self, mut cards: Vec<Card>) -> Result<Vec<Card>, DeckError> {
        cards.retain(|card| !(self.0)(card));
        Ok(cards)
    }

    fn name(&self) -> &'static str {
        "filter"
    }
}

/// Drops the cards for which `predicate` returns `true`.
///
/// Note this is an exclusion filter: matching cards are removed and the
/// rest keep their relative order.
///
/// # Example
///
/// ```
/// use cardstack::{Rank, build_deck, filter};
///
/// let no_aces = filter(|card: &cardstack::Card| card.rank() == Some(Rank::Ace));
/// assert_eq!(build_deck(&[&no_aces]).unwrap().len(), 48);
/// ```
#[must_use]
pub const fn filter<P>(predicate: P) -> Filter<P>
where
    P: Fn(&Card) -> bool,
{
    Filter(predicate)
}

/// Concatenates the deck with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decks(pub usize);

impl Transform for Decks {
    fn apply(&self, cards: Vec<Card>) -> Result<Vec<Card>, DeckError> {
        let copies = self.0;
        if cards.is_empty() {
            return Ok(cards);
        }
        let too_many = DeckError::TooManyCards {
            len: cards.len(),
            copies,
        };
        let total = cards.len().checked_mul(copies).ok_or(too_many)?;

        // The card count can fit in `usize` while its byte size does not.
        let mut out = Vec::new();
        out.try_reserve_exact(total).map_err(|_| too_many)?;
        for _ in 0..copies {
            out.extend_from_slice(&cards);
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "decks"
    }
}

/// Repeats the deck `n` times in order. `decks(0)` empties it.
#[must_use]
pub const fn decks(n: usize) -> Decks {
    Decks(n)
}
