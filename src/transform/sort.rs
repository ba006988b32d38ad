use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::error::DeckError;

use super::Transform;

/// Sorts by [`Card::order_key`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultSort;

impl Transform for DefaultSort {
    fn apply(&self, mut cards: Vec<Card>) -> Result<Vec<Card>, DeckError> {
        // `sort_by_key` is stable, so duplicates keep their relative order.
        cards.sort_by_key(Card::order_key);
        Ok(cards)
    }

    fn name(&self) -> &'static str {
        "default_sort"
    }
}

/// Sorts into suit-major, rank-ascending order.
#[must_use]
pub const fn default_sort() -> DefaultSort {
    DefaultSort
}

/// Returns the positional less-than predicate behind [`default_sort`].
///
/// `less(cards)(i, j)` is `true` when `cards[i]` sorts before `cards[j]`.
#[must_use]
pub fn less(cards: &[Card]) -> impl Fn(usize, usize) -> bool + use<> {
    let keys: Vec<usize> = cards.iter().map(Card::order_key).collect();
    move |i, j| keys[i] < keys[j]
}

/// Stable sort driven by a positional less-than factory.
#[derive(Debug, Clone, Copy)]
pub struct Sort<F>(F);

impl<F, L> Transform for Sort<F>
where
    F: Fn(&[Card]) -> L,
    L: Fn(usize, usize) -> bool,
{
    fn apply(&self, cards: Vec<Card>) -> Result<Vec<Card>, DeckError> {
        let less = (self.0)(&cards);
        let mut order: Vec<usize> = (0..cards.len()).collect();
        order.sort_by(|&i, &j| {
            if less(i, j) {
                Ordering::Less
            } else if less(j, i) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        Ok(order.into_iter().map(|i| cards[i]).collect())
    }

    fn name(&self) -> &'static str {
        "sort"
    }
}

/// Sorts with a custom ordering.
///
/// `factory` sees the sequence being sorted and returns a predicate over
/// positions in it. Positions that compare neither way keep their relative
/// order.
///
/// # Example
///
/// ```
/// use cardstack::{Card, Rank, Suit, build_deck, sort};
///
/// // Rank first, then suit.
/// let by_rank = sort(|cards: &[Card]| {
///     let cards = cards.to_vec();
///     move |i: usize, j: usize| (cards[i].rank(), cards[i].suit()) < (cards[j].rank(), cards[j].suit())
/// });
/// let deck = build_deck(&[&by_rank]).unwrap();
/// assert_eq!(deck[1], Card::new(Suit::Diamond, Rank::Ace));
/// ```
#[must_use]
pub const fn sort<F, L>(factory: F) -> Sort<F>
where
    F: Fn(&[Card]) -> L,
    L: Fn(usize, usize) -> bool,
{
    Sort(factory)
}

/// Stable sort driven by a card comparator.
#[derive(Debug, Clone, Copy)]
pub struct SortBy<C>(C);

impl<C> Transform for SortBy<C>
where
    C: Fn(&Card, &Card) -> Ordering,
{
    fn apply(&self, mut cards: Vec<Card>) -> Result<Vec<Card>, DeckError> {
        cards.sort_by(&self.0);
        Ok(cards)
    }

    fn name(&self) -> &'static str {
        "sort_by"
    }
}

/// Sorts with a comparator over cards.
#[must_use]
pub const fn sort_by<C>(compare: C) -> SortBy<C>
where
    C: Fn(&Card, &Card) -> Ordering,
{
    SortBy(compare)
}
