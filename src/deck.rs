//! Deck construction.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::transform::Transform;

/// Returns the 52 standard cards, suit-major with ascending rank.
///
/// Suits come in [`Suit::ALL`] order, so the first card is the Ace of Spades
/// and the last is the King of Hearts.
#[must_use]
pub fn base_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Builds the base deck and threads it through `transforms` in order.
///
/// # Errors
///
/// Returns the first error raised by a transform. No partial deck is
/// returned.
///
/// # Example
///
/// ```
/// use cardstack::{build_deck, decks, jokers};
///
/// let cards = build_deck(&[&decks(2), &jokers(2)]).unwrap();
/// assert_eq!(cards.len(), 106);
/// ```
pub fn build_deck(transforms: &[&dyn Transform]) -> Result<Vec<Card>, DeckError> {
    run(transforms.iter().copied())
}

fn run<'t, I>(transforms: I) -> Result<Vec<Card>, DeckError>
where
    I: ExactSizeIterator<Item = &'t dyn Transform>,
{
    log::debug!("building deck with {} transforms", transforms.len());

    let cards = transforms
        .enumerate()
        .try_fold(base_deck(), |cards, (step, transform)| {
            let before = cards.len();
            let cards = transform.apply(cards).inspect_err(|err| {
                log::debug!("transform {step} ({}) failed: {err}", transform.name());
            })?;
            log::trace!(
                "transform {step} ({}): {before} -> {} cards",
                transform.name(),
                cards.len()
            );
            Ok(cards)
        })?;

    log::debug!("deck built with {} cards", cards.len());
    Ok(cards)
}

/// An owned, reusable pipeline of transforms.
///
/// # Example
///
/// ```
/// use cardstack::{DeckBuilder, Shuffler, default_sort, shuffle_with};
///
/// let shuffler = Shuffler::from_seed(9);
/// let builder = DeckBuilder::new()
///     .with(shuffle_with(&shuffler))
///     .with(default_sort());
/// assert_eq!(builder.build().unwrap(), cardstack::base_deck());
/// ```
#[derive(Default)]
pub struct DeckBuilder<'a> {
    transforms: Vec<Box<dyn Transform + 'a>>,
}

impl<'a> DeckBuilder<'a> {
    /// Creates a builder with no transforms.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Appends a transform to the pipeline.
    #[must_use]
    pub fn with<T>(mut self, transform: T) -> Self
    where
        T: Transform + 'a,
    {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Appends a transform in place.
    pub fn push<T>(&mut self, transform: T)
    where
        T: Transform + 'a,
    {
        self.transforms.push(Box::new(transform));
    }

    /// Returns the number of transforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns whether the pipeline has no transforms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Builds a fresh deck through the pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a transform.
    pub fn build(&self) -> Result<Vec<Card>, DeckError> {
        run(self.transforms.iter().map(|transform| &**transform as &dyn Transform))
    }
}

impl core::fmt::Debug for DeckBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.transforms.iter().map(|transform| transform.name()))
            .finish()
    }
}
