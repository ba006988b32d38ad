//! Declarative deck configuration.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::deck::DeckBuilder;
use crate::error::DeckError;
use crate::shuffle::{self, Shuffler};
use crate::transform::{decks, filter, jokers, shuffle_with};

/// Configuration for a common deck layout.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardstack::{DeckOptions, Rank};
///
/// let options = DeckOptions::default()
///     .with_decks(2)
///     .with_jokers(4)
///     .without_ranks(&[Rank::Two, Rank::Three])
///     .with_seed(11);
/// assert_eq!(options.build().unwrap().len(), 2 * 44 + 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of standard decks combined.
    pub decks: usize,
    /// Number of jokers appended after the standard cards.
    pub jokers: usize,
    /// Ranks removed from every deck.
    pub excluded_ranks: Vec<Rank>,
    /// Whether the final deck is shuffled.
    pub shuffle: bool,
    /// Seed for the shuffle. `None` draws from the shared source.
    pub seed: Option<u64>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            excluded_ranks: Vec::new(),
            shuffle: false,
            seed: None,
        }
    }
}

impl DeckOptions {
    /// Sets the number of combined decks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: usize) -> Self {
        self.jokers = jokers;
        self
    }

    /// Removes the given ranks from the deck.
    #[must_use]
    pub fn without_ranks(mut self, ranks: &[Rank]) -> Self {
        self.excluded_ranks.extend_from_slice(ranks);
        self
    }

    /// Sets whether the deck is shuffled.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Shuffles with a fixed seed, making the result reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_seed(5);
    /// assert!(options.shuffle);
    /// assert_eq!(options.build().unwrap(), options.build().unwrap());
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.shuffle = true;
        self.seed = Some(seed);
        self
    }

    /// Builds the configured deck.
    ///
    /// Steps run as: combine decks, remove excluded ranks, append jokers,
    /// shuffle.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TooManyCards`] if the combined deck length
    /// overflows.
    pub fn build(&self) -> Result<Vec<Card>, DeckError> {
        let seeded = self.seed.map(Shuffler::from_seed);
        let shuffler = match &seeded {
            Some(seeded) => seeded,
            None => shuffle::shared(),
        };

        let excluded = self.excluded_ranks.as_slice();
        let mut builder = DeckBuilder::new().with(decks(self.decks));
        if !excluded.is_empty() {
            builder.push(filter(move |card: &Card| {
                card.rank().is_some_and(|rank| excluded.contains(&rank))
            }));
        }
        builder.push(jokers(self.jokers));
        if self.shuffle {
            builder.push(shuffle_with(shuffler));
        }

        builder.build()
    }
}
