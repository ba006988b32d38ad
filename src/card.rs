//! Card types and ordering.

use core::cmp::Ordering;
use core::fmt;

use crate::error::DeckError;

/// Card suit, in canonical deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
}

impl Suit {
    /// The four suits in the order the base deck is generated.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the zero-based position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Suit {
    type Error = DeckError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(DeckError::InvalidSuit(index))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
        })
    }
}

/// Card rank (Ace is low).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

impl Rank {
    /// All ranks, Ace through King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric rank (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = DeckError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Self::ALL[value as usize - 1]),
            _ => Err(DeckError::InvalidRank(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        })
    }
}

/// A playing card.
///
/// Jokers carry a distinguishing index instead of a suit and rank. The index
/// only tells jokers apart; two jokers with the same index compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// One of the 52 standard cards.
    Standard {
        /// The suit of the card.
        suit: Suit,
        /// The rank of the card.
        rank: Rank,
    },
    /// A joker.
    Joker {
        /// Position of the joker within the batch that added it.
        index: usize,
    },
}

impl Card {
    /// Creates a standard card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self::Standard { suit, rank }
    }

    /// Creates a joker with the given index.
    #[must_use]
    pub const fn joker(index: usize) -> Self {
        Self::Joker { index }
    }

    /// Returns the suit, or `None` for a joker.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Self::Standard { suit, .. } => Some(*suit),
            Self::Joker { .. } => None,
        }
    }

    /// Returns the rank, or `None` for a joker.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Self::Standard { rank, .. } => Some(*rank),
            Self::Joker { .. } => None,
        }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker { .. })
    }

    /// Returns the canonical sort key: `suit index * 13 + rank`.
    ///
    /// All spades sort before all diamonds, then clubs, then hearts, with
    /// ascending rank inside a suit. Jokers take the slot after hearts, as if
    /// their index were a rank counted from one, and sort by index.
    #[must_use]
    pub const fn order_key(&self) -> usize {
        match self {
            Self::Standard { suit, rank } => {
                suit.index() as usize * MAX_RANK as usize + rank.value() as usize
            }
            Self::Joker { index } => {
                (Suit::ALL.len() * MAX_RANK as usize + 1).saturating_add(*index)
            }
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard { suit, rank } => write!(f, "{rank} of {suit}s"),
            Self::Joker { .. } => f.write_str("Joker"),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Highest rank value (King).
pub const MAX_RANK: u8 = 13;
