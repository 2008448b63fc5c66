//! Card types and deck constants.

use core::cmp::Ordering;
use core::fmt;

/// Card rank.
///
/// Ids run from the strongest rank (`Ace`, id 0) to the weakest (`Two`,
/// id 11). Ranks order by strength, so `Rank::Ace` is the greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// King.
    King,
    /// Queen.
    Queen,
    /// Ten.
    Ten,
    /// Nine.
    Nine,
    /// Eight.
    Eight,
    /// Seven.
    Seven,
    /// Six.
    Six,
    /// Five.
    Five,
    /// Four.
    Four,
    /// Three.
    Three,
    /// Two.
    Two,
}

impl Rank {
    /// All ranks in id order.
    pub const ALL: [Self; RANK_COUNT] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// Returns the rank with the given id, or `None` if `id` is not in `0..12`.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        if (id as usize) < RANK_COUNT {
            Some(Self::ALL[id as usize])
        } else {
            None
        }
    }

    /// Returns the rank id (0 for Ace through 11 for Two).
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Returns the strength of the rank, from 1 for Two to 12 for Ace.
    #[must_use]
    pub const fn value(self) -> u8 {
        RANK_COUNT as u8 - self.id()
    }

    /// Returns the display text of the rank.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::King => "K",
            Self::Queen => "Q",
            Self::Ten => "10",
            Self::Nine => "9",
            Self::Eight => "8",
            Self::Seven => "7",
            Self::Six => "6",
            Self::Five => "5",
            Self::Four => "4",
            Self::Three => "3",
            Self::Two => "2",
        }
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A playing card.
///
/// Copies of the same rank are indistinguishable, so a card is fully
/// described by its rank id and display text. Ordering compares the rank
/// first, then the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    text: &'static str,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: Cards in play come from [`Deck::draw`](crate::Deck::draw); building
    /// one directly does not consume a copy from any deck.
    #[must_use]
    pub const fn new(rank: Rank) -> Self {
        Self {
            rank,
            text: rank.text(),
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the rank id of the card.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.rank.id()
    }

    /// Returns the display text of the card.
    #[must_use]
    pub const fn text(&self) -> &'static str {
        self.text
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Number of distinct ranks.
pub const RANK_COUNT: usize = 12;

/// Number of copies of each rank in a fresh deck.
pub const COPIES_PER_RANK: u8 = 4;

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = RANK_COUNT * COPIES_PER_RANK as usize;
