//! Player hands.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, RANK_COUNT, Rank};

/// A value view of a hand: cards grouped by rank id, in draw order.
///
/// Snapshots compare lexicographically group by group, starting from the Ace
/// group. Within a group a longer run compares greater, so the hand holding
/// more copies of the highest differing rank is the greater one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandSnapshot {
    groups: [Vec<Card>; RANK_COUNT],
}

impl HandSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            groups: [const { Vec::new() }; RANK_COUNT],
        }
    }

    /// Returns the cards held of `rank`.
    #[must_use]
    pub fn group(&self, rank: Rank) -> &[Card] {
        &self.groups[rank.id() as usize]
    }

    /// Returns the number of cards held per rank id.
    #[must_use]
    pub fn counts(&self) -> [usize; RANK_COUNT] {
        core::array::from_fn(|id| self.groups[id].len())
    }

    /// Returns the size of the largest rank group.
    #[must_use]
    pub fn largest_group(&self) -> usize {
        self.groups.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns all cards grouped by rank id.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.groups.iter().flatten()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Returns whether the snapshot holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }
}

impl Default for HandSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Card> for HandSnapshot {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for card in iter {
            snapshot.groups[card.id() as usize].push(card);
        }
        snapshot
    }
}

impl fmt::Display for HandSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// A player's hand.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: HandSnapshot,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: HandSnapshot::new(),
        }
    }

    /// Adds a card to the group of its rank.
    pub fn add_card(&mut self, card: Card) {
        self.cards.groups[card.id() as usize].push(card);
    }

    /// Clears all cards.
    pub fn reset(&mut self) {
        for group in &mut self.cards.groups {
            group.clear();
        }
    }

    /// Returns a value view of the hand.
    #[must_use]
    pub const fn snapshot(&self) -> &HandSnapshot {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cards, f)
    }
}
