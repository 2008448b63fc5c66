//! The shared deck and its randomness source.

use alloc::vec::Vec;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::{COPIES_PER_RANK, Card, RANK_COUNT, Rank};
use crate::error::DeckExhausted;

/// Picks which of the currently available ranks is drawn next.
pub trait RandomSource {
    /// Returns an index in `0..n`. Called once per draw with `n >= 1`.
    fn next_available_index(&mut self, n: usize) -> usize;
}

impl RandomSource for ChaCha8Rng {
    fn next_available_index(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_available_index(&mut self, n: usize) -> usize {
        (**self).next_available_index(n)
    }
}

/// A randomness source that replays a fixed list of indices.
///
/// Each index is reduced modulo the number of available ranks. Once the
/// script is used up every further draw picks index 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedSource {
    /// Creates a source that replays `script` in order.
    #[must_use]
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            position: 0,
        }
    }

    /// Returns how many scripted indices have not been used yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.position)
    }
}

impl RandomSource for ScriptedSource {
    fn next_available_index(&mut self, n: usize) -> usize {
        let index = self.script.get(self.position).copied().unwrap_or(0);
        self.position += 1;
        index % n
    }
}

/// The remaining card inventory.
///
/// Draws pick uniformly among the ranks that still have copies left, not
/// among the remaining cards, so a rank with one copy left is as likely as a
/// rank with four.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining copies per rank id.
    remaining: [u8; RANK_COUNT],
    /// Ranks with at least one copy left, in rank id order.
    available: Vec<Rank>,
}

impl Deck {
    /// Creates a full deck: four copies of each of the twelve ranks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            remaining: [COPIES_PER_RANK; RANK_COUNT],
            available: Rank::ALL.to_vec(),
        }
    }

    /// Draws a card.
    ///
    /// The index picked by `source` is reduced modulo the number of
    /// available ranks.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if no rank is left.
    pub fn draw<R: RandomSource + ?Sized>(
        &mut self,
        source: &mut R,
    ) -> Result<Card, DeckExhausted> {
        if self.available.is_empty() {
            return Err(DeckExhausted);
        }

        // Out-of-range picks wrap around.
        let index = source.next_available_index(self.available.len()) % self.available.len();
        let rank = self.available[index];
        let count = &mut self.remaining[rank.id() as usize];
        *count -= 1;
        if *count == 0 {
            self.available.remove(index);
        }

        tracing::debug!(rank = %rank, left = *count, "drew card");
        Ok(Card::new(rank))
    }

    /// Returns the remaining copies of `rank`.
    #[must_use]
    pub const fn remaining(&self, rank: Rank) -> u8 {
        self.remaining[rank.id() as usize]
    }

    /// Returns whether `rank` can still be drawn.
    #[must_use]
    pub fn is_available(&self, rank: Rank) -> bool {
        self.available.contains(&rank)
    }

    /// Returns the ranks that can still be drawn, in rank id order.
    #[must_use]
    pub fn available_ranks(&self) -> &[Rank] {
        &self.available
    }

    /// Returns the total number of cards left.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.remaining.iter().map(|&count| count as usize).sum()
    }

    /// Returns whether no rank is left to draw.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.available.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
