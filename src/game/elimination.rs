use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::deck::RandomSource;
use crate::ranking;

use super::{Game, PlayerId};

impl<R: RandomSource> Game<R> {
    /// Compares neighbouring active players left to right and removes each loser.
    ///
    /// After a removal the cursor stays put, so the survivor meets its new
    /// neighbour. Players are only ever compared with an adjacent survivor,
    /// never with everyone, which makes the result depend on seating order.
    ///
    /// Returns the eliminated players in elimination order.
    pub(super) fn eliminate_losers(&mut self) -> Vec<PlayerId> {
        let mut eliminated = Vec::new();
        let mut i = 0;

        while i + 1 < self.active.len() {
            let (left, right) = (self.active[i], self.active[i + 1]);
            let result = match (self.hands.get(&left), self.hands.get(&right)) {
                (Some(left_hand), Some(right_hand)) => ranking::compare(left_hand, right_hand),
                _ => Ordering::Equal,
            };
            tracing::debug!(left, right, ?result, "compared hands");

            let loser = match result {
                Ordering::Less => self.active.remove(i),
                Ordering::Greater => self.active.remove(i + 1),
                Ordering::Equal => {
                    i += 1;
                    continue;
                }
            };
            tracing::info!(player = loser, round = self.round, "player lost");
            eliminated.push(loser);
        }

        eliminated
    }
}
