use alloc::vec::Vec;

use crate::deck::RandomSource;
use crate::error::{DeckExhausted, PlayError};
use crate::hand::HandSnapshot;
use crate::observer::GameObserver;
use crate::result::{RoundKind, RoundReport};

use super::{Game, GameState, PlayerId};

impl<R: RandomSource> Game<R> {
    /// Deals one card to every active player, in table order.
    fn deal_cycle(&mut self) -> Result<(), DeckExhausted> {
        for id in &self.active {
            let card = self.deck.draw(&mut self.rng)?;
            if let Some(hand) = self.hands.get_mut(id) {
                hand.add_card(card);
            }
        }
        Ok(())
    }

    fn reset_active_hands(&mut self) {
        for id in &self.active {
            if let Some(hand) = self.hands.get_mut(id) {
                hand.reset();
            }
        }
    }

    fn table_snapshot(&self) -> Vec<(PlayerId, HandSnapshot)> {
        self.active
            .iter()
            .filter_map(|id| self.hands.get(id).map(|hand| (*id, hand.snapshot().clone())))
            .collect()
    }

    fn state_after_elimination(&self) -> GameState {
        if self.active.len() > 1 {
            GameState::Tied
        } else {
            GameState::Finished
        }
    }

    /// Deals the initial hands and runs the first elimination pass.
    ///
    /// An empty deck here means the roster was too large for the deck, so it
    /// is reported as an error instead of a tie. The partly dealt hands and
    /// the round counter are rolled back; the drawn cards stay out of the deck.
    pub(super) fn play_initial_deal<O: GameObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<(), PlayError> {
        self.round += 1;
        let dealt = (0..self.options.initial_cards).try_for_each(|_| self.deal_cycle());
        if let Err(err) = dealt {
            tracing::warn!(round = self.round, "deck exhausted during the initial deal");
            self.reset_active_hands();
            self.round -= 1;
            return Err(err.into());
        }

        let hands = self.table_snapshot();
        let eliminated = self.eliminate_losers();
        self.transition(self.state_after_elimination());

        observer.round_played(&RoundReport {
            round: self.round,
            kind: RoundKind::Deal,
            hands,
            eliminated,
            state: self.state,
        });
        Ok(())
    }

    /// Clears the remaining hands, deals fresh cards and runs an elimination pass.
    ///
    /// Running out of cards ends the game as an unbreakable tie.
    pub(super) fn play_tie_break<O: GameObserver + ?Sized>(&mut self, observer: &mut O) {
        self.round += 1;
        self.reset_active_hands();

        let dealt = (0..self.options.tie_break_cards).try_for_each(|_| self.deal_cycle());
        let hands = self.table_snapshot();
        let (eliminated, next) = match dealt {
            Ok(()) => {
                let eliminated = self.eliminate_losers();
                (eliminated, self.state_after_elimination())
            }
            Err(DeckExhausted) => {
                tracing::info!(round = self.round, "deck exhausted during tie-break");
                (Vec::new(), GameState::TieUnbreakable)
            }
        };
        self.transition(next);

        observer.round_played(&RoundReport {
            round: self.round,
            kind: RoundKind::TieBreak,
            hands,
            eliminated,
            state: self.state,
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::card::DECK_SIZE;
    use crate::deck::{Deck, ScriptedSource};
    use crate::error::PlayError;
    use crate::game::{Game, GameState};
    use crate::options::GameOptions;

    #[test]
    fn failed_initial_deal_leaves_no_partial_hands() {
        let mut game =
            Game::with_source([1, 2], GameOptions::default(), ScriptedSource::default()).unwrap();

        // Leave a single card so the first cycle fails on the second player.
        let mut deck = Deck::new();
        let mut source = ScriptedSource::default();
        for _ in 0..DECK_SIZE - 1 {
            deck.draw(&mut source).unwrap();
        }
        game.deck = deck;

        assert_eq!(game.step(&mut ()).unwrap(), GameState::Dealing);
        assert_eq!(game.step(&mut ()).unwrap_err(), PlayError::DeckExhausted);

        assert_eq!(game.state(), GameState::Dealing);
        assert_eq!(game.round(), 0);
        assert!(game.hand(1).unwrap().is_empty());
        assert!(game.hand(2).unwrap().is_empty());
        assert!(game.deck().is_exhausted());
    }
}
