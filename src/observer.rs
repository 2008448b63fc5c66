//! Hooks for presenting a game as it is played.

use crate::result::{Outcome, RoundReport};

/// Receives game progress. Every method defaults to doing nothing.
pub trait GameObserver {
    /// Called after every dealing cycle, including one cut short by an empty deck.
    fn round_played(&mut self, report: &RoundReport) {
        let _ = report;
    }

    /// Called once when the game reaches a terminal state.
    fn game_over(&mut self, outcome: &Outcome) {
        let _ = outcome;
    }
}

impl GameObserver for () {}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn round_played(&mut self, report: &RoundReport) {
        (**self).round_played(report);
    }

    fn game_over(&mut self, outcome: &Outcome) {
        (**self).game_over(outcome);
    }
}
