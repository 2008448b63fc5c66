//! Round reports and final outcomes.

extern crate alloc;

use alloc::vec::Vec;

use crate::game::{GameState, PlayerId};
use crate::hand::HandSnapshot;

/// Kind of dealing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundKind {
    /// The initial deal.
    Deal,
    /// A tie-break round dealt on cleared hands.
    TieBreak,
}

/// Report of a single dealing cycle and the elimination pass that followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number, starting at 1 for the initial deal.
    pub round: u32,
    /// Kind of the round.
    pub kind: RoundKind,
    /// Hands of the players who took part, in table order.
    pub hands: Vec<(PlayerId, HandSnapshot)>,
    /// Players eliminated in this round, in elimination order.
    pub eliminated: Vec<PlayerId>,
    /// State the game entered after the round.
    pub state: GameState,
}

/// Final standing of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single player remains.
    Winner(PlayerId),
    /// The deck ran out while several players were still tied.
    UnbreakableTie(Vec<PlayerId>),
}

impl Outcome {
    /// Returns the winner, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        match self {
            Self::Winner(id) => Some(*id),
            Self::UnbreakableTie(_) => None,
        }
    }
}
