//! Game state types.

use core::fmt;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No card has been dealt yet.
    NotStarted,
    /// The initial deal is next.
    Dealing,
    /// More than one player survived the last elimination pass.
    Tied,
    /// The deck ran out during a tie-break round.
    TieUnbreakable,
    /// A single player remains.
    Finished,
}

impl GameState {
    /// Returns whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::TieUnbreakable | Self::Finished)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::Dealing => "Dealing",
            Self::Tied => "Tied",
            Self::TieUnbreakable => "Impossible to break tie",
            Self::Finished => "Finished",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game status: {}", self.label())
    }
}
