//! Error types for game operations.

use thiserror::Error;

use crate::game::PlayerId;

/// The deck has no rank left to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no card left in the deck")]
pub struct DeckExhausted;

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Fewer than two players.
    #[error("at least two players are needed")]
    TooFewPlayers,
    /// Not enough cards to deal every player an initial hand.
    #[error("too many players for one deck")]
    TooManyPlayers,
    /// The same player id appears twice in the roster.
    #[error("player {0} is listed more than once")]
    DuplicatePlayer(PlayerId),
    /// Tie-break rounds are configured to deal no cards.
    #[error("tie-break rounds must deal at least one card")]
    NoTieBreakCards,
}

/// Errors that can occur while playing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game has already ended.
    #[error("invalid game state for playing")]
    InvalidState,
    /// The deck ran out during the initial deal.
    #[error("deck exhausted during the initial deal")]
    DeckExhausted,
}

impl From<DeckExhausted> for PlayError {
    fn from(_: DeckExhausted) -> Self {
        Self::DeckExhausted
    }
}
