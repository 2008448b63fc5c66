//! Game engine and state management.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::DECK_SIZE;
use crate::deck::{Deck, RandomSource};
use crate::error::{PlayError, SetupError};
use crate::hand::Hand;
use crate::observer::GameObserver;
use crate::options::GameOptions;
use crate::result::Outcome;

mod dealing;
mod elimination;
pub mod state;

pub use state::GameState;

/// Identifier of a player at the table.
pub type PlayerId = u32;

/// An elimination game engine that deals, compares, and eliminates players.
///
/// The game owns the deck, every player's hand, and the ordered list of
/// players still in the game. Use [`GameOptions`] to configure how many cards
/// are dealt, and [`Game::with_source`] to replace the random draw order.
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    options: GameOptions,
    /// Remaining cards.
    deck: Deck,
    /// Player hands (`player_id` -> hand). Eliminated players keep their last hand.
    hands: HashMap<PlayerId, Hand>,
    /// Every player, in table order.
    players: Vec<PlayerId>,
    /// Players still in the game, in table order.
    active: Vec<PlayerId>,
    /// Current game state.
    state: GameState,
    /// Number of dealing cycles played so far.
    round: u32,
    /// Final standing, once the game has ended.
    outcome: Option<Outcome>,
    /// Source of draw order.
    rng: R,
}

impl Game {
    /// Creates a new game with default options and the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is invalid; see [`Game::with_source`].
    ///
    /// # Example
    ///
    /// ```
    /// use elimdeck::Game;
    ///
    /// let mut game = Game::new([1, 2, 3], 42).unwrap();
    /// let outcome = game.play(&mut ()).unwrap();
    /// let _ = outcome;
    /// ```
    pub fn new(
        players: impl IntoIterator<Item = PlayerId>,
        seed: u64,
    ) -> Result<Self, SetupError> {
        Self::with_options(players, GameOptions::default(), seed)
    }

    /// Creates a new game with the given options and seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster or options are invalid; see
    /// [`Game::with_source`].
    pub fn with_options(
        players: impl IntoIterator<Item = PlayerId>,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, SetupError> {
        Self::with_source(players, options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Creates a new game drawing cards in the order picked by `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two players, the initial deal
    /// needs more cards than the deck holds, a player id is repeated, or
    /// tie-break rounds are configured to deal no cards.
    pub fn with_source(
        players: impl IntoIterator<Item = PlayerId>,
        options: GameOptions,
        source: R,
    ) -> Result<Self, SetupError> {
        let players: Vec<PlayerId> = players.into_iter().collect();

        if players.len() < 2 {
            return Err(SetupError::TooFewPlayers);
        }
        if players.len() * usize::from(options.initial_cards) > DECK_SIZE {
            return Err(SetupError::TooManyPlayers);
        }
        if options.tie_break_cards == 0 {
            return Err(SetupError::NoTieBreakCards);
        }

        let mut hands = HashMap::with_capacity(players.len());
        for &id in &players {
            if hands.insert(id, Hand::new()).is_some() {
                return Err(SetupError::DuplicatePlayer(id));
            }
        }

        Ok(Self {
            options,
            deck: Deck::new(),
            hands,
            active: players.clone(),
            players,
            state: GameState::NotStarted,
            round: 0,
            outcome: None,
            rng: source,
        })
    }

    /// Advances the game by one transition and returns the new state.
    ///
    /// Starting moves to [`GameState::Dealing`] without drawing. From there
    /// each step plays the initial deal or one tie-break round, followed by
    /// an elimination pass. The observer hears about every round and, once,
    /// about the final outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already ended, or if the deck runs
    /// out during the initial deal.
    pub fn step<O: GameObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<GameState, PlayError> {
        match self.state {
            GameState::NotStarted => self.transition(GameState::Dealing),
            GameState::Dealing => self.play_initial_deal(observer)?,
            GameState::Tied => self.play_tie_break(observer),
            GameState::TieUnbreakable | GameState::Finished => {
                return Err(PlayError::InvalidState);
            }
        }

        if self.state.is_terminal() {
            let outcome = self.conclude();
            observer.game_over(&outcome);
        }

        Ok(self.state)
    }

    /// Plays the game to the end and returns the final standing.
    ///
    /// Calling this on a game that has already ended returns the same
    /// outcome without notifying the observer again.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out during the initial deal.
    pub fn play<O: GameObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<Outcome, PlayError> {
        loop {
            if let Some(outcome) = &self.outcome {
                return Ok(outcome.clone());
            }
            self.step(observer)?;
        }
    }

    fn transition(&mut self, next: GameState) {
        tracing::info!(from = %self.state, to = %next, round = self.round, "state changed");
        self.state = next;
    }

    fn conclude(&mut self) -> Outcome {
        let outcome = match (self.state, self.active.as_slice()) {
            (GameState::Finished, &[winner]) => Outcome::Winner(winner),
            _ => Outcome::UnbreakableTie(self.active.clone()),
        };
        tracing::info!(?outcome, rounds = self.round, "game over");
        self.outcome = Some(outcome.clone());
        outcome
    }
}

impl<R> Game<R> {
    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns every player, in table order.
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Returns the players still in the game, in table order.
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    /// Returns whether the player is still in the game.
    pub fn is_active(&self, player_id: PlayerId) -> bool {
        self.active.contains(&player_id)
    }

    /// Returns the player's hand.
    ///
    /// Eliminated players keep the hand they lost with. Returns `None` if
    /// the player ID is not found.
    pub fn hand(&self, player_id: PlayerId) -> Option<&Hand> {
        self.hands.get(&player_id)
    }

    /// Returns the deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of dealing cycles played so far.
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the final standing once the game has ended.
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Returns the winner once the game has finished with one.
    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome.as_ref().and_then(Outcome::winner)
    }
}
