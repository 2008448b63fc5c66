//! An elimination card game engine with optional `no_std` support.
//!
//! A shared deck of twelve ranks, four copies each, deals three cards to every
//! player. Neighbouring players are compared and losers leave the table. If
//! more than one player survives, the survivors' hands are cleared and each
//! gets one fresh card, until a single winner remains or the deck runs out.
//!
//! The crate provides a [`Game`] type that runs this state machine, a
//! [`ranking`] module with the hand comparator, and a [`GameObserver`] hook
//! for presenting the game.
//!
//! # Example
//!
//! ```
//! use elimdeck::{Game, Outcome};
//!
//! let mut game = Game::new([1, 2, 3, 4], 42).unwrap();
//! match game.play(&mut ()).unwrap() {
//!     Outcome::Winner(id) => assert!(game.players().contains(&id)),
//!     Outcome::UnbreakableTie(ids) => assert!(ids.len() > 1),
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod observer;
pub mod options;
pub mod ranking;
pub mod result;

// Re-export main types
pub use card::{COPIES_PER_RANK, Card, DECK_SIZE, RANK_COUNT, Rank};
pub use deck::{Deck, RandomSource, ScriptedSource};
pub use error::{DeckExhausted, PlayError, SetupError};
pub use game::{Game, GameState, PlayerId};
pub use hand::{Hand, HandSnapshot};
pub use observer::GameObserver;
pub use options::GameOptions;
pub use result::{Outcome, RoundKind, RoundReport};
