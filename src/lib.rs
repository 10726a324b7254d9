//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`GameState`] type that plays one round against an
//! automated dealer: dealing, hand valuation with soft Aces, the player's
//! Hit/Stand turn, the dealer's stand-on-17 policy, and outcome resolution.
//! Rendering is left to the caller, which reads a [`TableView`] snapshot.
//! [`Table`] hosts one round per session for servers.
//!
//! # Example
//!
//! ```
//! use bjrules::{GameOptions, GameState, Phase};
//!
//! let mut round = GameState::new(GameOptions::default(), 42).unwrap();
//! while round.phase() == Phase::PlayerTurn && round.player_hand().best_total() < 17 {
//!     round.hit().unwrap();
//! }
//! if round.phase() == Phase::PlayerTurn {
//!     round.stand().unwrap();
//! }
//! println!("{}", round.view().message);
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
pub mod options;
pub mod result;
mod sync;
pub mod table;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, EmptyDeckError, GameError, InvalidActionError, SessionError};
pub use game::{Action, GameState, Phase};
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use result::{Outcome, Winner};
pub use table::{SessionId, Table};
pub use view::{CardFace, TableView};
