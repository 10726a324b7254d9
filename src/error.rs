//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;
use crate::game::{Action, Phase};
use crate::table::SessionId;

/// An action was requested in a phase that does not allow it.
///
/// Presentation layers are expected to offer only legal actions, so this
/// signals a caller bug rather than a user mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {action} during {phase}")]
pub struct InvalidActionError {
    /// The attempted action.
    pub action: Action,
    /// The phase the round was in.
    pub phase: Phase,
}

/// A draw was attempted on a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Action not legal in the current phase.
    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),
    /// Deck ran out with reshuffling disabled.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur when building cards or stacked decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside 1..=13.
    #[error("invalid rank {0}")]
    InvalidRank(u8),
    /// Card index outside 0..52.
    #[error("invalid card index {0}")]
    InvalidIndex(u8),
    /// The same card was given twice for one deck.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// More cards than one deck holds.
    #[error("{0} cards exceed a single deck")]
    TooManyCards(usize),
}

/// Errors that can occur when driving a table session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Session not found.
    #[error("session {0} not found")]
    NotFound(SessionId),
    /// The round rejected the request.
    #[error(transparent)]
    Game(#[from] GameError),
}
