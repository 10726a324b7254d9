//! Session registry for hosting many rounds at once.

extern crate alloc;

use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, Ordering};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::error::SessionError;
use crate::game::GameState;
use crate::options::GameOptions;
use crate::result::Outcome;
use crate::sync::Mutex;
use crate::view::TableView;

/// Identifier of a table session.
pub type SessionId = u32;

/// A table that hosts one round per session.
///
/// Every session owns its own [`GameState`]; the table only serializes access
/// so a network-facing presentation layer can share it between handlers.
///
/// # Example
///
/// ```
/// use bjrules::{GameOptions, Table};
///
/// let table = Table::new(GameOptions::default(), 42);
/// let session = table.open().unwrap();
/// let view = table.view(session).unwrap();
/// assert_eq!(view.player_cards.len(), 2);
/// ```
pub struct Table {
    /// Options applied to every round.
    options: GameOptions,
    /// Next session ID to assign.
    next_id: AtomicU32,
    /// Active rounds (`session_id` -> round).
    sessions: Mutex<HashMap<SessionId, GameState>>,
    /// Seeds each new round's deck.
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a new table with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            next_id: AtomicU32::new(0),
            sessions: Mutex::new(HashMap::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the options applied to every round.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    fn deal_round(&self) -> Result<GameState, SessionError> {
        let seed = self.rng.with(|rng| rng.random::<u64>());
        Ok(GameState::new(self.options, seed)?)
    }

    /// Opens a session and deals its first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be dealt.
    pub fn open(&self) -> Result<SessionId, SessionError> {
        let round = self.deal_round()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.sessions.with(|sessions| sessions.insert(id, round));
        log::debug!("opened session {id}");
        Ok(id)
    }

    /// Closes a session, discarding its round.
    ///
    /// Returns `false` if the session did not exist.
    pub fn close(&self, session: SessionId) -> bool {
        let closed = self.sessions.with(|sessions| sessions.remove(&session).is_some());
        if closed {
            log::debug!("closed session {session}");
        }
        closed
    }

    /// Returns the number of open sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.with(|sessions| sessions.len())
    }

    /// Returns the IDs of all open sessions.
    pub fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.with(|sessions| sessions.keys().copied().collect())
    }

    /// Replaces the session's round with a freshly dealt one.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or the round cannot be
    /// dealt.
    pub fn new_round(&self, session: SessionId) -> Result<TableView, SessionError> {
        let round = self.deal_round()?;
        let view = round.view();
        self.with_round(session, |slot| {
            *slot = round;
            Ok(view)
        })
    }

    /// Applies a Hit to the session's round.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or the round rejects the
    /// action.
    pub fn hit(&self, session: SessionId) -> Result<Card, SessionError> {
        self.with_round(session, |round| Ok(round.hit()?))
    }

    /// Applies a Stand to the session's round and plays out the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or the round rejects the
    /// action.
    pub fn stand(&self, session: SessionId) -> Result<Option<Outcome>, SessionError> {
        self.with_round(session, |round| {
            round.stand()?;
            Ok(round.outcome())
        })
    }

    /// Returns a snapshot of the session's round.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist.
    pub fn view(&self, session: SessionId) -> Result<TableView, SessionError> {
        self.with_round(session, |round| Ok(round.view()))
    }

    fn with_round<T>(
        &self,
        session: SessionId,
        f: impl FnOnce(&mut GameState) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        self.sessions.with(|sessions| {
            let round = sessions
                .get_mut(&session)
                .ok_or(SessionError::NotFound(session))?;
            f(round)
        })
    }
}
