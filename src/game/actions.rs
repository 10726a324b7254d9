extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::GameError;
use crate::hand::BLACKJACK;
use crate::result::Outcome;

use super::{Action, GameState, Phase};

impl GameState {
    /// Player action: Hit (draw a card).
    ///
    /// A bust resolves the round at once without playing the dealer. With
    /// [`auto_stand_on_21`](crate::GameOptions::auto_stand_on_21) set,
    /// reaching exactly 21 stands and plays the dealer.
    ///
    /// Returns the card drawn.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidAction`] outside [`Phase::PlayerTurn`], or
    /// [`GameError::EmptyDeck`] if the deck runs out with reshuffling
    /// disabled.
    pub fn hit(&mut self) -> Result<Card, GameError> {
        self.ensure_phase(Phase::PlayerTurn, Action::Hit)?;

        let card = self.draw()?;
        self.player.add_card(card);
        let total = self.player.best_total();
        log::debug!("player hits {card}, total {total}");

        if self.player.is_bust() {
            self.resolve(Outcome::PlayerBust);
        } else if total == BLACKJACK && self.options.auto_stand_on_21 {
            self.phase = Phase::DealerTurn;
            self.dealer_play()?;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Hands the round to the dealer, who plays out immediately. Returns the
    /// cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidAction`] outside [`Phase::PlayerTurn`], or
    /// [`GameError::EmptyDeck`] if the deck runs out with reshuffling
    /// disabled.
    pub fn stand(&mut self) -> Result<Vec<Card>, GameError> {
        self.ensure_phase(Phase::PlayerTurn, Action::Stand)?;

        log::debug!("player stands on {}", self.player.best_total());
        self.phase = Phase::DealerTurn;
        self.dealer_play()
    }
}
