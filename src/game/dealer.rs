extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::GameError;
use crate::result::Outcome;

use super::{Action, GameState, Phase};

impl GameState {
    /// Whether the dealer has to take another card.
    fn dealer_must_draw(&self) -> bool {
        let value = self.dealer.best_total();
        let stands_on = self.options.dealer_stands_on;

        if value < stands_on {
            return true;
        }
        value == stands_on && self.dealer.is_soft() && !self.options.stand_on_soft_17
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or higher,
    /// then the round is resolved. [`GameState::stand`] calls this for you.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidAction`] outside [`Phase::DealerTurn`], or
    /// [`GameError::EmptyDeck`] if the deck runs out with reshuffling
    /// disabled.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, GameError> {
        self.ensure_phase(Phase::DealerTurn, Action::DealerPlay)?;

        if let Some(hole) = self.dealer.cards().get(1) {
            log::debug!("dealer reveals {hole}, total {}", self.dealer.best_total());
        }

        let mut drawn_cards = Vec::new();
        while self.dealer_must_draw() {
            let card = self.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
            log::debug!("dealer draws {card}, total {}", self.dealer.best_total());
        }

        let outcome = if self.dealer.is_bust() {
            Outcome::DealerBust
        } else {
            Outcome::compare(self.player.best_total(), self.dealer.best_total())
        };
        self.resolve(outcome);

        Ok(drawn_cards)
    }
}
