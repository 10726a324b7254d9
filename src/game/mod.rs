//! Round engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{GameError, InvalidActionError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod state;

pub use state::{Action, Phase};

/// One round of blackjack between the player and the dealer.
///
/// The round owns its deck and both hands. Once it reaches
/// [`Phase::Resolved`] it is finished; start the next round with a new
/// `GameState`.
///
/// # Example
///
/// ```
/// use bjrules::{GameOptions, GameState, Phase};
///
/// let mut round = GameState::new(GameOptions::default(), 42).unwrap();
/// if round.phase() == Phase::PlayerTurn {
///     round.stand().unwrap();
/// }
/// assert_eq!(round.phase(), Phase::Resolved);
/// assert!(round.outcome().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    /// Cards left to draw.
    deck: Deck,
    /// Rule options.
    options: GameOptions,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand; the second card is the hole card.
    dealer: Hand,
    /// Current phase.
    phase: Phase,
    /// Final outcome, set on entering `Resolved`.
    outcome: Option<Outcome>,
}

impl GameState {
    /// Starts a round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Never fails with the default options; see [`GameState::with_deck`].
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, GameError> {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Starts a round dealing from `deck`.
    ///
    /// Deals player, dealer, player, dealer. A natural on either side resolves
    /// the round immediately.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyDeck`] if the deck runs out while dealing and
    /// reshuffling is disabled.
    pub fn with_deck(options: GameOptions, deck: Deck) -> Result<Self, GameError> {
        let mut round = Self {
            deck,
            options,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Dealing,
            outcome: None,
        };
        round.deal()?;
        Ok(round)
    }

    fn deal(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        if let Some(up_card) = self.dealer.up_card() {
            log::debug!(
                "dealt player {} ({}), dealer shows {up_card}",
                CardList(self.player.cards()),
                self.player.best_total(),
            );
        }

        match (self.player.is_blackjack(), self.dealer.is_blackjack()) {
            (true, true) => self.resolve(Outcome::Push),
            (true, false) => self.resolve(Outcome::PlayerBlackjack),
            (false, true) => self.resolve(Outcome::DealerBlackjack),
            (false, false) => self.phase = Phase::PlayerTurn,
        }

        Ok(())
    }

    /// Draws the top card, reshuffling first if the deck is exhausted.
    fn draw(&mut self) -> Result<Card, GameError> {
        if self.deck.is_empty() && self.options.reshuffle_when_empty {
            log::debug!("deck exhausted during {}, reshuffling", self.phase);
            self.deck.shuffle();
        }

        let phase = self.phase;
        self.deck.draw_top().map_err(|err| {
            log::error!("{err} during {phase}");
            GameError::from(err)
        })
    }

    fn ensure_phase(&self, expected: Phase, action: Action) -> Result<(), InvalidActionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(InvalidActionError {
                action,
                phase: self.phase,
            })
        }
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.phase = Phase::Resolved;
        self.outcome = Some(outcome);
        log::info!(
            "round resolved: {outcome:?} (player {}, dealer {})",
            self.player.best_total(),
            self.dealer.best_total()
        );
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, including the hole card.
    ///
    /// Renderers should consult [`GameState::is_hole_revealed`] or use
    /// [`GameState::view`].
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the options this round was started with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the dealer's hole card may be shown.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        matches!(self.phase, Phase::DealerTurn | Phase::Resolved)
    }

    /// Returns whether Hit and Stand are currently legal.
    #[must_use]
    pub const fn can_act(&self) -> bool {
        matches!(self.phase, Phase::PlayerTurn)
    }

    /// Returns the status line for the current phase.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match (self.phase, self.outcome) {
            (_, Some(outcome)) => outcome.message(),
            (Phase::PlayerTurn, None) => "Draw card?",
            (Phase::DealerTurn, None) => "Dealer's turn",
            (_, None) => "Dealing",
        }
    }
}

/// Formats cards separated by spaces.
struct CardList<'a>(&'a [Card]);

impl core::fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
