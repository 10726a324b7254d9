//! Read-only snapshots for renderers.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{GameState, Phase};
use crate::hand::Hand;
use crate::result::Outcome;

/// How a card is shown on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CardFace {
    /// Face up.
    Up(Card),
    /// Face down (the dealer's hole card).
    Down,
}

impl CardFace {
    /// Returns the card if it is face up.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Up(card) => Some(*card),
            Self::Down => None,
        }
    }
}

/// Everything a presentation layer needs to draw a round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableView {
    /// Player's cards, all face up.
    pub player_cards: Vec<Card>,
    /// Player's best total.
    pub player_total: u8,
    /// Dealer's cards, the hole card face down until the dealer's turn.
    pub dealer_cards: Vec<CardFace>,
    /// Best total of the dealer's face-up cards.
    pub dealer_total: u8,
    /// Current phase.
    pub phase: Phase,
    /// Outcome once resolved.
    pub outcome: Option<Outcome>,
    /// Whether Hit and Stand should be offered.
    pub can_act: bool,
    /// Status line: a prompt while playing, the outcome text once resolved.
    pub message: &'static str,
}

impl GameState {
    /// Returns a snapshot of the round with the hole card hidden as needed.
    #[must_use]
    pub fn view(&self) -> TableView {
        let revealed = self.is_hole_revealed();
        let dealer = self.dealer_hand();

        let dealer_cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if i == 1 && !revealed {
                    CardFace::Down
                } else {
                    CardFace::Up(*card)
                }
            })
            .collect::<Vec<_>>();
        let dealer_total = dealer_cards
            .iter()
            .filter_map(CardFace::card)
            .collect::<Hand>()
            .best_total();

        TableView {
            player_cards: self.player_hand().cards().to_vec(),
            player_total: self.player_hand().best_total(),
            dealer_cards,
            dealer_total,
            phase: self.phase(),
            outcome: self.outcome(),
            can_act: self.can_act(),
            message: self.message(),
        }
    }
}
