//! Round outcome types.

use core::fmt;

/// The party that won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Winner {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    /// Player was dealt a natural and the dealer was not.
    PlayerBlackjack,
    /// Dealer was dealt a natural and the player was not.
    DealerBlackjack,
    /// Player went over 21; the dealer hand is not played.
    PlayerBust,
    /// Dealer went over 21 while drawing.
    DealerBust,
    /// Player finished with the higher total.
    PlayerWins,
    /// Dealer finished with the higher total.
    DealerWins,
    /// Equal totals, or both sides dealt a natural.
    Push,
}

impl Outcome {
    /// Returns the winner, or `None` for a push.
    #[must_use]
    pub const fn winner(self) -> Option<Winner> {
        match self {
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWins => Some(Winner::Player),
            Self::DealerBlackjack | Self::PlayerBust | Self::DealerWins => Some(Winner::Dealer),
            Self::Push => None,
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBlackjack => "Blackjack! You win.",
            Self::DealerBlackjack => "Dealer has blackjack. You lose.",
            Self::PlayerBust => "You bust. Dealer wins.",
            Self::DealerBust => "Dealer busts. You win.",
            Self::PlayerWins => "You win.",
            Self::DealerWins => "You lose.",
            Self::Push => "Draw.",
        }
    }

    /// Decides the outcome of two totals that are both 21 or under.
    pub(crate) const fn compare(player_total: u8, dealer_total: u8) -> Self {
        if player_total > dealer_total {
            Self::PlayerWins
        } else if player_total < dealer_total {
            Self::DealerWins
        } else {
            Self::Push
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
