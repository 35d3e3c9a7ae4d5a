//! Round result types.

use crate::hand::{DealerHand, Hand};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins with a higher value than the dealer.
    Win,
    /// Player wins because the dealer busted.
    DealerBust,
    /// Player loses with a lower value than the dealer.
    Lose,
    /// Player loses by busting. The dealer's turn is never played out.
    PlayerBust,
    /// Tie; the bet is returned.
    Push,
}

impl Outcome {
    /// Returns whether the player won the bet.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::DealerBust)
    }

    /// Returns whether the player lost the bet.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::PlayerBust)
    }
}

/// Result of one settled round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The final bet, including any double-down raise.
    pub bet: usize,
    /// The bankroll after settlement.
    pub bankroll: usize,
    /// Settlement delta: `+bet`, `-bet`, or `0` on a push.
    pub delta: isize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// The player's final hand.
    pub player_hand: Hand,
    /// The dealer's final hand.
    pub dealer_hand: DealerHand,
}
