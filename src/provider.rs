//! The player-input boundary.

use crate::hand::Hand;

/// A move chosen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerMove {
    /// Take another card.
    Hit,
    /// Stop taking cards.
    Stand,
    /// Raise the bet once, take exactly one more card, then stand.
    ///
    /// Only legal on the first play (exactly two cards in hand) and with
    /// funds remaining beyond the current bet.
    DoubleDown,
}

/// Supplies the player's decisions to the engine.
///
/// Implementations are expected to return only moves that are currently
/// legal; an interactive implementation re-prompts on bad input rather than
/// passing it through. The engine still rejects anything illegal with
/// [`RoundError::InvalidMove`](crate::RoundError::InvalidMove).
///
/// Both calls are plain synchronous boundaries; the engine blocks until a
/// decision comes back.
pub trait DecisionProvider {
    /// Asks for the next move, given the player's current hand and the
    /// funds still available beyond the current bet.
    ///
    /// [`PlayerMove::DoubleDown`] may only be returned when the hand has
    /// exactly two cards and `available > 0`.
    fn get_move(&mut self, hand: &Hand, available: usize) -> PlayerMove;

    /// Asks for the double-down raise amount, in `1..=max_raise`.
    ///
    /// Called exactly once per round, and only after this provider returned
    /// [`PlayerMove::DoubleDown`].
    fn get_raise(&mut self, max_raise: usize) -> usize;
}
