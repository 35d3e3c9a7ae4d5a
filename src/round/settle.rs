//! Settlement arithmetic.

use crate::result::Outcome;

/// Settles a finished round against the bankroll.
///
/// Pure arithmetic: a win adds the bet, a loss subtracts it, a push leaves
/// the bankroll untouched. Returns the outcome, the new bankroll, and the
/// signed delta. A player bust outranks everything; the dealer never drew
/// in that case.
pub(super) fn settle(
    bankroll: usize,
    bet: usize,
    player_value: u8,
    dealer_value: u8,
) -> (Outcome, usize, isize) {
    #[expect(clippy::cast_possible_wrap, reason = "bets fit in isize")]
    let stake = bet as isize;

    if player_value > 21 {
        (Outcome::PlayerBust, bankroll - bet, -stake)
    } else if dealer_value > 21 {
        (Outcome::DealerBust, bankroll + bet, stake)
    } else if player_value < dealer_value {
        (Outcome::Lose, bankroll - bet, -stake)
    } else if player_value > dealer_value {
        (Outcome::Win, bankroll + bet, stake)
    } else {
        (Outcome::Push, bankroll, 0)
    }
}
