//! The dealer's fixed drawing policy.

use crate::deck::Deck;
use crate::error::RoundError;
use crate::event::{EventSink, TableEvent};
use crate::hand::DealerHand;

/// The dealer's state, derived from the hand value.
///
/// The dealer has no decisions to make: below 17 the house must hit, on any
/// 17 through 21 (soft included) it must stand, over 21 it is busted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    /// Value below 17; the dealer must draw.
    Hitting,
    /// Value 17 through 21; the dealer stops.
    Standing,
    /// Value over 21.
    Busted,
}

impl DealerState {
    /// Classifies a hand value.
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        if value > 21 {
            Self::Busted
        } else if value >= 17 {
            Self::Standing
        } else {
            Self::Hitting
        }
    }
}

/// Plays out the dealer's turn: reveal the hole card, then draw until the
/// hand reaches 17 or busts.
///
/// Returns the terminal state, which is never [`DealerState::Hitting`].
///
/// # Errors
///
/// Returns [`RoundError::DeckExhausted`] if the deck runs out while the
/// dealer must draw. Not reachable from a fresh per-round deck.
pub fn dealer_play<S: EventSink>(
    deck: &mut Deck,
    dealer: &mut DealerHand,
    sink: &mut S,
) -> Result<DealerState, RoundError> {
    dealer.reveal_hole();
    sink.publish(TableEvent::DealerReveal {
        dealer: dealer.clone(),
    });

    loop {
        match DealerState::from_value(dealer.value()) {
            DealerState::Hitting => {
                let card = deck.draw()?;
                dealer.add_card(card);
                sink.publish(TableEvent::DealerDraw {
                    card,
                    dealer: dealer.clone(),
                });
            }
            state => return Ok(state),
        }
    }
}
