//! The display boundary: structured events emitted during a round.

use crate::card::Card;
use crate::hand::{DealerHand, Hand};
use crate::result::Outcome;

/// A material game event, pushed to the [`EventSink`] as it happens.
///
/// Events carry cloned hand snapshots. The dealer snapshot keeps its
/// concealment state, so renderers decide what to hide by checking
/// [`DealerHand::is_hole_revealed`] rather than by game logic of their own.
#[derive(Debug, Clone)]
pub enum TableEvent {
    /// The initial two-card deal. The dealer's hole card is concealed.
    Deal {
        /// The player's starting hand.
        player: Hand,
        /// The dealer's starting hand, hole card down.
        dealer: DealerHand,
    },
    /// The player drew a card (from a hit or a double down).
    PlayerDraw {
        /// The card drawn.
        card: Card,
        /// The player's hand after the draw.
        player: Hand,
    },
    /// The player stood.
    PlayerStand {
        /// The player's final hand.
        player: Hand,
    },
    /// The bet was raised by a double down.
    BetRaised {
        /// The new total bet.
        bet: usize,
    },
    /// The dealer turned over the hole card.
    DealerReveal {
        /// The dealer's hand, hole card up.
        dealer: DealerHand,
    },
    /// The dealer drew a card.
    DealerDraw {
        /// The card drawn.
        card: Card,
        /// The dealer's hand after the draw.
        dealer: DealerHand,
    },
    /// The round settled.
    Settled {
        /// How the round ended.
        outcome: Outcome,
        /// The final bet, including any double-down raise.
        bet: usize,
        /// The bankroll after settlement.
        bankroll: usize,
        /// The player's final hand.
        player: Hand,
        /// The dealer's final hand. Revealed unless the player busted, in
        /// which case the dealer's turn was never played out.
        dealer: DealerHand,
    },
}

/// Receives [`TableEvent`]s, fire and forget.
///
/// The engine never depends on what a sink does with an event; rendering,
/// logging, or dropping them are all fine.
pub trait EventSink {
    /// Handles one event.
    fn publish(&mut self, event: TableEvent);
}

/// An [`EventSink`] that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&mut self, _event: TableEvent) {}
}
