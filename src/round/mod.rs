//! The round engine: deal, player turn, dealer turn, settlement.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::event::{EventSink, TableEvent};
use crate::hand::{DealerHand, Hand};
use crate::provider::{DecisionProvider, PlayerMove};
use crate::result::RoundResult;

mod dealer;
mod settle;

pub use dealer::{DealerState, dealer_play};

/// A blackjack table that plays single-player rounds against the house.
///
/// The table owns only the seeded RNG; every round gets a fresh shuffled
/// deck, and the bankroll is threaded through [`Table::play_round`] calls by
/// the session rather than stored here.
pub struct Table {
    /// Random number generator, seeded for reproducible shuffles.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new table with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Plays one full round with a fresh shuffled deck and returns the
    /// settled result.
    ///
    /// `bet` must already be validated to `1..=bankroll` by the caller's bet
    /// collection; the engine does not re-prompt.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidMove`] if the provider returns an
    /// illegal move, or [`RoundError::DeckExhausted`] if the deck runs out
    /// (unreachable with a fresh 52-card deck).
    pub fn play_round<P: DecisionProvider, S: EventSink>(
        &mut self,
        bankroll: usize,
        bet: usize,
        provider: &mut P,
        sink: &mut S,
    ) -> Result<RoundResult, RoundError> {
        let deck = Deck::shuffled(&mut self.rng);
        Self::play_round_with_deck(deck, bankroll, bet, provider, sink)
    }

    /// Plays one round drawing from the given deck.
    ///
    /// This is [`Table::play_round`] with the shuffle factored out, so tests
    /// can stack a deck with a known draw order via [`Deck::from_cards`].
    ///
    /// # Errors
    ///
    /// Same as [`Table::play_round`].
    pub fn play_round_with_deck<P: DecisionProvider, S: EventSink>(
        mut deck: Deck,
        bankroll: usize,
        mut bet: usize,
        provider: &mut P,
        sink: &mut S,
    ) -> Result<RoundResult, RoundError> {
        debug_assert!(bet >= 1 && bet <= bankroll, "bet must be validated by the caller");

        // Two cards to the dealer, then two to the player, matching the
        // table's dealing order. Value is unaffected by the order.
        let mut dealer_hand = DealerHand::new();
        dealer_hand.add_card(deck.draw()?);
        dealer_hand.add_card(deck.draw()?);

        let mut player_hand = Hand::new();
        player_hand.add_card(deck.draw()?);
        player_hand.add_card(deck.draw()?);

        sink.publish(TableEvent::Deal {
            player: player_hand.clone(),
            dealer: dealer_hand.clone(),
        });

        // Player turn. At 21 the player is still asked; only a bust ends
        // the loop on its own.
        while player_hand.value() <= 21 {
            let available = bankroll - bet;

            match provider.get_move(&player_hand, available) {
                PlayerMove::Stand => {
                    sink.publish(TableEvent::PlayerStand {
                        player: player_hand.clone(),
                    });
                    break;
                }
                PlayerMove::Hit => {
                    let card = deck.draw()?;
                    player_hand.add_card(card);
                    sink.publish(TableEvent::PlayerDraw {
                        card,
                        player: player_hand.clone(),
                    });
                }
                PlayerMove::DoubleDown => {
                    if player_hand.len() != 2 || available == 0 {
                        return Err(RoundError::InvalidMove);
                    }

                    let max_raise = bet.min(available);
                    let raise = provider.get_raise(max_raise);
                    if raise == 0 || raise > max_raise {
                        return Err(RoundError::InvalidMove);
                    }

                    bet += raise;
                    sink.publish(TableEvent::BetRaised { bet });

                    // One forced draw, then the turn is over.
                    let card = deck.draw()?;
                    player_hand.add_card(card);
                    sink.publish(TableEvent::PlayerDraw {
                        card,
                        player: player_hand.clone(),
                    });
                    break;
                }
            }
        }

        let player_value = player_hand.value();

        // A player bust settles immediately; the dealer's hand is never
        // played out and the hole card stays down.
        if player_value <= 21 {
            dealer_play(&mut deck, &mut dealer_hand, sink)?;
        }

        let dealer_value = dealer_hand.value();
        let (outcome, bankroll, delta) = settle::settle(bankroll, bet, player_value, dealer_value);

        sink.publish(TableEvent::Settled {
            outcome,
            bet,
            bankroll,
            player: player_hand.clone(),
            dealer: dealer_hand.clone(),
        });

        Ok(RoundResult {
            outcome,
            bet,
            bankroll,
            delta,
            player_value,
            dealer_value,
            player_hand,
            dealer_hand,
        })
    }
}
