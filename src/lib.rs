//! A single-player blackjack round engine.
//!
//! The crate provides a [`Table`] type that plays one full round against the
//! house: deal, player decisions, fixed-policy dealer play, and settlement
//! against a bankroll. Player input comes from an injected
//! [`DecisionProvider`]; table events are pushed to an [`EventSink`] so a
//! renderer can draw the game without the engine knowing about terminals.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{DecisionProvider, Hand, NullSink, PlayerMove, Table};
//!
//! struct AlwaysStand;
//!
//! impl DecisionProvider for AlwaysStand {
//!     fn get_move(&mut self, _hand: &Hand, _available: usize) -> PlayerMove {
//!         PlayerMove::Stand
//!     }
//!
//!     fn get_raise(&mut self, _max_raise: usize) -> usize {
//!         0
//!     }
//! }
//!
//! let mut table = Table::new(42);
//! let result = table
//!     .play_round(100, 10, &mut AlwaysStand, &mut NullSink)
//!     .expect("a fresh deck cannot run out in one round");
//! println!("{:?}: bankroll is now {}", result.outcome, result.bankroll);
//! ```
pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod hand;
pub mod provider;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::RoundError;
pub use event::{EventSink, NullSink, TableEvent};
pub use hand::{DealerHand, Hand};
pub use provider::{DecisionProvider, PlayerMove};
pub use result::{Outcome, RoundResult};
pub use round::{DealerState, Table};
