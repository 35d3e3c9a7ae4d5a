//! Error types for round play.

use thiserror::Error;

/// Errors that can occur while playing a round.
///
/// Both variants are invariant violations rather than recoverable
/// conditions: bet validation and move re-prompting belong to the
/// collaborators feeding the engine, so a round that surfaces one of these
/// was driven incorrectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Drawing from an empty deck. Unreachable under correct play; a round
    /// never consumes more than about 21 of the 52 cards.
    #[error("deck is exhausted")]
    DeckExhausted,
    /// The decision provider returned a move that is not currently legal,
    /// such as a double down with more than two cards in hand or a raise
    /// outside its permitted range.
    #[error("decision provider returned an illegal move")]
    InvalidMove,
}
