//! Deck construction, shuffling, and drawing.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, SUITS};
use crate::error::RoundError;

/// A shuffled deck of cards, consumed from the back as cards are dealt.
///
/// A deck is built fresh for every round and discarded afterwards; there is
/// no discard pile and no mid-round reshuffle.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full 52-card deck and shuffles it with the given RNG.
    ///
    /// Every (rank, suit) pair appears exactly once. Each call produces an
    /// independent deck; no state is shared between calls.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck from explicit cards. Cards are drawn from the **back**
    /// of the list, so the last card is the first one dealt.
    ///
    /// Intended for tests that need a known draw order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, RoundError> {
        self.cards.pop().ok_or(RoundError::DeckExhausted)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
