//! Deck construction and shuffling.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered sequence of cards.
///
/// Insertion order is significant; piles and working decks are `Deck`s
/// wrapped around explicit card sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in order.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the canonical 52-card deck.
    ///
    /// Card `i` has `rank = i % 13` and `suit = i / 13`, so the deck runs
    /// Ace through King of Diamonds, Clubs, Hearts, then Spades.
    ///
    /// # Example
    ///
    /// ```
    /// use trick27::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 0..13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Wraps an explicit card sequence.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates an empty deck.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Shuffles the deck in place.
    ///
    /// Each index is swapped with a partner drawn from `[0, len - 1)`; the
    /// top slot never serves as a swap partner. Decks shorter than two
    /// cards are left untouched.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        if self.cards.len() < 2 {
            return;
        }

        for i in 0..self.cards.len() {
            let partner = rng.random_range(0..self.cards.len() - 1);
            self.cards.swap(i, partner);
        }
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Renders every card to its compact symbol, in order.
    #[must_use]
    pub fn symbols(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.symbol()).collect()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
