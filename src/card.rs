//! Card types and display utilities.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Card suit, in the deck-building order used by [`Deck::standard`](crate::Deck::standard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Converts a numeric index (0-3) to a suit.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Diamonds),
            1 => Some(Self::Clubs),
            2 => Some(Self::Hearts),
            3 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// Returns the suit glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (0 = Ace, 1 = Two, ..., 11 = Queen, 12 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 0..=12
    /// are accepted but display as `"?"`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the rank name.
    #[must_use]
    pub const fn rank_name(self) -> &'static str {
        match self.rank {
            0 => "Ace",
            1 => "Two",
            2 => "Three",
            3 => "Four",
            4 => "Five",
            5 => "Six",
            6 => "Seven",
            7 => "Eight",
            8 => "Nine",
            9 => "Ten",
            10 => "Jack",
            11 => "Queen",
            12 => "King",
            _ => "?",
        }
    }

    /// Returns the rank glyph.
    #[must_use]
    pub const fn rank_glyph(self) -> &'static str {
        match self.rank {
            0 => "A",
            1 => "2",
            2 => "3",
            3 => "4",
            4 => "5",
            5 => "6",
            6 => "7",
            7 => "8",
            8 => "9",
            9 => "10",
            10 => "J",
            11 => "Q",
            12 => "K",
            _ => "?",
        }
    }

    /// Returns the compact display form, suit glyph first.
    ///
    /// # Example
    ///
    /// ```
    /// use trick27::{Card, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Diamonds, 0).symbol(), "♦A");
    /// ```
    #[must_use]
    pub fn symbol(self) -> String {
        format!("{}{}", self.suit.glyph(), self.rank_glyph())
    }

    /// Returns the lowercase `"<rank> <suit>"` label, usable as a style
    /// class by graphical front ends.
    ///
    /// # Example
    ///
    /// ```
    /// use trick27::{Card, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Hearts, 11).class_name(), "queen hearts");
    /// ```
    #[must_use]
    pub fn class_name(self) -> String {
        format!("{} {}", self.rank_name(), self.suit.name()).to_lowercase()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit.name())
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;
