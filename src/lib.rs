//! A 27-card trick engine with optional `no_std` support.
//!
//! The crate provides a [`Trick`] type that manages the full trick flow:
//! a spectator mentally picks one of 27 cards and names a position, three
//! pile-choice rounds rearrange the working deck, and the reveal names
//! the card sitting at the chosen position.
//!
//! # Example
//!
//! ```
//! use trick27::{Trick, TrickState};
//!
//! let trick = Trick::new(42);
//! assert_eq!(trick.state(), TrickState::PickCard);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod snapshot;
mod sync;
pub mod trick;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::PileError;
pub use snapshot::TrickSnapshot;
pub use trick::{PILE_COUNT, PILE_SIZE, ROUNDS, SortOrder, TRICK_DECK_SIZE, Trick, TrickState};
