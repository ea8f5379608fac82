//! Plain-data session views for presentation layers.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::trick::{PILE_COUNT, TrickState};

/// A point-in-time view of a trick session.
///
/// Everything a renderer needs, detached from the live session: the
/// console and graphical front ends both consume this and forward user
/// choices back through the session's methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickSnapshot {
    /// Current state.
    pub state: TrickState,
    /// The spectator's declared position (1-27).
    pub number: u8,
    /// The working deck, in order.
    pub trick_deck: Vec<Card>,
    /// The three piles; empty before the first split.
    pub piles: [Vec<Card>; PILE_COUNT],
}
