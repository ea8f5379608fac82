//! Error types for trick operations.

use thiserror::Error;

/// Errors that can occur when answering a pile-choice round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// Not in a pile-choice round.
    #[error("not in a pile-choice round")]
    InvalidState,
    /// Pile index out of range.
    #[error("pile index out of range")]
    InvalidPile,
}
