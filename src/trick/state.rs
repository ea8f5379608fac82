//! Trick state types.

/// Phase of a trick session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickState {
    /// All 27 cards are shown; the spectator mentally picks one.
    PickCard,
    /// The spectator names a position between 1 and 27.
    PickNumber,
    /// First pile-choice round.
    FirstPile,
    /// Second pile-choice round.
    SecondPile,
    /// Third pile-choice round.
    ThirdPile,
    /// The card at the chosen position is revealed.
    Reveal,
}

impl TrickState {
    /// Returns the next state, wrapping from `Reveal` back to `PickCard`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::PickCard => Self::PickNumber,
            Self::PickNumber => Self::FirstPile,
            Self::FirstPile => Self::SecondPile,
            Self::SecondPile => Self::ThirdPile,
            Self::ThirdPile => Self::Reveal,
            Self::Reveal => Self::PickCard,
        }
    }

    /// Returns the numeric index of the state (0-5).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::PickCard => 0,
            Self::PickNumber => 1,
            Self::FirstPile => 2,
            Self::SecondPile => 3,
            Self::ThirdPile => 4,
            Self::Reveal => 5,
        }
    }

    /// Returns the pile-choice round (0-2) for the three pile states,
    /// `None` otherwise.
    #[must_use]
    pub const fn round(self) -> Option<usize> {
        match self {
            Self::FirstPile => Some(0),
            Self::SecondPile => Some(1),
            Self::ThirdPile => Some(2),
            _ => None,
        }
    }

    /// Returns whether the piles are re-derived on entry into this state.
    ///
    /// True for the three pile states and the reveal; the reveal split is
    /// display-only and never feeds the reveal lookup.
    #[must_use]
    pub const fn splits_on_entry(self) -> bool {
        matches!(
            self,
            Self::FirstPile | Self::SecondPile | Self::ThirdPile | Self::Reveal
        )
    }
}
