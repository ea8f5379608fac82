use crate::card::Card;
use crate::deck::Deck;
use crate::error::PileError;

use super::{PILE_COUNT, SortOrder, TRICK_DECK_SIZE, Trick, TrickState};

impl Trick {
    /// Advances to the next state, wrapping after the reveal.
    ///
    /// Entering any of the split states re-derives the piles from the
    /// current working deck.
    pub fn advance(&self) {
        let mut state = self.state.lock();
        *state = state.next();
        let entered = *state;
        drop(state);

        if entered.splits_on_entry() {
            self.split();
        }
    }

    /// Sets the spectator's declared position, clamping to 1..=27.
    ///
    /// Out-of-range input is absorbed, never rejected: values below the
    /// range land on 1, values above it on 27.
    ///
    /// # Example
    ///
    /// ```
    /// use trick27::Trick;
    ///
    /// let trick = Trick::new(42);
    /// trick.set_number(0);
    /// assert_eq!(trick.number(), 1);
    /// trick.set_number(99);
    /// assert_eq!(trick.number(), 27);
    /// ```
    pub fn set_number(&self, number: i32) {
        *self.number.lock() = number.clamp(1, TRICK_DECK_SIZE as i32) as u8;
    }

    /// Steps the declared position up by one, saturating at 27.
    pub fn increment_number(&self) {
        let mut number = self.number.lock();
        if *number < TRICK_DECK_SIZE as u8 {
            *number += 1;
        }
    }

    /// Steps the declared position down by one, saturating at 1.
    pub fn decrement_number(&self) {
        let mut number = self.number.lock();
        if *number > 1 {
            *number -= 1;
        }
    }

    /// Derives the ternary sort order from the current position.
    ///
    /// Call once the position is final, before the first pile-choice
    /// round; the digits stay fixed through all three rounds.
    pub fn compute_sort_order(&self) {
        let number = self.number();
        *self.sort_order.lock() = SortOrder::encode(number);
    }

    /// Locks in the declared position and moves on to the first
    /// pile-choice round.
    pub fn choose_number(&self) {
        self.compute_sort_order();
        self.advance();
    }

    /// Answers the current pile-choice round with the pile (0-2) that
    /// holds the spectator's card.
    ///
    /// The chosen pile is swapped into the slot named by this round's
    /// ternary digit, the piles are concatenated back into the working
    /// deck, and the session advances, re-splitting for the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not in a pile-choice round, or
    /// if the pile index is not 0, 1, or 2.
    pub fn choose_pile(&self, pile: usize) -> Result<(), PileError> {
        let round = self.state().round().ok_or(PileError::InvalidState)?;

        if pile >= PILE_COUNT {
            return Err(PileError::InvalidPile);
        }

        let placement = self.sort_order().digit(round) as usize;
        self.merge(pile, placement);
        self.advance();

        Ok(())
    }

    /// Returns the card at the declared position (1-indexed) in the
    /// working deck.
    ///
    /// A pure lookup: after the third merge this is the spectator's card,
    /// with no further logic.
    pub fn reveal(&self) -> Card {
        let number = self.number();
        self.trick_deck.lock().cards()[number as usize - 1]
    }

    /// Starts a fresh session without recreating the object.
    ///
    /// The state and position return to their initial values and a newly
    /// shuffled source deck is dealt into the working deck. The piles and
    /// sort order reset to empty defaults and are stale until the next
    /// split and position lock-in.
    pub fn reset(&self) {
        let mut rng = self.rng.lock();
        let mut deck = Deck::standard();
        deck.shuffle(&mut *rng);
        drop(rng);

        *self.trick_deck.lock() = Self::deal_working_deck(&deck);
        *self.deck.lock() = deck;
        *self.piles.lock() = [Deck::empty(), Deck::empty(), Deck::empty()];
        *self.state.lock() = TrickState::PickCard;
        *self.number.lock() = 1;
        *self.sort_order.lock() = SortOrder::default();
    }
}
