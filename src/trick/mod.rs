//! Trick engine and session state.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::snapshot::TrickSnapshot;

mod actions;
pub mod state;
pub mod ternary;

pub use state::TrickState;
pub use ternary::SortOrder;

/// Number of cards in the working deck.
pub const TRICK_DECK_SIZE: usize = 27;
/// Number of piles the working deck is split into.
pub const PILE_COUNT: usize = 3;
/// Number of cards per pile.
pub const PILE_SIZE: usize = TRICK_DECK_SIZE / PILE_COUNT;
/// Number of pile-choice rounds, one ternary digit each.
pub const ROUNDS: usize = 3;

/// A 27-card trick session.
///
/// The session owns the shuffled 52-card source deck, the 27-card working
/// deck whose order decides the reveal, and the three transient piles.
/// Methods take `&self`; the individual fields are mutex-guarded, but
/// operations are not atomic across fields, so concurrent calls into one
/// session from multiple threads must be serialized by the caller.
pub struct Trick {
    /// The full source deck, kept for [`reset`](Self::reset).
    pub deck: Mutex<Deck>,
    /// The working deck, rebuilt by each merge.
    pub trick_deck: Mutex<Deck>,
    /// The three piles, re-derived on entry into each split state.
    piles: Mutex<[Deck; PILE_COUNT]>,
    /// Current state.
    state: Mutex<TrickState>,
    /// The spectator's declared position, 1-27.
    number: Mutex<u8>,
    /// Ternary encoding of the position, one digit per round.
    sort_order: Mutex<SortOrder>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Trick {
    /// Creates a new session with the given seed.
    ///
    /// The source deck is shuffled and its first 27 cards become the
    /// working deck. The session starts in [`TrickState::PickCard`] with
    /// the position set to 1.
    ///
    /// # Example
    ///
    /// ```
    /// use trick27::{Trick, TrickState};
    ///
    /// let trick = Trick::new(42);
    /// assert_eq!(trick.state(), TrickState::PickCard);
    /// assert_eq!(trick.number(), 1);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        let trick_deck = Self::deal_working_deck(&deck);

        Self {
            deck: Mutex::new(deck),
            trick_deck: Mutex::new(trick_deck),
            piles: Mutex::new([Deck::empty(), Deck::empty(), Deck::empty()]),
            state: Mutex::new(TrickState::PickCard),
            number: Mutex::new(1),
            sort_order: Mutex::new(SortOrder::default()),
            rng: Mutex::new(rng),
        }
    }

    /// Takes the first 27 cards of the source deck as the working deck.
    fn deal_working_deck(deck: &Deck) -> Deck {
        Deck::from_cards(deck.cards()[..TRICK_DECK_SIZE].to_vec())
    }

    /// (Re)derives the three piles from the working deck.
    ///
    /// Pile `k` receives the cards at indices congruent to `k` modulo 3,
    /// so consecutive cards fan out across the piles instead of forming
    /// contiguous blocks. Deterministic for a given working deck, and
    /// idempotent between merges.
    ///
    /// # Panics
    ///
    /// Panics if the working deck's length is not divisible by the pile
    /// count; that is a programmer error, not a user error.
    pub fn split(&self) {
        let deck = self.trick_deck.lock();
        assert_eq!(
            deck.len() % PILE_COUNT,
            0,
            "working deck length must be divisible by the pile count"
        );

        let mut piles: [Vec<Card>; PILE_COUNT] = [
            Vec::with_capacity(PILE_SIZE),
            Vec::with_capacity(PILE_SIZE),
            Vec::with_capacity(PILE_SIZE),
        ];
        for (i, &card) in deck.cards().iter().enumerate() {
            piles[i % PILE_COUNT].push(card);
        }
        drop(deck);

        *self.piles.lock() = piles.map(Deck::from_cards);
    }

    /// Swaps the chosen pile into the placement slot, then rebuilds the
    /// working deck as pile 1 ‖ pile 2 ‖ pile 3.
    fn merge(&self, pile: usize, placement: usize) {
        let mut piles = self.piles.lock();
        piles.swap(pile, placement);

        let mut cards = Vec::with_capacity(TRICK_DECK_SIZE);
        for p in piles.iter() {
            cards.extend_from_slice(p.cards());
        }
        drop(piles);

        *self.trick_deck.lock() = Deck::from_cards(cards);
    }

    /// Returns the current state.
    pub fn state(&self) -> TrickState {
        *self.state.lock()
    }

    /// Returns the spectator's declared position (1-27).
    pub fn number(&self) -> u8 {
        *self.number.lock()
    }

    /// Returns the current sort order.
    pub fn sort_order(&self) -> SortOrder {
        *self.sort_order.lock()
    }

    /// Returns clones of the three piles.
    ///
    /// The piles are empty until the first split state is entered.
    pub fn piles(&self) -> [Deck; PILE_COUNT] {
        self.piles.lock().clone()
    }

    /// Returns a plain-data view of the session for presentation layers.
    ///
    /// Adapters read a fresh snapshot after each action they drive; the
    /// engine pushes nothing.
    pub fn snapshot(&self) -> TrickSnapshot {
        TrickSnapshot {
            state: self.state(),
            number: self.number(),
            trick_deck: self.trick_deck.lock().cards().to_vec(),
            piles: self.piles().map(|pile| pile.cards().to_vec()),
        }
    }
}
