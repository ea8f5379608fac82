//! Trick integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use trick27::{
    Card, DECK_SIZE, Deck, PILE_COUNT, PILE_SIZE, PileError, SortOrder, Suit, TRICK_DECK_SIZE,
    Trick, TrickState,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn suit_index(suit: Suit) -> u8 {
    match suit {
        Suit::Diamonds => 0,
        Suit::Clubs => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

fn pin_working_deck(trick: &Trick, cards: &[Card]) {
    *trick.trick_deck.lock() = Deck::from_cards(cards.to_vec());
}

/// Answers every pile-choice round with the pile that truly contains
/// `chosen`, as an honest spectator would.
fn play_rounds(trick: &Trick, chosen: Card) {
    for _ in 0..3 {
        let piles = trick.piles();
        let pile = piles
            .iter()
            .position(|pile| pile.cards().contains(&chosen))
            .expect("chosen card must be in exactly one pile");
        trick.choose_pile(pile).expect("round must be accepted");
    }
}

#[test]
fn standard_deck_layout() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    for (i, card) in deck.cards().iter().enumerate() {
        assert_eq!(card.rank, (i % 13) as u8);
        assert_eq!(card.suit, Suit::from_index((i / 13) as u8).unwrap());
        assert!(seen.insert(*card));
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::standard();
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);

    let mut keys: Vec<(u8, u8)> = deck
        .cards()
        .iter()
        .map(|card| (suit_index(card.suit), card.rank))
        .collect();
    keys.sort_unstable();

    let expected: Vec<(u8, u8)> = Deck::standard()
        .cards()
        .iter()
        .map(|card| (suit_index(card.suit), card.rank))
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn shuffle_leaves_single_card_deck_alone() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::from_cards(vec![card(Suit::Spades, 12)]);
    deck.shuffle(&mut rng);
    assert_eq!(deck.cards(), &[card(Suit::Spades, 12)]);
}

#[test]
fn split_produces_interleaved_piles() {
    let trick = Trick::new(1);
    let cards: Vec<Card> = Deck::standard().cards()[..TRICK_DECK_SIZE].to_vec();
    pin_working_deck(&trick, &cards);

    trick.split();
    let piles = trick.piles();

    for pile in &piles {
        assert_eq!(pile.len(), PILE_SIZE);
    }
    for k in 0..PILE_SIZE {
        assert_eq!(piles[0].cards()[k], cards[3 * k]);
        assert_eq!(piles[1].cards()[k], cards[3 * k + 1]);
        assert_eq!(piles[2].cards()[k], cards[3 * k + 2]);
    }

    // The piles partition the working deck without loss or duplication.
    let mut all: Vec<Card> = piles.iter().flat_map(|pile| pile.cards().to_vec()).collect();
    assert_eq!(all.len(), TRICK_DECK_SIZE);
    all.sort_unstable_by_key(|card| (suit_index(card.suit), card.rank));
    let mut expected = cards;
    expected.sort_unstable_by_key(|card| (suit_index(card.suit), card.rank));
    assert_eq!(all, expected);
}

#[test]
fn ternary_round_trip() {
    for n in 0..TRICK_DECK_SIZE as u8 {
        let order = SortOrder::encode(n + 1);
        for digit in order.digits() {
            assert!(digit < 3);
        }
        assert_eq!(order.decode(), n);
        assert_eq!(
            u32::from(order.digit(0)) + 3 * u32::from(order.digit(1)) + 9 * u32::from(order.digit(2)),
            u32::from(n)
        );
    }
}

#[test]
fn honest_spectator_always_finds_their_card() {
    for number in 1..=TRICK_DECK_SIZE {
        for start in 0..TRICK_DECK_SIZE {
            let trick = Trick::new((number * 31 + start) as u64);
            let chosen = trick.trick_deck.lock().cards()[start];

            trick.advance();
            trick.set_number(number as i32);
            trick.choose_number();
            assert_eq!(trick.state(), TrickState::FirstPile);

            play_rounds(&trick, chosen);

            assert_eq!(trick.state(), TrickState::Reveal);
            assert_eq!(trick.trick_deck.lock().cards()[number - 1], chosen);
            assert_eq!(trick.reveal(), chosen);
        }
    }
}

#[test]
fn state_machine_cycles() {
    let mut state = TrickState::PickCard;
    let expected = [1, 2, 3, 4, 5, 0];
    for index in expected {
        state = state.next();
        assert_eq!(state.index(), index);
    }

    let trick = Trick::new(3);
    for _ in 0..6 {
        trick.advance();
    }
    assert_eq!(trick.state(), TrickState::PickCard);
}

#[test]
fn number_clamping() {
    let trick = Trick::new(5);

    trick.set_number(0);
    assert_eq!(trick.number(), 1);
    trick.set_number(28);
    assert_eq!(trick.number(), 27);
    trick.set_number(-4);
    assert_eq!(trick.number(), 1);
    trick.set_number(14);
    assert_eq!(trick.number(), 14);

    trick.increment_number();
    assert_eq!(trick.number(), 15);
    trick.decrement_number();
    assert_eq!(trick.number(), 14);

    trick.set_number(27);
    trick.increment_number();
    assert_eq!(trick.number(), 27);
    trick.set_number(1);
    trick.decrement_number();
    assert_eq!(trick.number(), 1);
}

#[test]
fn choose_pile_rejects_bad_input() {
    let trick = Trick::new(9);

    assert_eq!(trick.choose_pile(0).unwrap_err(), PileError::InvalidState);

    trick.advance();
    trick.set_number(12);
    trick.choose_number();
    assert_eq!(trick.choose_pile(3).unwrap_err(), PileError::InvalidPile);

    trick.choose_pile(0).unwrap();
    trick.choose_pile(1).unwrap();
    trick.choose_pile(2).unwrap();
    assert_eq!(trick.state(), TrickState::Reveal);
    assert_eq!(trick.choose_pile(0).unwrap_err(), PileError::InvalidState);
}

#[test]
fn reset_restores_initial_session() {
    let trick = Trick::new(11);

    trick.advance();
    trick.set_number(20);
    trick.choose_number();
    trick.choose_pile(1).unwrap();

    trick.reset();

    assert_eq!(trick.state(), TrickState::PickCard);
    assert_eq!(trick.number(), 1);
    assert_eq!(trick.deck.lock().len(), DECK_SIZE);

    let working = trick.trick_deck.lock();
    assert_eq!(working.len(), TRICK_DECK_SIZE);
    let distinct: HashSet<Card> = working.cards().iter().copied().collect();
    assert_eq!(distinct.len(), TRICK_DECK_SIZE);
    drop(working);

    for pile in trick.piles() {
        assert!(pile.is_empty());
    }
    assert_eq!(trick.sort_order(), SortOrder::default());
}

#[test]
fn fixed_scenario_number_five() {
    let trick = Trick::new(0);
    let cards: Vec<Card> = Deck::standard().cards()[..TRICK_DECK_SIZE].to_vec();
    pin_working_deck(&trick, &cards);

    let chosen = cards[0];
    assert_eq!(chosen, card(Suit::Diamonds, 0));

    trick.advance();
    trick.set_number(5);
    trick.choose_number();
    assert_eq!(trick.sort_order().digits(), [1, 1, 0]);

    // Round 1: the ace sits in pile 0 and the digit is 1, so after the
    // swap-and-concat it lands at index 9 of the working deck.
    trick.choose_pile(0).unwrap();
    assert_eq!(trick.trick_deck.lock().cards()[9], chosen);

    play_rounds_from_second(&trick, chosen);

    assert_eq!(trick.state(), TrickState::Reveal);
    assert_eq!(trick.trick_deck.lock().cards()[4], chosen);
    assert_eq!(trick.reveal(), chosen);
}

fn play_rounds_from_second(trick: &Trick, chosen: Card) {
    for _ in 0..2 {
        let piles = trick.piles();
        let pile = piles
            .iter()
            .position(|pile| pile.cards().contains(&chosen))
            .expect("chosen card must be in exactly one pile");
        trick.choose_pile(pile).expect("round must be accepted");
    }
}

#[test]
fn display_forms() {
    let ace = card(Suit::Diamonds, 0);
    assert_eq!(ace.to_string(), "Ace of Diamonds");
    assert_eq!(ace.symbol(), "♦A");
    assert_eq!(ace.class_name(), "ace diamonds");

    let ten = card(Suit::Hearts, 9);
    assert_eq!(ten.to_string(), "Ten of Hearts");
    assert_eq!(ten.symbol(), "♥10");

    let deck = Deck::from_cards(vec![ace, ten]);
    assert_eq!(deck.symbols(), vec!["♦A", "♥10"]);
}

#[test]
fn snapshot_reflects_session() {
    let trick = Trick::new(21);

    let before = trick.snapshot();
    assert_eq!(before.state, TrickState::PickCard);
    assert_eq!(before.number, 1);
    assert_eq!(before.trick_deck.len(), TRICK_DECK_SIZE);
    assert_eq!(before.piles.len(), PILE_COUNT);
    for pile in &before.piles {
        assert!(pile.is_empty());
    }

    trick.advance();
    trick.set_number(17);
    trick.choose_number();

    let during = trick.snapshot();
    assert_eq!(during.state, TrickState::FirstPile);
    assert_eq!(during.number, 17);
    for pile in &during.piles {
        assert_eq!(pile.len(), PILE_SIZE);
    }
}
