//! CLI trick example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use trick27::{Trick, TrickState};

fn main() {
    println!("27-card trick CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let trick = Trick::new(seed);

    loop {
        match trick.state() {
            TrickState::PickCard => {
                println!("\nPick a Card!");
                println!("{}", trick.trick_deck.lock().symbols().join(" "));
                let input = prompt_line("Press Enter when you have one in mind: ");
                if is_quit(&input) {
                    return;
                }
                trick.advance();
            }
            TrickState::PickNumber => {
                let input = prompt_line("Pick a Number between 1 and 27! ");
                if is_quit(&input) {
                    return;
                }
                // Unparseable input falls back to 1; the engine clamps the rest.
                trick.set_number(input.parse::<i32>().unwrap_or(1));
                trick.choose_number();
            }
            state @ (TrickState::FirstPile | TrickState::SecondPile | TrickState::ThirdPile) => {
                println!("\n{}", round_prompt(state));
                print_piles(&trick);

                let Some(pile) = prompt_pile() else {
                    return;
                };
                if let Err(err) = trick.choose_pile(pile) {
                    println!("Pile error: {err}");
                }
            }
            TrickState::Reveal => {
                println!("\nYour card is the {}", trick.reveal());
                let input = prompt_line("Play again? (y/n): ");
                if matches!(input.as_str(), "y" | "yes") {
                    trick.reset();
                } else {
                    println!("Goodbye.");
                    return;
                }
            }
        }
    }
}

const fn round_prompt(state: TrickState) -> &'static str {
    match state {
        TrickState::FirstPile => "Watch for your card! Tell me which pile it is in!",
        TrickState::SecondPile => "One more time! Watch for your card!",
        _ => "You know the drill! Where is your card?",
    }
}

fn print_piles(trick: &Trick) {
    for (index, pile) in trick.piles().iter().enumerate() {
        println!("Pile {}: {}", index + 1, pile.symbols().join(" "));
    }
}

fn prompt_pile() -> Option<usize> {
    loop {
        let input = prompt_line("Which pile? (1-3): ");
        if is_quit(&input) {
            return None;
        }
        match input.parse::<usize>() {
            Ok(pile @ 1..=3) => return Some(pile - 1),
            _ => println!("Please enter 1, 2, or 3."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn is_quit(input: &str) -> bool {
    input == "q" || input == "quit"
}
