//! Interactive CLI dealer.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use deckr::{Card, Game, variants};

fn main() {
    println!("Card dealer CLI (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let deck_dir = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/decks"));

    println!("\nWhat game are we playing?");
    for (index, variant) in variants().iter().enumerate() {
        println!(
            "  [{}] {} ({} cards per hand)",
            index + 1,
            variant.name,
            variant.hand_size
        );
    }

    let Some(variant) = prompt_choice("Game number: ") else {
        return;
    };

    let mut game = match (variant.build)(deck_dir, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Could not load {}: {err}", variant.name);
            return;
        }
    };

    let max_hands = game.max_hands_per_deck();
    let Some(hand_count) = prompt_hand_count(game.name(), max_hands) else {
        return;
    };

    for hand_number in 1..=hand_count {
        let hand = match deal_full_hand(game.as_mut()) {
            Ok(hand) => hand,
            Err(message) => {
                println!("{message}");
                break;
            }
        };

        print!("Hand {hand_number:02}:  ");
        for card in &hand {
            print!("{} ", format_card(card));
        }
        println!(" Score: {}", game.score(&hand));
    }
}

/// Deals one hand, collecting the lazy deal into a vector.
fn deal_full_hand(game: &mut dyn Game) -> Result<Vec<Card>, String> {
    let cards = game
        .deal_hand()
        .map_err(|err| format!("Deal error: {err}"))?;
    cards
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("Deal stopped: {err}"))
}

fn prompt_choice(prompt: &str) -> Option<&'static deckr::Variant> {
    loop {
        let Some(number) = prompt_usize(prompt) else {
            return None;
        };
        match number.checked_sub(1).and_then(|i| variants().get(i)) {
            Some(variant) => return Some(variant),
            None => println!("Please pick a listed game."),
        }
    }
}

fn prompt_hand_count(game_name: &str, max_hands: usize) -> Option<usize> {
    loop {
        let count = prompt_usize(&format!(
            "How many {game_name} hands would you like to deal? (1-{max_hands}): "
        ))?;
        if count >= 1 && count <= max_hands {
            return Some(count);
        }
        println!("Please enter a number between 1 and {max_hands}.");
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

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit.code {
        'H' | 'D' => "31",
        'C' => "32",
        _ => "34",
    };

    let text = card.suit.unicode_char().map_or_else(
        || card.compact(),
        |suit_char| format!("{suit_char}{}", card.compact_value),
    );
    colorize(&text, color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
