//! CLI blackjack demo: a terminal presentation layer over the engine.
//!
//! Set `RUST_LOG=debug` to follow the engine's decisions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjrules::{Card, CardFace, GameOptions, GameState, Phase, TableView};

fn main() {
    env_logger::init();
    println!("Blackjack CLI demo (type 'q' to quit)");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();

    loop {
        let mut round = match GameState::new(options, seed) {
            Ok(round) => round,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };
        seed = seed.wrapping_add(1);

        while round.phase() == Phase::PlayerTurn {
            print_table(&round.view());

            let result = match prompt_line("[h]it [s]tand: ").as_str() {
                "h" | "hit" => round.hit().map(|card| println!("You draw {}", format_card(&card))),
                "s" | "stand" => round.stand().map(|drawn| {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_table(&round.view());

        match prompt_line("New game? (y/n): ").as_str() {
            "n" | "no" | "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => {}
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(view: &TableView) {
    let dealer = view
        .dealer_cards
        .iter()
        .map(|face| match face {
            CardFace::Up(card) => format_card(card),
            CardFace::Down => "??".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("\nDealer: {dealer} (point {})", view.dealer_total);

    let player = view
        .player_cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("Player: {player} (point {})", view.player_total);
    println!("{}\n", view.message);
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let code = if card.suit().is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}
