//! CLI Texas Hold'em example.
//!
//! Set `RUST_LOG=pkrs=debug` to watch the engine's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pkrs::{Card, PendingAction, Phase, Suit, Table, TableOptions};
use tracing_subscriber::EnvFilter;

const HUMAN: usize = 0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    println!("Texas Hold'em CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = Table::new(TableOptions::default(), seed);
    println!("{}", table.game_message());

    loop {
        let chips = table.human_player().map_or(0, |player| player.chips);
        if chips == 0 {
            println!("You are out of chips. Game over.");
            break;
        }

        let input = prompt_line(&format!("\nYou have {chips} chips. Deal a hand? (enter/q): "));
        if input == "q" || input == "quit" {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = table.start_hand() {
            println!("Cannot start a hand: {err}");
            break;
        }
        println!("\n=== Hand #{} ===", table.hand_number());
        println!("{}", table.game_message());

        if !play_hand(&table) {
            println!("Goodbye.");
            return;
        }
    }
}

/// Plays one hand to completion. Returns `false` if the user quit.
fn play_hand(table: &Table) -> bool {
    loop {
        if table.current_player_index() == Some(HUMAN) {
            print_table(table);
            if !human_turn(table) {
                return false;
            }
            continue;
        }

        let Some(action) = table.pending() else {
            if let Some(result) = table.last_result().filter(|result| result.uncontested) {
                println!("{} (pot {})", table.game_message(), result.pot);
            }
            return true;
        };
        match table.resolve(action) {
            Ok(true) => report(table, action),
            Ok(false) => {}
            Err(err) => {
                println!("Engine error: {err}");
                table.init_game();
                return true;
            }
        }
    }
}

fn human_turn(table: &Table) -> bool {
    let owed = table.current_bet().saturating_sub(
        table
            .human_player()
            .map_or(0, |player| player.current_bet),
    );
    let prompt = if table.can_check() {
        format!(
            "(k) check, (r) raise N [{}-{}], (f) fold: ",
            table.min_raise_amount(),
            table.max_raise_amount()
        )
    } else {
        format!(
            "(c) call {owed}, (r) raise N [{}-{}], (f) fold: ",
            table.min_raise_amount(),
            table.max_raise_amount()
        )
    };

    let input = prompt_line(&prompt);
    let mut words = input.split_whitespace();
    let result = match words.next() {
        Some("q" | "quit") => return false,
        Some("k" | "check") => table.check(HUMAN),
        Some("c" | "call") => table.call(HUMAN),
        Some("f" | "fold") => table.fold(HUMAN),
        Some("r" | "raise") => match words.next().and_then(|word| word.parse().ok()) {
            Some(to) => table.raise(HUMAN, to),
            None => {
                println!("Usage: r <total bet>");
                return true;
            }
        },
        _ => {
            println!("Unknown action.");
            return true;
        }
    };

    match result {
        Ok(()) => println!("{}", table.last_action()),
        Err(err) => println!("Action rejected: {err}"),
    }
    true
}

fn report(table: &Table, action: PendingAction) {
    match action {
        PendingAction::Opponent { .. } => println!("{}", table.last_action()),
        PendingAction::AdvanceStreet { .. } if table.phase() == Phase::Showdown => {
            println!("\n--- Showdown ---");
            println!("Board: {}", format_cards(&table.community_cards()));
            if let Some(result) = table.last_result() {
                let players = table.players();
                for hand in &result.hands {
                    let player = &players[hand.seat];
                    println!(
                        "{:>8}: {}  {}",
                        player.name,
                        format_cards(&player.hole_cards),
                        hand.result
                    );
                }
            }
            println!("{}", table.game_message());
        }
        PendingAction::AdvanceStreet { .. } => {
            println!(
                "\n{}: {}",
                table.game_message(),
                format_cards(&table.community_cards())
            );
        }
        PendingAction::FinishHand { .. } => {}
    }
}

fn print_table(table: &Table) {
    println!("\nBoard: {}", format_cards(&table.community_cards()));
    println!("Pot: {}  Current bet: {}", table.pot(), table.current_bet());
    for player in table.players() {
        let marker = if player.id == table.dealer_position() {
            "(D)"
        } else {
            "   "
        };
        let status = if player.folded {
            " folded"
        } else if player.all_in {
            " all-in"
        } else {
            ""
        };
        let cards = if player.is_human {
            format_cards(&player.hole_cards)
        } else if player.hole_cards.is_empty() {
            String::new()
        } else {
            "?? ??".to_string()
        };
        println!(
            "{marker} {:>8}: {:>5} chips, bet {:>4}  {cards}{status}",
            player.name, player.chips, player.current_bet
        );
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };
    colorize(&format!("{}{suit}", card.rank.label()), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
