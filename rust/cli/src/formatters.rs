//! Card, board and action formatters for terminal display.
//!
//! Suits render as Unicode symbols where the terminal is known to cope and as
//! letters otherwise.
//!
//! ```rust
//! use tablestakes_engine::cards::Card;
//! use tablestakes_cli::formatters::{format_board, format_card};
//!
//! let ace: Card = "As".parse().unwrap();
//! assert!(format_card(&ace) == "A♠" || format_card(&ace) == "As");
//! assert!(format_board(&[ace]).starts_with("[A"));
//! ```

use tablestakes_engine::cards::{Card, Suit};
use tablestakes_engine::history::ActionRecord;
use tablestakes_engine::player::PlayerAction;

/// On Windows only modern terminals (Windows Terminal, VS Code, anything
/// setting TERM_PROGRAM) are trusted with Unicode; elsewhere it is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit))
}

/// Cards in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Cards separated by spaces, without brackets.
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// One log entry, e.g. `Ann raise 60` or `Ben fold`.
pub fn format_record(record: &ActionRecord) -> String {
    match record.action {
        PlayerAction::Fold | PlayerAction::Check => {
            format!("{} {}", record.actor, record.action.as_str())
        }
        _ => format!("{} {} {}", record.actor, record.action.as_str(), record.amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablestakes_engine::history::Phase;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn suits_render_as_symbol_or_letter() {
        let hearts = format_suit(Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");
        let spades = format_suit(Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn ten_renders_as_t() {
        let formatted = format_card(&card("10d"));
        assert!(formatted == "T♦" || formatted == "Td");
    }

    #[test]
    fn empty_board_is_brackets() {
        assert_eq!(format_board(&[]), "[]");
        assert_eq!(format_cards(&[]), "");
    }

    #[test]
    fn board_keeps_deal_order() {
        let formatted = format_board(&[card("As"), card("Kh"), card("2c")]);
        assert!(formatted.starts_with("[A"));
        assert!(formatted.contains(" K"));
        assert!(formatted.ends_with("]"));
    }

    #[test]
    fn records_show_amounts_only_when_chips_move() {
        let record = |action, amount| ActionRecord {
            phase: Phase::Flop,
            actor: "Ann".into(),
            action,
            amount,
        };
        assert_eq!(format_record(&record(PlayerAction::Check, 0)), "Ann check");
        assert_eq!(format_record(&record(PlayerAction::Fold, 0)), "Ann fold");
        assert_eq!(format_record(&record(PlayerAction::Raise, 60)), "Ann raise 60");
        assert_eq!(format_record(&record(PlayerAction::AllIn, 980)), "Ann all-in 980");
    }
}
