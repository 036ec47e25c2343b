//! Parsing of typed commands in interactive play.

use tablestakes_engine::player::PlayerAction;
use tablestakes_engine::provider::ActionRequest;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A request to pass to the engine
    Action(ActionRequest),
    /// `bet` or `raise` with a missing or unreadable amount; played as a fold
    BadAmount(String),
    /// User entered quit command (q or quit)
    Quit,
    /// Not a command at all; ask again
    Invalid(String),
}

/// Parses an action typed at the prompt (case-insensitive).
///
/// - `f`/`fold`, `k`/`check`, `c`/`call`
/// - `bet N`, `raise N` where N is the street total
/// - `allin`/`all-in`
/// - `q`/`quit`
///
/// # Example
///
/// ```rust
/// # use tablestakes_cli::validation::{parse_player_action, ParseResult};
/// use tablestakes_engine::player::PlayerAction;
/// use tablestakes_engine::provider::ActionRequest;
///
/// assert_eq!(
///     parse_player_action("raise 120"),
///     ParseResult::Action(ActionRequest::new(PlayerAction::Raise, 120))
/// );
/// assert!(matches!(parse_player_action("bet lots"), ParseResult::BadAmount(_)));
/// assert_eq!(parse_player_action("Q"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("dance"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(ActionRequest::fold()),
        "check" | "k" => ParseResult::Action(ActionRequest::check()),
        "call" | "c" => ParseResult::Action(ActionRequest::call()),
        "allin" | "all-in" => ParseResult::Action(ActionRequest::new(PlayerAction::AllIn, 0)),
        "bet" | "raise" => {
            let action = if verb == "bet" {
                PlayerAction::Bet
            } else {
                PlayerAction::Raise
            };
            match parts.get(1).map(|s| s.parse::<u32>()) {
                Some(Ok(amount)) if amount > 0 => {
                    ParseResult::Action(ActionRequest::new(action, amount))
                }
                Some(Ok(_)) => ParseResult::BadAmount(format!("{} amount must be positive", verb)),
                Some(Err(_)) => ParseResult::BadAmount(format!("invalid {} amount {:?}", verb, parts[1])),
                None => ParseResult::BadAmount(format!("{} requires an amount (e.g. '{} 100')", verb, verb)),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <amount>, allin, q",
            verb
        )),
    }
}
