//! `rank`: evaluate five to seven cards typed on the command line.

use std::io::Write;

use tablestakes_engine::cards::Card;
use tablestakes_engine::hand::evaluate_cards;

use crate::error::CliError;
use crate::formatters::format_cards;

pub fn handle_rank_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let parsed = cards
        .iter()
        .map(|s| s.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;

    for (i, card) in parsed.iter().enumerate() {
        if parsed[..i].contains(card) {
            return Err(CliError::InvalidInput(format!("duplicate card {}", card)));
        }
    }

    let result = evaluate_cards(&parsed);
    writeln!(out, "{}", result.rank.category.name())?;
    writeln!(out, "Best five: {}", format_cards(&result.cards))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(cards: &[&str]) -> Result<String, CliError> {
        let cards: Vec<String> = cards.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        handle_rank_command(&cards, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn names_the_category() {
        let output = rank(&["As", "Ad", "Ac", "7h", "7d", "2s", "9c"]).unwrap();
        assert_eq!(output.lines().next(), Some("Full House"));
        assert!(output.contains("Best five: "));
    }

    #[test]
    fn wheel_is_a_straight() {
        let output = rank(&["Ah", "2c", "3d", "4s", "5h"]).unwrap();
        assert_eq!(output.lines().next(), Some("Straight"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(rank(&["As", "Ks", "Qs", "Js"]), Err(CliError::InvalidInput(_))));
        assert!(matches!(
            rank(&["As", "Ks", "Qs", "Js", "Ts", "9s", "8s", "7s"]),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(rank(&["As", "Ks", "Qs", "Js", "Zz"]), Err(CliError::InvalidInput(_))));
        assert!(matches!(rank(&["As", "Ks", "Qs", "Js", "as"]), Err(CliError::InvalidInput(_))));
    }
}
