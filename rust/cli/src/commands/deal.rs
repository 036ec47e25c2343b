//! `deal`: one hand dealt face up, for inspecting the deck and evaluator.

use std::io::Write;

use tablestakes_engine::cards::Card;
use tablestakes_engine::deck::Deck;
use tablestakes_engine::hand::evaluate;

use crate::error::CliError;

fn plain(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

/// Deals two hole cards per seat and a full board, then names the winner.
///
/// Cards print as plain letters (`As Td`) so they can be passed to `rank`.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: u8,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=10).contains(&players) {
        return Err(CliError::InvalidInput(format!(
            "players must be 2..=10, got {}",
            players
        )));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);

    let holes: Vec<Vec<Card>> = (0..players).map(|_| deck.deal(2)).collect();
    let board = deck.deal(5);

    writeln!(out, "Seed: {}", seed)?;
    for (i, hole) in holes.iter().enumerate() {
        writeln!(out, "Hole P{}: {}", i + 1, plain(hole))?;
    }
    writeln!(out, "Board: {}", plain(&board))?;

    let results: Vec<_> = holes.iter().map(|h| evaluate(h, &board)).collect();
    let Some(best) = results.iter().map(|r| r.rank).max() else {
        return Ok(());
    };
    let winners: Vec<String> = results
        .iter()
        .enumerate()
        .filter(|(_, r)| r.rank == best)
        .map(|(i, _)| format!("P{}", i + 1))
        .collect();
    let label = if winners.len() > 1 { "Winners" } else { "Winner" };
    writeln!(
        out,
        "{}: {} ({})",
        label,
        winners.join(", "),
        best.category.name()
    )?;
    Ok(())
}
