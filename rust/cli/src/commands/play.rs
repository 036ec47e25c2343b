//! # Play Command
//!
//! A human in seat 0 against bots in every other seat.
//!
//! The console shows each new log entry, the board, the pot and the amount
//! to call, then reads one of `fold`, `check`, `call`, `bet N`, `raise N`,
//! `allin` or `q`. Quitting, or closing input, folds the current hand and
//! ends the session once that hand is resolved.

use std::io::{BufRead, Write};

use tablestakes_ai::create_ai;
use tablestakes_engine::engine::{Engine, HandSummary};
use tablestakes_engine::game::Game;
use tablestakes_engine::history::ShowdownKind;
use tablestakes_engine::player::Player;
use tablestakes_engine::provider::ActionProvider;

use crate::cli::TableArgs;
use crate::config;
use crate::console::{ConsoleProvider, Stop};
use crate::error::CliError;
use crate::formatters::{format_board, format_cards, format_record};
use crate::ui;

const HUMAN: &str = "You";

/// Handle the play command.
///
/// # Errors
///
/// * `CliError::InvalidInput` if `hands` is 0
/// * `CliError::Config` for an invalid configuration or bot kind
/// * `CliError::Interrupted` if input closes mid-session
pub fn handle_play_command(
    hands: u32,
    table: &TableArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let cfg = config::resolve(table)?.config;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let seat_count = usize::from(cfg.players);

    let mut bots: Vec<Box<dyn ActionProvider>> = (1..seat_count)
        .map(|i| create_ai(&cfg.opponent, Some(seed.wrapping_add(i as u64))))
        .collect::<Result<_, _>>()?;
    let mut players = vec![Player::new(HUMAN, cfg.starting_stack)];
    players.extend(
        bots.iter()
            .enumerate()
            .map(|(i, b)| Player::new(format!("{} {}", b.name(), i + 1), cfg.starting_stack)),
    );

    let mut engine = Engine::new(Game::new(players, cfg.big_blind, Some(seed))?);

    writeln!(
        out,
        "play: players={} hands={} seed={} opponent={}",
        seat_count, hands, seed, cfg.opponent
    )?;
    writeln!(out, "Big blind: {}", cfg.big_blind)?;

    for i in 1..=hands {
        let game = engine.game();
        if game.players()[0].stack() == 0 {
            writeln!(out, "You are out of chips.")?;
            break;
        }
        if game.seats_with_chips() < 2 {
            writeln!(out, "Every opponent is out of chips.")?;
            break;
        }
        writeln!(out, "\nHand {}", i)?;

        let mut console = ConsoleProvider::new(HUMAN, &mut *input, &mut *out, &mut *err);
        let summary = {
            let mut seats: Vec<&mut dyn ActionProvider> = Vec::with_capacity(seat_count);
            seats.push(&mut console);
            for bot in bots.iter_mut() {
                seats.push(bot.as_mut());
            }
            engine.play_hand(&mut seats)
        };
        let (shown, stop) = console.finish();
        let summary = summary?;

        write_result(out, &summary, engine.game(), shown)?;

        match stop {
            Some(Stop::Quit) => {
                writeln!(out, "Session ended after {} hand(s).", i)?;
                return Ok(());
            }
            Some(Stop::Eof) => return Err(CliError::Interrupted("input closed".to_string())),
            None => {}
        }
    }

    writeln!(out, "Session complete.")?;
    Ok(())
}

fn write_result(
    out: &mut dyn Write,
    summary: &HandSummary,
    game: &Game,
    shown: usize,
) -> Result<(), CliError> {
    for record in summary.actions.iter().skip(shown) {
        writeln!(out, "  {}", format_record(record))?;
    }

    let players = game.players();
    if let Some(showdown) = &summary.showdown {
        if showdown.kind == ShowdownKind::Evaluated {
            writeln!(out, "Board: {}", format_board(&showdown.board))?;
            for hand in &showdown.hands {
                writeln!(
                    out,
                    "  {}: {} ({})",
                    players[hand.seat].name(),
                    format_cards(&hand.hole),
                    hand.result.rank.category.name()
                )?;
            }
        }
        for payout in &showdown.payouts {
            writeln!(out, "{} wins {}", players[payout.seat].name(), payout.amount)?;
        }
    }

    let stacks: Vec<String> = players
        .iter()
        .map(|p| format!("{} {}", p.name(), p.stack()))
        .collect();
    writeln!(out, "Stacks: {}", stacks.join(", "))?;
    Ok(())
}
