//! `sim`: bots play each other for a number of hands.

use std::io::Write;

use serde::Serialize;
use tablestakes_ai::create_ai;
use tablestakes_engine::engine::Engine;
use tablestakes_engine::game::Game;
use tablestakes_engine::player::Player;
use tablestakes_engine::provider::ActionProvider;
use tracing::info;

use crate::cli::TableArgs;
use crate::config;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct SeatReport {
    seat: usize,
    name: String,
    stack: u32,
    net: i64,
    hands_won: u32,
    forced_folds: u32,
}

#[derive(Debug, Serialize)]
struct SimReport {
    seed: u64,
    opponent: String,
    big_blind: u32,
    starting_stack: u32,
    hands_requested: u32,
    hands_played: usize,
    seats: Vec<SeatReport>,
}

/// Plays `hands` hands with every seat run by the configured bot kind.
///
/// Stops early once fewer than two seats have chips. Bot `i` is seeded with
/// `seed + i + 1`, so a seeded run is fully reproducible.
pub fn handle_sim_command(
    hands: u32,
    table: &TableArgs,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::resolve(table)?.config;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let seat_count = usize::from(cfg.players);

    let mut bots: Vec<Box<dyn ActionProvider>> = (0..seat_count)
        .map(|i| create_ai(&cfg.opponent, Some(seed.wrapping_add(i as u64 + 1))))
        .collect::<Result<_, _>>()?;
    let players: Vec<Player> = bots
        .iter()
        .enumerate()
        .map(|(i, b)| Player::new(format!("{} {}", b.name(), i + 1), cfg.starting_stack))
        .collect();

    let game = Game::new(players, cfg.big_blind, Some(seed))?;
    let chips = game.chip_total();
    let mut engine = Engine::new(game);
    info!(seed, hands, seats = seat_count, opponent = %cfg.opponent, "simulation start");

    let summaries = {
        let mut seats: Vec<&mut dyn ActionProvider> = Vec::with_capacity(seat_count);
        for bot in bots.iter_mut() {
            seats.push(bot.as_mut());
        }
        engine.play_hands(hands, &mut seats)?
    };

    let game = engine.game();
    if game.chip_total() != chips {
        return Err(CliError::Engine(format!(
            "chip total changed from {} to {}",
            chips,
            game.chip_total()
        )));
    }

    let mut seats: Vec<SeatReport> = game
        .players()
        .iter()
        .enumerate()
        .map(|(seat, p)| SeatReport {
            seat,
            name: p.name().to_string(),
            stack: p.stack(),
            net: i64::from(p.stack()) - i64::from(cfg.starting_stack),
            hands_won: 0,
            forced_folds: 0,
        })
        .collect();
    for summary in &summaries {
        if let Some(showdown) = &summary.showdown {
            for seat in showdown.winners() {
                seats[seat].hands_won += 1;
            }
        }
        for &seat in &summary.forced_folds {
            seats[seat].forced_folds += 1;
        }
    }

    let report = SimReport {
        seed,
        opponent: cfg.opponent.clone(),
        big_blind: cfg.big_blind,
        starting_stack: cfg.starting_stack,
        hands_requested: hands,
        hands_played: summaries.len(),
        seats,
    };

    if json {
        let text = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    writeln!(
        out,
        "sim: players={} hands={} seed={} opponent={}",
        seat_count, hands, seed, report.opponent
    )?;
    writeln!(out, "Hands played: {}", report.hands_played)?;
    for s in &report.seats {
        writeln!(
            out,
            "{}: stack {} ({:+}) won {}",
            s.name, s.stack, s.net, s.hands_won
        )?;
    }
    Ok(())
}
