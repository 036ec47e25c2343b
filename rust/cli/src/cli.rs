//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tablestakes",
    version,
    about = "No-limit Texas Hold'em at the terminal"
)]
pub struct TablestakesCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Table settings a command may override. Unset flags fall back to the
/// resolved configuration.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Number of seats, including yours when playing
    #[arg(long, value_parser = clap::value_parser!(u8).range(2..=10))]
    pub players: Option<u8>,
    /// RNG seed; the same seed deals the same hands
    #[arg(long)]
    pub seed: Option<u64>,
    /// Big blind (there is no small blind)
    #[arg(long)]
    pub big_blind: Option<u32>,
    /// Chips each seat starts with
    #[arg(long)]
    pub stack: Option<u32>,
    /// Bot kind for the other seats: fold, call, raise or heuristic
    #[arg(long)]
    pub opponent: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against bots from seat 0
    Play {
        #[arg(long, default_value_t = 1)]
        hands: u32,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Let bots play each other and report the results
    Sim {
        #[arg(long, default_value_t = 100)]
        hands: u32,
        #[command(flatten)]
        table: TableArgs,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Deal one hand face up: hole cards for every seat and a full board
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
    },
    /// Rank five to seven cards, e.g. `rank As Ks Qs Js Ts`
    Rank {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
