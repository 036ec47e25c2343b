//! # tablestakes CLI Library
//!
//! Command-line front-end for the tablestakes Hold'em engine: play against
//! bots at the terminal, run bot-only simulations, and inspect deals and
//! hand rankings.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand, writing to the
//! streams it is handed and returning the process exit code. [`run_with_input`]
//! does the same with an explicit input stream for `play`.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = tablestakes_cli::run(["tablestakes", "deal", "--seed", "42"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Board: "));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands from seat 0 against bots
//! - `sim`: Let bots play each other and report stacks
//! - `deal`: Deal a single hand face up
//! - `rank`: Evaluate five to seven cards
//! - `cfg`: Display the resolved configuration

use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
pub mod console;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, TablestakesCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_rank_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "rank", "cfg"];

/// Main entry point for the CLI application. `play` reads from stdin.
///
/// Exit code: `0` for success, `2` for errors, `130` when input closes
/// during `play`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// [`run`] with the input stream for `play` supplied by the caller.
///
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("q\n");
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let code = tablestakes_cli::run_with_input(
///     ["tablestakes", "play", "--players", "2", "--seed", "1", "--opponent", "call"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TablestakesCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play { hands, table } => handle_play_command(hands, &table, input, out, err),
        Commands::Sim { hands, table, json } => handle_sim_command(hands, &table, json, out),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Rank { cards } => handle_rank_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = ui::write_error(err, &format!("Interrupted: {}", msg));
            exit_code::INTERRUPTED
        }
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, e: &clap::Error) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "tablestakes Hold'em CLI")?;
    writeln!(err, "Usage: tablestakes <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: tablestakes --help")
}
