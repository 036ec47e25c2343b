//! # tablestakes-ai: Bot Players for the Hold'em Engine
//!
//! Ready-made [`ActionProvider`] implementations that can sit at any seat of
//! a [`tablestakes_engine::game::Game`] driven by
//! [`tablestakes_engine::engine::Engine`].
//!
//! ## Core Components
//!
//! - [`bots`] - Fixed-strategy bots: always fold, always call, keep raising
//! - [`heuristic`] - Hand-strength bot that models its opponents
//! - [`scripted`] - Replays a fixed list of requests; for tests and demos
//! - [`create_ai`] - Factory building a bot from its kind name
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_ai::create_ai;
//! use tablestakes_engine::engine::Engine;
//! use tablestakes_engine::game::Game;
//! use tablestakes_engine::player::Player;
//!
//! let players = vec![Player::new("north", 500), Player::new("south", 500)];
//! let mut engine = Engine::new(Game::new(players, 10, Some(42)).unwrap());
//!
//! let mut a = create_ai("heuristic", Some(1)).unwrap();
//! let mut b = create_ai("call", None).unwrap();
//! let summary = engine.play_hand(&mut [a.as_mut(), b.as_mut()]).unwrap();
//! assert_eq!(summary.stacks.iter().sum::<u32>(), 1000);
//! ```
//!
//! ## Bot Kinds
//!
//! - `"fold"` - [`bots::FoldBot`]
//! - `"call"` - [`bots::CallBot`]
//! - `"raise"` - [`bots::RaiseBot`]
//! - `"heuristic"` - [`heuristic::HeuristicBot`]

use tablestakes_engine::provider::ActionProvider;
use thiserror::Error;

pub mod bots;
pub mod heuristic;
pub mod scripted;

/// Kind names accepted by [`create_ai`].
pub const KINDS: [&str; 4] = ["fold", "call", "raise", "heuristic"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown opponent kind: {0} (expected one of fold, call, raise, heuristic)")]
    UnknownKind(String),
}

/// Builds a bot by kind name.
///
/// `seed` only matters for bots that randomise; `None` seeds from entropy.
///
/// # Example
///
/// ```rust
/// use tablestakes_ai::create_ai;
///
/// let bot = create_ai("raise", None).unwrap();
/// assert_eq!(bot.name(), "RaiseBot");
/// assert!(create_ai("psychic", None).is_err());
/// ```
pub fn create_ai(kind: &str, seed: Option<u64>) -> Result<Box<dyn ActionProvider>, AiError> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "fold" => Ok(Box::new(bots::FoldBot)),
        "call" => Ok(Box::new(bots::CallBot)),
        "raise" => Ok(Box::new(bots::RaiseBot::default())),
        "heuristic" => Ok(Box::new(heuristic::HeuristicBot::new(seed))),
        _ => Err(AiError::UnknownKind(kind.to_string())),
    }
}
