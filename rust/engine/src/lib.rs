//! # tablestakes-engine: Texas Hold'em Rules Engine
//!
//! A multi-seat no-limit Hold'em betting engine. Enforces legal wagering
//! across streets, deals the board, and resolves showdowns with a
//! best-five-of-seven hand evaluator. Seats are played by any
//! [`provider::ActionProvider`]: a console prompt, a bot, or a test script.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and index encoding
//! - [`deck`] - Seeded, tail-dealt 52-card deck
//! - [`player`] - Seat state and the pure action transition
//! - [`rules`] - Action validation against the current street
//! - [`hand`] - Five-card scoring and best-of-seven evaluation
//! - [`pot`] - Splitting the pot between tied winners
//! - [`game`] - The hand state machine: blinds, turn order, streets, showdown
//! - [`engine`] - Driver loop asking providers for decisions
//! - [`provider`] - The decision interface and the observation it receives
//! - [`history`] - Phases, action log entries and showdown records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_engine::cards::Card;
//! use tablestakes_engine::hand::{evaluate, Category};
//!
//! let hole: Vec<Card> = ["As", "Ad"].iter().map(|c| c.parse().unwrap()).collect();
//! let board: Vec<Card> = ["Ac", "7h", "7d", "2s", "9c"]
//!     .iter()
//!     .map(|c| c.parse().unwrap())
//!     .collect();
//!
//! let result = evaluate(&hole, &board);
//! assert_eq!(result.rank.category, Category::FullHouse);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! A [`game::Game`] built with a seed deals the same sequence of hands:
//!
//! ```rust
//! use tablestakes_engine::game::Game;
//! use tablestakes_engine::player::Player;
//!
//! let seats = || vec![Player::new("a", 1000), Player::new("b", 1000)];
//! let mut g1 = Game::new(seats(), 20, Some(42)).unwrap();
//! let mut g2 = Game::new(seats(), 20, Some(42)).unwrap();
//! g1.start_new_hand().unwrap();
//! g2.start_new_hand().unwrap();
//! assert_eq!(g1.players()[0].hole_cards(), g2.players()[0].hole_cards());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod history;
pub mod player;
pub mod pot;
pub mod provider;
pub mod rules;
