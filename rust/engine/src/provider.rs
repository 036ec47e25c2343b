//! The decision boundary between the rules engine and whoever plays a seat.
//!
//! A provider sees an [`Observation`] of the table from the acting seat's
//! point of view plus the hand's action log, and answers with an
//! [`ActionRequest`]. The engine validates the request; providers never touch
//! game state directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::history::{ActionRecord, Phase};
use crate::player::PlayerAction;

/// A provider's answer: an action kind and its amount.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: PlayerAction,
    pub amount: u32,
}

impl ActionRequest {
    pub fn new(action: PlayerAction, amount: u32) -> Self {
        Self { action, amount }
    }

    pub fn fold() -> Self {
        Self::new(PlayerAction::Fold, 0)
    }

    pub fn check() -> Self {
        Self::new(PlayerAction::Check, 0)
    }

    pub fn call() -> Self {
        Self::new(PlayerAction::Call, 0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Table state as seen by the seat about to act.
///
/// Cards are encoded with [`Card::index`]; 0 marks an undealt slot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub hole: [u32; 2],
    pub board: [u32; 5],
    /// Every chip committed this hand, including the current street
    pub pot: u32,
    pub current_bet: u32,
    pub big_blind: u32,
    pub active_seat: usize,
    pub player_count: usize,
    /// Stacks in seat order
    pub stacks: Vec<u32>,
    pub hand_number: u32,
    pub phase: Phase,
    /// The acting seat's street total so far
    pub bet_amount: u32,
}

impl Observation {
    /// Flattens into the numeric vector handed to learned policies:
    /// hole, board, pot, current bet, big blind, active seat, player count,
    /// stacks, hand number.
    pub fn to_vec(&self) -> Vec<u32> {
        let mut v = Vec::with_capacity(12 + self.stacks.len());
        v.extend_from_slice(&self.hole);
        v.extend_from_slice(&self.board);
        v.push(self.pot);
        v.push(self.current_bet);
        v.push(self.big_blind);
        v.push(self.active_seat as u32);
        v.push(self.player_count as u32);
        v.extend_from_slice(&self.stacks);
        v.push(self.hand_number);
        v
    }

    pub fn hole_cards(&self) -> Vec<Card> {
        self.hole.iter().filter_map(|&i| Card::from_index(i)).collect()
    }

    pub fn board_cards(&self) -> Vec<Card> {
        self.board.iter().filter_map(|&i| Card::from_index(i)).collect()
    }

    pub fn to_call(&self) -> u32 {
        self.current_bet.saturating_sub(self.bet_amount)
    }

    pub fn own_stack(&self) -> u32 {
        self.stacks.get(self.active_seat).copied().unwrap_or(0)
    }
}

/// Anything that can choose actions for a seat: a console prompt, a bot,
/// or a scripted test double.
///
/// `decide` blocks until an answer is ready. Errors are not fatal; the
/// driver counts them as invalid attempts.
pub trait ActionProvider {
    fn name(&self) -> &str;

    fn decide(
        &mut self,
        state: &Observation,
        history: &[ActionRecord],
    ) -> Result<ActionRequest, ProviderError>;
}
