use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandResult;
use crate::player::PlayerAction;
use crate::pot::Payout;

/// Stage of a hand. Moves forward only; `Showdown` is terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Between construction and the first hand
    Setup,
    /// Hole cards dealt, big blind posted
    PreFlop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hand resolved, pot paid out
    Showdown,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::PreFlop => "pre-flop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        }
    }

    /// Betting street that follows, with how many board cards it deals.
    pub fn next_street(self) -> Option<(Phase, usize)> {
        match self {
            Phase::PreFlop => Some((Phase::Flop, 3)),
            Phase::Flop => Some((Phase::Turn, 1)),
            Phase::Turn => Some((Phase::River, 1)),
            Phase::Setup | Phase::River | Phase::Showdown => None,
        }
    }
}

/// One applied action, as every provider sees it in the hand's log.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub phase: Phase,
    pub actor: String,
    /// The realized action, which may differ from the one requested
    pub action: PlayerAction,
    pub amount: u32,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ShowdownKind {
    /// Everyone else folded; no cards were compared
    Uncontested,
    /// Hands were evaluated
    Evaluated,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatHand {
    pub seat: usize,
    pub hole: Vec<Card>,
    pub result: HandResult,
}

/// How a finished hand was resolved.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Showdown {
    pub kind: ShowdownKind,
    pub board: Vec<Card>,
    /// Empty for uncontested pots
    pub hands: Vec<SeatHand>,
    pub payouts: Vec<Payout>,
    /// Winners who put in less than another contender. With a single pot they
    /// can collect chips they never contested.
    #[serde(default)]
    pub overpaid: Vec<usize>,
}

impl Showdown {
    pub fn winners(&self) -> Vec<usize> {
        self.payouts.iter().map(|p| p.seat).collect()
    }
}
