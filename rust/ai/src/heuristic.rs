//! Hand-strength bot with a simple model of its opponents.
//!
//! Strength is rated on a 0-10 scale: a lookup on hole-card shape before the
//! flop, the evaluator's category plus draws after it. What the bot does with
//! that rating depends on the street, on how the rest of the table has been
//! playing, and on a one-in-ten impulse to move all-in.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use tablestakes_engine::cards::Card;
use tablestakes_engine::hand::{evaluate, Category};
use tablestakes_engine::history::{ActionRecord, Phase};
use tablestakes_engine::player::PlayerAction;
use tablestakes_engine::provider::{ActionProvider, ActionRequest, Observation, ProviderError};

/// How the rest of the table has been playing, from this bot's point of view.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Tendency {
    Neutral,
    VeryAggressive,
    Aggressive,
    TightPassive,
    Tight,
    LooseAggressive,
    Loose,
}

/// Running tally of what opponents have done.
#[derive(Debug, Clone, Default)]
pub struct OpponentModel {
    raises: u32,
    calls: u32,
    folds: u32,
    checks: u32,
    avg_stack: Option<u32>,
}

impl OpponentModel {
    pub fn record(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::Bet | PlayerAction::Raise | PlayerAction::AllIn => self.raises += 1,
            PlayerAction::Call => self.calls += 1,
            PlayerAction::Fold => self.folds += 1,
            PlayerAction::Check => self.checks += 1,
        }
    }

    pub fn set_stacks(&mut self, stacks: impl Iterator<Item = u32>) {
        let (sum, n) = stacks.fold((0u64, 0u64), |(s, n), x| (s + u64::from(x), n + 1));
        self.avg_stack = (n > 0).then(|| (sum / n) as u32);
    }

    pub fn total(&self) -> u32 {
        self.raises + self.calls + self.folds + self.checks
    }

    /// Classifies the table against `own_stack`.
    pub fn tendency(&self, own_stack: u32) -> Tendency {
        let total = self.total();
        if total == 0 {
            return Tendency::Neutral;
        }
        let share = |n: u32| n as f32 / total as f32;
        let avg = self.avg_stack.unwrap_or(1) as f32;
        let own = own_stack as f32;
        let deep = avg > own * 1.5;

        if share(self.raises) > 0.4 {
            if deep {
                Tendency::VeryAggressive
            } else {
                Tendency::Aggressive
            }
        } else if share(self.folds) > 0.5 {
            if avg < own * 0.5 {
                Tendency::TightPassive
            } else {
                Tendency::Tight
            }
        } else if share(self.calls) > 0.5 {
            if deep {
                Tendency::LooseAggressive
            } else {
                Tendency::Loose
            }
        } else {
            Tendency::Neutral
        }
    }
}

/// Rates two hole cards on a 0-10 scale.
///
/// - 9-10: premium pairs and big suited aces
/// - 7-8: strong pairs and broadway aces
/// - 5-6: middle pairs, suited broadways, suited connectors
/// - 3-4: small pairs, weak aces, connected cards
/// - 0-2: everything else
pub fn preflop_strength(hole: &[Card]) -> u8 {
    let [c1, c2] = hole else {
        return 0;
    };
    let (r1, r2) = (c1.rank.value(), c2.rank.value());
    let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
    let suited = c1.suit == c2.suit;
    let gap = high - low;

    if gap == 0 {
        return match high {
            13..=14 => 10,
            11..=12 => 9,
            10 => 8,
            9 => 7,
            7..=8 => 6,
            _ => 4,
        };
    }

    let base = match (high, low) {
        (14, 13) => 8,
        (14, 12) => 7,
        (14, 10..=11) | (13, 11..=12) => 6,
        (14, _) | (13, 10) | (12, 10..=11) => 4,
        _ if gap == 1 && high >= 10 => 4,
        _ if gap <= 2 => 3,
        _ if high >= 11 && low >= 9 => 3,
        _ => 1,
    };
    if suited { (base + 2).min(10) } else { base }
}

/// Rates hole cards plus a board of three or more cards on a 0-10 scale.
///
/// Draws only count while cards are still to come.
pub fn postflop_strength(hole: &[Card], board: &[Card]) -> u8 {
    let made = match evaluate(hole, board).rank.category {
        Category::RoyalFlush | Category::StraightFlush | Category::FourOfAKind => 10,
        Category::FullHouse | Category::Flush => 9,
        Category::Straight => 8,
        Category::ThreeOfAKind => 7,
        Category::TwoPair => 6,
        Category::OnePair => 5,
        Category::HighCard => 3,
    };
    if made < 5 && board.len() < 5 && has_draw(hole, board) {
        return 4;
    }
    made
}

fn has_draw(hole: &[Card], board: &[Card]) -> bool {
    let cards: Vec<Card> = hole.iter().chain(board).copied().collect();

    let mut suits = [0u8; 4];
    for c in &cards {
        suits[c.suit.ordinal() as usize] += 1;
    }
    if suits.iter().any(|&n| n == 4) {
        return true;
    }

    // four distinct ranks inside a five-rank window, ace playing both ends
    let mut present = [false; 15];
    for c in &cards {
        present[c.rank.value() as usize] = true;
        if c.rank.value() == 14 {
            present[1] = true;
        }
    }
    (1..=10).any(|low| (low..low + 5).filter(|&r| present[r]).count() >= 4)
}

/// Bot combining hand strength with an opponent model.
#[derive(Debug, Clone)]
pub struct HeuristicBot {
    rng: ChaCha20Rng,
    model: OpponentModel,
    initial_stack: Option<u32>,
    hand_number: u32,
    seen: usize,
    /// Log positions this bot's own actions land at in the current hand
    own: Vec<usize>,
}

impl HeuristicBot {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed.unwrap_or_else(rand::random)),
            model: OpponentModel::default(),
            initial_stack: None,
            hand_number: 0,
            seen: 0,
            own: Vec::new(),
        }
    }

    pub fn model(&self) -> &OpponentModel {
        &self.model
    }

    fn observe(&mut self, state: &Observation, history: &[ActionRecord]) {
        if state.hand_number != self.hand_number {
            self.hand_number = state.hand_number;
            self.seen = 0;
            self.own.clear();
        }
        let start = self.seen.min(history.len());
        for (i, record) in history.iter().enumerate().skip(start) {
            if !self.own.contains(&i) {
                self.model.record(record.action);
            }
        }
        self.seen = history.len();
        // whatever this decision turns into is logged next
        if !self.own.contains(&history.len()) {
            self.own.push(history.len());
        }

        let me = state.active_seat;
        self.model.set_stacks(
            state
                .stacks
                .iter()
                .enumerate()
                .filter(|&(seat, _)| seat != me)
                .map(|(_, &s)| s),
        );
    }

    fn raise_to(&self, state: &Observation, by: u32) -> ActionRequest {
        let floor = if state.current_bet > 0 {
            state.current_bet
        } else {
            state.big_blind
        };
        let target = state.current_bet.saturating_add(by).max(floor.saturating_add(1));
        if target >= state.own_stack() + state.bet_amount {
            ActionRequest::new(PlayerAction::AllIn, 0)
        } else {
            ActionRequest::new(PlayerAction::Raise, target)
        }
    }

    fn call_or_check(state: &Observation) -> ActionRequest {
        if state.to_call() == 0 {
            ActionRequest::check()
        } else {
            ActionRequest::call()
        }
    }

    fn fold_or_check(state: &Observation) -> ActionRequest {
        if state.to_call() == 0 {
            ActionRequest::check()
        } else {
            ActionRequest::fold()
        }
    }

    /// Picks an action for a given strength and table read.
    pub fn choose(&mut self, state: &Observation, strength: u8, tendency: Tendency) -> ActionRequest {
        let all_in = ActionRequest::new(PlayerAction::AllIn, 0);
        let stack = state.own_stack();
        if stack == 0 {
            return Self::call_or_check(state);
        }
        if self.rng.random_range(1..=10) == 7 {
            return all_in;
        }
        if state.to_call() > stack && strength >= 9 {
            return all_in;
        }
        match state.phase {
            Phase::River if strength >= 9 => return all_in,
            Phase::Flop if strength >= 10 => return all_in,
            Phase::Turn if strength >= 9 => return self.raise_to(state, 100),
            _ => {}
        }

        match strength {
            8..=10 => {
                let keen = matches!(tendency, Tendency::Aggressive | Tendency::Loose);
                let healthy = self
                    .initial_stack
                    .is_none_or(|initial| stack as f32 > initial as f32 * 0.7);
                if keen && healthy {
                    let by = if self.rng.random_bool(0.5) && stack > 50 {
                        self.rng.random_range(50..stack)
                    } else {
                        50
                    };
                    self.raise_to(state, by)
                } else {
                    Self::call_or_check(state)
                }
            }
            6..=7 => Self::call_or_check(state),
            _ if tendency == Tendency::Loose => Self::call_or_check(state),
            _ => Self::fold_or_check(state),
        }
    }
}

impl Default for HeuristicBot {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ActionProvider for HeuristicBot {
    fn name(&self) -> &str {
        "HeuristicBot"
    }

    fn decide(&mut self, state: &Observation, history: &[ActionRecord]) -> Result<ActionRequest, ProviderError> {
        if self.initial_stack.is_none() {
            self.initial_stack = Some(state.own_stack() + state.bet_amount);
        }
        self.observe(state, history);

        let hole = state.hole_cards();
        let board = state.board_cards();
        let strength = if board.len() >= 3 {
            postflop_strength(&hole, &board)
        } else {
            preflop_strength(&hole)
        };
        let tendency = self.model.tendency(state.own_stack());
        let request = self.choose(state, strength, tendency);
        debug!(
            seat = state.active_seat,
            strength,
            ?tendency,
            action = request.action.as_str(),
            amount = request.amount,
            "heuristic decision"
        );
        Ok(request)
    }
}
