//! Bots with a fixed strategy.

use tablestakes_engine::history::ActionRecord;
use tablestakes_engine::player::PlayerAction;
use tablestakes_engine::provider::{ActionProvider, ActionRequest, Observation, ProviderError};

/// How far above the current bet [`RaiseBot`] raises by default.
pub const DEFAULT_RAISE_STEP: u32 = 40;

/// Folds every time it is asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldBot;

impl ActionProvider for FoldBot {
    fn name(&self) -> &str {
        "FoldBot"
    }

    fn decide(&mut self, _: &Observation, _: &[ActionRecord]) -> Result<ActionRequest, ProviderError> {
        Ok(ActionRequest::fold())
    }
}

/// Checks when it is free, otherwise calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallBot;

impl ActionProvider for CallBot {
    fn name(&self) -> &str {
        "CallBot"
    }

    fn decide(&mut self, state: &Observation, _: &[ActionRecord]) -> Result<ActionRequest, ProviderError> {
        Ok(if state.to_call() == 0 {
            ActionRequest::check()
        } else {
            ActionRequest::call()
        })
    }
}

/// Raises to the current bet plus a fixed step while its stack covers it,
/// then moves all-in.
#[derive(Debug, Clone, Copy)]
pub struct RaiseBot {
    step: u32,
}

impl RaiseBot {
    pub fn new(step: u32) -> Self {
        Self { step: step.max(1) }
    }

    /// The street total this bot aims for.
    pub fn target(&self, state: &Observation) -> u32 {
        // an opening bet must still clear the big blind
        let floor = if state.current_bet > 0 {
            state.current_bet
        } else {
            state.big_blind
        };
        state.current_bet.saturating_add(self.step).max(floor.saturating_add(1))
    }
}

impl Default for RaiseBot {
    fn default() -> Self {
        Self::new(DEFAULT_RAISE_STEP)
    }
}

impl ActionProvider for RaiseBot {
    fn name(&self) -> &str {
        "RaiseBot"
    }

    fn decide(&mut self, state: &Observation, _: &[ActionRecord]) -> Result<ActionRequest, ProviderError> {
        let target = self.target(state);
        if state.own_stack() + state.bet_amount > target {
            Ok(ActionRequest::new(PlayerAction::Raise, target))
        } else {
            Ok(ActionRequest::new(PlayerAction::AllIn, 0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablestakes_engine::history::Phase;

    fn obs(current_bet: u32, bet_amount: u32, stack: u32) -> Observation {
        Observation {
            hole: [1, 2],
            board: [0; 5],
            pot: current_bet + bet_amount,
            current_bet,
            big_blind: 20,
            active_seat: 0,
            player_count: 2,
            stacks: vec![stack, 1000],
            hand_number: 1,
            phase: Phase::PreFlop,
            bet_amount,
        }
    }

    #[test]
    fn call_bot_checks_when_free() {
        let mut bot = CallBot;
        assert_eq!(bot.decide(&obs(0, 0, 500), &[]).unwrap(), ActionRequest::check());
        assert_eq!(bot.decide(&obs(40, 20, 500), &[]).unwrap(), ActionRequest::call());
    }

    #[test]
    fn fold_bot_always_folds() {
        let mut bot = FoldBot;
        assert_eq!(bot.decide(&obs(0, 0, 500), &[]).unwrap().action, PlayerAction::Fold);
    }

    #[test]
    fn raise_bot_raises_by_step() {
        let mut bot = RaiseBot::default();
        let req = bot.decide(&obs(20, 0, 500), &[]).unwrap();
        assert_eq!(req, ActionRequest::new(PlayerAction::Raise, 60));
    }

    #[test]
    fn raise_bot_opening_bet_clears_big_blind() {
        let bot = RaiseBot::new(10);
        assert_eq!(bot.target(&obs(0, 0, 500)), 21);
        assert_eq!(RaiseBot::default().target(&obs(0, 0, 500)), 40);
    }

    #[test]
    fn raise_bot_shoves_when_short() {
        let mut bot = RaiseBot::default();
        let req = bot.decide(&obs(100, 0, 140), &[]).unwrap();
        assert_eq!(req.action, PlayerAction::AllIn);
        // stack plus street bet covers the target
        let req = bot.decide(&obs(100, 50, 100), &[]).unwrap();
        assert_eq!(req, ActionRequest::new(PlayerAction::Raise, 140));
    }
}
