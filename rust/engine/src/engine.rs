use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::GameError;
use crate::game::Game;
use crate::history::{ActionRecord, Showdown};
use crate::provider::ActionProvider;

/// Consecutive rejected or failed decisions before a seat is folded.
pub const MAX_INVALID_ATTEMPTS: u32 = 3;

/// What a finished hand left behind.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandSummary {
    pub hand_number: u32,
    pub actions: Vec<ActionRecord>,
    pub showdown: Option<Showdown>,
    /// Stacks after payout, in seat order
    pub stacks: Vec<u32>,
    /// Seats folded by the driver after repeated invalid actions
    pub forced_folds: Vec<usize>,
}

/// Drives a [`Game`] by asking each seat's provider in turn.
///
/// Providers are passed per call and indexed by seat, so the caller keeps
/// ownership of them (and of any state they carry) between hands.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::engine::Engine;
/// use tablestakes_engine::game::Game;
/// use tablestakes_engine::history::{ActionRecord, Phase};
/// use tablestakes_engine::player::Player;
/// use tablestakes_engine::provider::{ActionProvider, ActionRequest, Observation, ProviderError};
///
/// struct Passive;
///
/// impl ActionProvider for Passive {
///     fn name(&self) -> &str {
///         "passive"
///     }
///     fn decide(&mut self, s: &Observation, _: &[ActionRecord]) -> Result<ActionRequest, ProviderError> {
///         Ok(if s.to_call() == 0 { ActionRequest::check() } else { ActionRequest::call() })
///     }
/// }
///
/// let game = Game::new(vec![Player::new("a", 500), Player::new("b", 500)], 10, Some(1)).unwrap();
/// let mut engine = Engine::new(game);
/// let (mut a, mut b) = (Passive, Passive);
/// let summary = engine.play_hand(&mut [&mut a, &mut b]).unwrap();
/// assert_eq!(summary.stacks.iter().sum::<u32>(), 1000);
/// assert_eq!(engine.game().phase(), Phase::Showdown);
/// ```
#[derive(Debug)]
pub struct Engine {
    game: Game,
    max_invalid: u32,
}

impl Engine {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            max_invalid: MAX_INVALID_ATTEMPTS,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays one complete hand.
    ///
    /// # Errors
    ///
    /// [`GameError::SeatCountMismatch`] if `seats` does not cover every seat,
    /// or whatever [`Game::start_new_hand`] reports.
    pub fn play_hand(
        &mut self,
        seats: &mut [&mut dyn ActionProvider],
    ) -> Result<HandSummary, GameError> {
        let expected = self.game.players().len();
        if seats.len() != expected {
            return Err(GameError::SeatCountMismatch {
                expected,
                actual: seats.len(),
            });
        }

        self.game.start_new_hand()?;
        let mut invalid = 0;
        let mut forced_folds = Vec::new();

        while !self.game.is_hand_over() {
            let seat = self.game.active_seat();
            if invalid >= self.max_invalid {
                forced_folds.push(seat);
                self.game.force_fold()?;
                invalid = 0;
                continue;
            }

            let state = self.game.observation();
            let provider = &mut seats[seat];
            match provider.decide(&state, self.game.history()) {
                Ok(request) => match self.game.player_action(request.action, request.amount) {
                    Ok(_) => invalid = 0,
                    Err(e) => {
                        debug!(seat, provider = provider.name(), error = %e, "invalid action");
                        invalid += 1;
                    }
                },
                Err(e) => {
                    warn!(seat, provider = provider.name(), error = %e, "provider failed");
                    invalid += 1;
                }
            }
        }

        Ok(HandSummary {
            hand_number: self.game.hand_number(),
            actions: self.game.history().to_vec(),
            showdown: self.game.last_showdown().cloned(),
            stacks: self.game.players().iter().map(|p| p.stack()).collect(),
            forced_folds,
        })
    }

    /// Plays up to `hands` hands, stopping early once fewer than two seats
    /// have chips.
    pub fn play_hands(
        &mut self,
        hands: u32,
        seats: &mut [&mut dyn ActionProvider],
    ) -> Result<Vec<HandSummary>, GameError> {
        let mut summaries = Vec::with_capacity(hands as usize);
        for _ in 0..hands {
            if self.game.seats_with_chips() < 2 {
                break;
            }
            summaries.push(self.play_hand(seats)?);
        }
        Ok(summaries)
    }
}
