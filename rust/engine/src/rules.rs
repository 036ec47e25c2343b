use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// What validation needs to know about the street and the acting seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    /// Highest street total any seat has committed
    pub current_bet: u32,
    pub big_blind: u32,
    /// Acting seat's remaining stack
    pub stack: u32,
    /// Acting seat's street total so far
    pub bet_amount: u32,
}

impl BetContext {
    pub fn to_call(&self) -> u32 {
        self.current_bet.saturating_sub(self.bet_amount)
    }

    /// The street total a bet or raise must strictly exceed.
    pub fn min_total(&self) -> u32 {
        if self.current_bet > 0 {
            self.current_bet
        } else {
            self.big_blind
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedAction {
    pub action: A,
    /// Chips to call for `Call`, target street total for `Bet`/`Raise`
    pub amount: u32,
}

/// Validates a requested action before anything is mutated.
///
/// Normalises the request on the way through: a call's amount is always
/// recomputed from the context, bet and raise are reclassified by whether a
/// bet is already open, and bet/raise targets are capped at what the seat
/// can actually reach.
///
/// # Errors
///
/// - [`GameError::IllegalCheck`] - checking while facing a bet
/// - [`GameError::BetTooSmall`] - bet/raise total at or below [`BetContext::min_total`]
/// - [`GameError::NoChipsToCommit`] - all-in with an empty stack
///
/// # Examples
///
/// ```
/// use tablestakes_engine::rules::{validate_action, BetContext};
/// use tablestakes_engine::player::PlayerAction;
///
/// let ctx = BetContext { current_bet: 40, big_blind: 20, stack: 1000, bet_amount: 20 };
///
/// let v = validate_action(&ctx, PlayerAction::Call, 999).unwrap();
/// assert_eq!(v.amount, 20);
///
/// let v = validate_action(&ctx, PlayerAction::Bet, 100).unwrap();
/// assert_eq!(v.action, PlayerAction::Raise);
///
/// assert!(validate_action(&ctx, PlayerAction::Raise, 40).is_err());
/// ```
pub fn validate_action(
    ctx: &BetContext,
    action: A,
    amount: u32,
) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction {
            action: A::Fold,
            amount: 0,
        }),
        A::Check => {
            if ctx.current_bet > ctx.bet_amount {
                Err(GameError::IllegalCheck {
                    current_bet: ctx.current_bet,
                    committed: ctx.bet_amount,
                })
            } else {
                Ok(ValidatedAction {
                    action: A::Check,
                    amount: 0,
                })
            }
        }
        A::Call => Ok(ValidatedAction {
            action: A::Call,
            amount: ctx.to_call(),
        }),
        A::Bet | A::Raise => {
            let action = if ctx.current_bet > 0 { A::Raise } else { A::Bet };
            let target = amount.min(ctx.stack.saturating_add(ctx.bet_amount));
            let minimum = ctx.min_total();
            // A total equal to the minimum is rejected as well.
            if target <= minimum {
                return Err(GameError::BetTooSmall {
                    amount: target,
                    minimum,
                });
            }
            Ok(ValidatedAction {
                action,
                amount: target,
            })
        }
        A::AllIn => {
            if ctx.stack == 0 {
                Err(GameError::NoChipsToCommit)
            } else {
                Ok(ValidatedAction {
                    action: A::AllIn,
                    amount: ctx.stack,
                })
            }
        }
    }
}
