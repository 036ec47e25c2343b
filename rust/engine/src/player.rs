use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Represents a player action during a betting round.
/// Amounts travel separately; see [`transition`] for how each kind reads them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if nothing to call)
    Check,
    /// Match the current bet
    Call,
    /// Open the betting on a street
    Bet,
    /// Raise to a new street total
    Raise,
    /// Commit every remaining chip
    AllIn,
}

impl PlayerAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerAction::Fold => "fold",
            PlayerAction::Check => "check",
            PlayerAction::Call => "call",
            PlayerAction::Bet => "bet",
            PlayerAction::Raise => "raise",
            PlayerAction::AllIn => "all-in",
        }
    }
}

/// Seat status within the current hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Still able to act
    Active,
    /// Gave up the hand
    Folded,
    /// Every chip committed; contests the pot without acting
    AllIn,
    /// Started the hand with no chips
    Out,
}

/// The per-seat numbers an action changes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Wager {
    pub status: PlayerStatus,
    pub stack: u32,
    pub bet_amount: u32,
}

/// Outcome of applying one action to a [`Wager`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Transition {
    /// What actually happened; a call or raise that empties the stack becomes `AllIn`.
    pub action: PlayerAction,
    /// Chips moved from stack to bet.
    pub amount: u32,
    pub wager: Wager,
}

/// Applies a single action to a seat's wager without touching anything else.
///
/// `amount` is the chips to put in for `Call`, and the target street total
/// for `Bet` and `Raise`. It is ignored for `Fold`, `Check` and `AllIn`.
///
/// ```
/// use tablestakes_engine::player::{transition, PlayerAction, PlayerStatus, Wager};
///
/// let w = Wager { status: PlayerStatus::Active, stack: 100, bet_amount: 20 };
/// let t = transition(w, PlayerAction::Raise, 60);
/// assert_eq!(t.amount, 40);
/// assert_eq!(t.wager.bet_amount, 60);
/// assert_eq!(t.wager.stack, 60);
/// ```
pub fn transition(wager: Wager, action: PlayerAction, amount: u32) -> Transition {
    let Wager {
        status,
        stack,
        bet_amount,
    } = wager;
    let moved = match action {
        PlayerAction::Fold => {
            return Transition {
                action,
                amount: 0,
                wager: Wager {
                    status: PlayerStatus::Folded,
                    ..wager
                },
            };
        }
        PlayerAction::Check => 0,
        PlayerAction::Call => amount.min(stack),
        PlayerAction::Bet | PlayerAction::Raise => amount.saturating_sub(bet_amount).min(stack),
        PlayerAction::AllIn => stack,
    };

    let new_stack = stack - moved;
    let all_in = action == PlayerAction::AllIn || (moved > 0 && new_stack == 0);
    Transition {
        action: if all_in { PlayerAction::AllIn } else { action },
        amount: moved,
        wager: Wager {
            status: if all_in { PlayerStatus::AllIn } else { status },
            stack: new_stack,
            bet_amount: bet_amount + moved,
        },
    }
}

/// Represents a seat at the table: chips, status, and hole cards.
/// The seat persists across hands; only the per-hand fields are reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    stack: u32,
    status: PlayerStatus,
    hole: Vec<Card>,
    /// Chips committed in the current street only
    bet_amount: u32,
    /// Chips committed over the whole hand
    committed: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            status: if stack > 0 {
                PlayerStatus::Active
            } else {
                PlayerStatus::Out
            },
            hole: Vec::with_capacity(2),
            bet_amount: 0,
            committed: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn status(&self) -> PlayerStatus {
        self.status
    }
    pub fn bet_amount(&self) -> u32 {
        self.bet_amount
    }
    pub fn committed(&self) -> u32 {
        self.committed
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    pub fn reset_for_new_hand(&mut self) {
        self.hole.clear();
        self.bet_amount = 0;
        self.committed = 0;
        self.status = if self.stack > 0 {
            PlayerStatus::Active
        } else {
            PlayerStatus::Out
        };
    }

    pub fn give_cards(&mut self, cards: Vec<Card>) {
        self.hole = cards;
    }

    /// Moves the street bet out of the seat; returns how much was swept.
    pub(crate) fn sweep_bet(&mut self) -> u32 {
        std::mem::take(&mut self.bet_amount)
    }

    pub fn award(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    pub fn wager(&self) -> Wager {
        Wager {
            status: self.status,
            stack: self.stack,
            bet_amount: self.bet_amount,
        }
    }

    /// Applies `action` via [`transition`] and returns the realized action and chips moved.
    pub fn take_action(&mut self, action: PlayerAction, amount: u32) -> (PlayerAction, u32) {
        let t = transition(self.wager(), action, amount);
        self.status = t.wager.status;
        self.stack = t.wager.stack;
        self.bet_amount = t.wager.bet_amount;
        self.committed += t.amount;
        (t.action, t.amount)
    }
}
