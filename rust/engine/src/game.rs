use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::evaluate;
use crate::history::{ActionRecord, Phase, SeatHand, Showdown, ShowdownKind};
use crate::player::{Player, PlayerAction, PlayerStatus};
use crate::pot::{split_pot, Payout};
use crate::provider::Observation;
use crate::rules::{validate_action, BetContext};

/// What [`Game::player_action`] actually applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ActionOutcome {
    pub seat: usize,
    pub action: PlayerAction,
    pub amount: u32,
}

/// One table's hand-by-hand state.
///
/// Created once per session; [`Game::start_new_hand`] resets every per-hand
/// field. Seats persist across hands and keep their stacks.
///
/// `pot` holds chips from finished streets. Bets on the current street stay
/// on each seat's `bet_amount` until the street closes, so
/// `stacks + bets + pot` is constant while a hand runs.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::game::Game;
/// use tablestakes_engine::history::Phase;
/// use tablestakes_engine::player::{Player, PlayerAction};
///
/// let players = vec![Player::new("Ann", 1000), Player::new("Ben", 1000)];
/// let mut game = Game::new(players, 20, Some(7)).unwrap();
/// game.start_new_hand().unwrap();
/// assert_eq!(game.phase(), Phase::PreFlop);
///
/// game.player_action(PlayerAction::Call, 0).unwrap();
/// game.player_action(PlayerAction::Check, 0).unwrap();
/// assert_eq!(game.phase(), Phase::Flop);
/// assert_eq!(game.board().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<Player>,
    big_blind: u32,
    deck: Deck,
    board: Vec<Card>,
    pot: u32,
    current_bet: u32,
    phase: Phase,
    button: usize,
    active: usize,
    /// Per seat: has acted since the street opened or since the last raise
    acted: Vec<bool>,
    history: Vec<ActionRecord>,
    hand_number: u32,
    rng: ChaCha20Rng,
    last_showdown: Option<Showdown>,
}

impl Game {
    pub fn new(players: Vec<Player>, big_blind: u32, seed: Option<u64>) -> Result<Self, GameError> {
        if big_blind == 0 {
            return Err(GameError::InvalidBigBlind);
        }
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers(players.len()));
        }
        // pot and chip totals are u32
        let chips: u64 = players.iter().map(|p| u64::from(p.stack())).sum();
        if chips > u64::from(u32::MAX) {
            return Err(GameError::TooManyChips(chips));
        }
        let mut rng = ChaCha20Rng::seed_from_u64(seed.unwrap_or_else(rand::random));
        let deck = Deck::shuffled(&mut rng);
        let seats = players.len();
        Ok(Self {
            players,
            big_blind,
            deck,
            board: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            phase: Phase::Setup,
            button: 0,
            active: 0,
            acted: vec![false; seats],
            history: Vec::new(),
            hand_number: 0,
            rng,
            last_showdown: None,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Chips collected from finished streets.
    pub fn pot(&self) -> u32 {
        self.pot
    }
    /// Collected pot plus every bet on the current street.
    pub fn total_pot(&self) -> u32 {
        self.pot + self.players.iter().map(Player::bet_amount).sum::<u32>()
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn button(&self) -> usize {
        self.button
    }
    pub fn active_seat(&self) -> usize {
        self.active
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }
    pub fn acted(&self) -> &[bool] {
        &self.acted
    }
    pub fn last_showdown(&self) -> Option<&Showdown> {
        self.last_showdown.as_ref()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn is_hand_over(&self) -> bool {
        self.phase == Phase::Showdown
    }

    /// Sum of stacks, street bets and pot; fixed for the life of a hand.
    pub fn chip_total(&self) -> u32 {
        self.players
            .iter()
            .map(|p| p.stack() + p.bet_amount())
            .sum::<u32>()
            + self.pot
    }

    /// Seats holding chips, i.e. those that will be dealt into the next hand.
    pub fn seats_with_chips(&self) -> usize {
        self.players.iter().filter(|p| p.stack() > 0).count()
    }

    fn is_betting(&self) -> bool {
        matches!(
            self.phase,
            Phase::PreFlop | Phase::Flop | Phase::Turn | Phase::River
        )
    }

    fn contenders(&self) -> usize {
        self.players
            .iter()
            .filter(|p| matches!(p.status(), PlayerStatus::Active | PlayerStatus::AllIn))
            .count()
    }

    fn can_act_count(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// First seat clockwise after `from` that was dealt into this hand.
    fn next_seat_in_hand(&self, from: usize) -> usize {
        let n = self.players.len();
        (1..=n)
            .map(|step| (from + step) % n)
            .find(|&i| self.players[i].status() != PlayerStatus::Out)
            .unwrap_or((from + 1) % n)
    }

    /// Moves the action to the first seat from `start` that can act.
    fn find_actor(&mut self, start: usize) -> bool {
        let n = self.players.len();
        match (0..n)
            .map(|step| (start + step) % n)
            .find(|&i| self.players[i].can_act())
        {
            Some(seat) => {
                self.active = seat;
                true
            }
            None => false,
        }
    }

    fn reset_acted(&mut self) {
        for (flag, p) in self.acted.iter_mut().zip(&self.players) {
            *flag = !p.can_act();
        }
    }

    /// Starts the next hand: fresh deck, button moved on, hole cards dealt
    /// and the big blind posted by the seat after the button.
    ///
    /// # Errors
    ///
    /// [`GameError::HandInProgress`] while a street is still being bet, and
    /// [`GameError::NotEnoughPlayers`] when fewer than two seats have chips.
    pub fn start_new_hand(&mut self) -> Result<(), GameError> {
        if self.is_betting() {
            return Err(GameError::HandInProgress);
        }
        let in_hand = self.seats_with_chips();
        if in_hand < 2 {
            return Err(GameError::NotEnoughPlayers(in_hand));
        }

        self.hand_number += 1;
        self.deck = Deck::shuffled(&mut self.rng);
        self.board.clear();
        self.pot = 0;
        self.current_bet = 0;
        self.history.clear();
        self.last_showdown = None;
        self.phase = Phase::Setup;
        for p in &mut self.players {
            p.reset_for_new_hand();
        }
        self.reset_acted();

        self.button = self.next_seat_in_hand(self.button);
        info!(
            hand = self.hand_number,
            button = self.button,
            players = in_hand,
            "new hand"
        );

        for p in &mut self.players {
            if p.status() != PlayerStatus::Out {
                p.give_cards(self.deck.deal(2));
            }
        }

        // big blind only, no small blind
        let bb_seat = self.next_seat_in_hand(self.button);
        let (_, posted) = self.players[bb_seat].take_action(PlayerAction::Bet, self.big_blind);
        self.current_bet = self.big_blind;
        info!(
            seat = bb_seat,
            player = self.players[bb_seat].name(),
            amount = posted,
            "big blind posted"
        );

        self.phase = Phase::PreFlop;
        if !self.find_actor(bb_seat + 1) {
            self.advance_phase();
        }
        Ok(())
    }

    /// Validates and applies an action for the active seat.
    ///
    /// A rejected action changes nothing and the same seat stays to act.
    pub fn player_action(
        &mut self,
        action: PlayerAction,
        amount: u32,
    ) -> Result<ActionOutcome, GameError> {
        if !self.is_betting() || !self.players[self.active].can_act() {
            return Err(GameError::NoHandInProgress);
        }
        let seat = self.active;
        let player = &self.players[seat];
        let ctx = BetContext {
            current_bet: self.current_bet,
            big_blind: self.big_blind,
            stack: player.stack(),
            bet_amount: player.bet_amount(),
        };
        let validated = validate_action(&ctx, action, amount).inspect_err(|e| {
            warn!(seat, player = player.name(), ?action, amount, error = %e, "action rejected");
        })?;

        let (realized, moved) =
            self.players[seat].take_action(validated.action, validated.amount);
        let street_total = self.players[seat].bet_amount();
        if street_total > self.current_bet {
            self.current_bet = street_total;
            // a raise reopens the action for everyone else still in
            for (i, p) in self.players.iter().enumerate() {
                if i != seat && p.can_act() {
                    self.acted[i] = false;
                }
            }
        }
        self.acted[seat] = true;

        debug!(
            seat,
            player = self.players[seat].name(),
            action = realized.as_str(),
            amount = moved,
            phase = self.phase.as_str(),
            "action applied"
        );
        self.history.push(ActionRecord {
            phase: self.phase,
            actor: self.players[seat].name().to_string(),
            action: realized,
            amount: moved,
        });

        self.after_action(seat);
        Ok(ActionOutcome {
            seat,
            action: realized,
            amount: moved,
        })
    }

    /// Folds the active seat; used by drivers after repeated invalid input.
    pub fn force_fold(&mut self) -> Result<ActionOutcome, GameError> {
        warn!(seat = self.active, "forcing fold");
        self.player_action(PlayerAction::Fold, 0)
    }

    fn after_action(&mut self, seat: usize) {
        if self.contenders() <= 1 {
            self.finish_uncontested();
        } else if self.is_betting_round_complete() || !self.find_actor(seat + 1) {
            self.advance_phase();
        }
    }

    /// Every seat that can still act has matched the current bet and acted
    /// since the street opened or the bet was last raised.
    pub fn is_betting_round_complete(&self) -> bool {
        self.players
            .iter()
            .zip(&self.acted)
            .all(|(p, &acted)| !p.can_act() || (acted && p.bet_amount() == self.current_bet))
    }

    fn sweep_bets(&mut self) {
        for p in &mut self.players {
            self.pot += p.sweep_bet();
        }
        self.current_bet = 0;
    }

    /// Closes the current street and opens the next one, or finishes the hand.
    ///
    /// With one contender left the pot is awarded without a showdown. When at
    /// most one seat can still act, the rest of the board is dealt at once and
    /// hands are compared.
    pub fn advance_phase(&mut self) {
        if !self.is_betting() {
            return;
        }
        self.sweep_bets();

        if self.contenders() <= 1 {
            self.finish_uncontested();
            return;
        }
        if self.can_act_count() <= 1 {
            let missing = 5 - self.board.len();
            self.board.extend(self.deck.deal(missing));
            info!(board = ?self.board, "running out the board");
            self.phase = Phase::Showdown;
            self.resolve_showdown();
            return;
        }

        match self.phase.next_street() {
            Some((next, count)) => {
                self.phase = next;
                self.board.extend(self.deck.deal(count));
                info!(phase = next.as_str(), board = ?self.board, pot = self.pot, "street dealt");
                self.reset_acted();
                self.find_actor(self.button + 1);
            }
            None => {
                self.phase = Phase::Showdown;
                self.resolve_showdown();
            }
        }
    }

    fn finish_uncontested(&mut self) {
        self.sweep_bets();
        self.phase = Phase::Showdown;
        let Some(seat) = self
            .players
            .iter()
            .position(|p| matches!(p.status(), PlayerStatus::Active | PlayerStatus::AllIn))
        else {
            return;
        };
        let amount = std::mem::take(&mut self.pot);
        self.players[seat].award(amount);
        info!(seat, player = self.players[seat].name(), amount, "pot awarded uncontested");
        self.last_showdown = Some(Showdown {
            kind: ShowdownKind::Uncontested,
            board: self.board.clone(),
            hands: Vec::new(),
            payouts: vec![Payout { seat, amount }],
            overpaid: Vec::new(),
        });
    }

    fn resolve_showdown(&mut self) {
        let hands: Vec<SeatHand> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| matches!(p.status(), PlayerStatus::Active | PlayerStatus::AllIn))
            .map(|(seat, p)| SeatHand {
                seat,
                hole: p.hole_cards().to_vec(),
                result: evaluate(p.hole_cards(), &self.board),
            })
            .collect();

        let ranked: Vec<_> = hands.iter().map(|h| (h.seat, h.result.rank)).collect();
        let pot = std::mem::take(&mut self.pot);
        let payouts = split_pot(pot, &ranked);

        let deepest = hands
            .iter()
            .map(|h| self.players[h.seat].committed())
            .max()
            .unwrap_or(0);
        let overpaid: Vec<usize> = payouts
            .iter()
            .map(|p| p.seat)
            .filter(|&seat| self.players[seat].committed() < deepest)
            .collect();
        if !overpaid.is_empty() {
            warn!(?overpaid, "single pot paid to a winner who was covered");
        }

        for p in &payouts {
            self.players[p.seat].award(p.amount);
            info!(
                seat = p.seat,
                player = self.players[p.seat].name(),
                amount = p.amount,
                hand = hands
                    .iter()
                    .find(|h| h.seat == p.seat)
                    .map(|h| h.result.rank.category.name())
                    .unwrap_or_default(),
                "pot awarded"
            );
        }
        self.last_showdown = Some(Showdown {
            kind: ShowdownKind::Evaluated,
            board: self.board.clone(),
            hands,
            payouts,
            overpaid,
        });
    }

    /// The table as the active seat sees it.
    pub fn observation(&self) -> Observation {
        let player = &self.players[self.active];
        let mut hole = [0u32; 2];
        for (slot, card) in hole.iter_mut().zip(player.hole_cards()) {
            *slot = card.index();
        }
        let mut board = [0u32; 5];
        for (slot, card) in board.iter_mut().zip(&self.board) {
            *slot = card.index();
        }
        Observation {
            hole,
            board,
            pot: self.total_pot(),
            current_bet: self.current_bet,
            big_blind: self.big_blind,
            active_seat: self.active,
            player_count: self.players.len(),
            stacks: self.players.iter().map(Player::stack).collect(),
            hand_number: self.hand_number,
            phase: self.phase,
            bet_amount: player.bet_amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(stacks: &[u32]) -> Game {
        let players = stacks
            .iter()
            .enumerate()
            .map(|(i, &s)| Player::new(format!("p{i}"), s))
            .collect();
        Game::new(players, 20, Some(11)).unwrap()
    }

    #[test]
    fn new_rejects_bad_setup() {
        assert_eq!(
            Game::new(vec![Player::new("solo", 100)], 20, None).unwrap_err(),
            GameError::NotEnoughPlayers(1)
        );
        let two = vec![Player::new("a", 100), Player::new("b", 100)];
        assert_eq!(
            Game::new(two, 0, None).unwrap_err(),
            GameError::InvalidBigBlind
        );
        let rich = vec![Player::new("a", u32::MAX), Player::new("b", 1)];
        assert_eq!(
            Game::new(rich, 20, None).unwrap_err(),
            GameError::TooManyChips(u64::from(u32::MAX) + 1)
        );
    }

    #[test]
    fn preflop_action_starts_two_after_button() {
        let mut g = table(&[1000, 1000, 1000, 1000]);
        g.start_new_hand().unwrap();
        assert_eq!(g.button(), 1);
        assert_eq!(g.players()[2].bet_amount(), 20);
        assert_eq!(g.active_seat(), 3);
        assert_eq!(g.current_bet(), 20);
        assert_eq!(g.deck_remaining(), 52 - 8);
    }

    #[test]
    fn rejected_action_keeps_turn_and_state() {
        let mut g = table(&[1000, 1000, 1000]);
        g.start_new_hand().unwrap();
        let seat = g.active_seat();
        let before = g.chip_total();
        assert!(g.player_action(PlayerAction::Check, 0).is_err());
        assert!(g.player_action(PlayerAction::Raise, 20).is_err());
        assert_eq!(g.active_seat(), seat);
        assert_eq!(g.chip_total(), before);
        assert!(g.history().is_empty());
    }

    #[test]
    fn raise_reopens_action_for_earlier_callers() {
        let mut g = table(&[1000, 1000, 1000]);
        g.start_new_hand().unwrap();
        // button 1, big blind 2, seat 0 first
        g.player_action(PlayerAction::Call, 0).unwrap();
        g.player_action(PlayerAction::Raise, 60).unwrap();
        assert!(!g.acted()[0]);
        g.player_action(PlayerAction::Call, 0).unwrap();
        assert_eq!(g.phase(), Phase::PreFlop);
        assert_eq!(g.active_seat(), 0);
        g.player_action(PlayerAction::Call, 0).unwrap();
        assert_eq!(g.phase(), Phase::Flop);
        assert_eq!(g.pot(), 180);
    }

    #[test]
    fn busted_seats_are_skipped() {
        let mut g = table(&[1000, 0, 1000]);
        g.start_new_hand().unwrap();
        assert_eq!(g.button(), 2);
        assert_eq!(g.players()[0].bet_amount(), 20);
        assert!(g.players()[1].hole_cards().is_empty());
        assert_eq!(g.players()[1].status(), PlayerStatus::Out);
        assert_eq!(g.active_seat(), 2);
    }

    #[test]
    fn actions_after_showdown_are_rejected() {
        let mut g = table(&[1000, 1000]);
        g.start_new_hand().unwrap();
        g.player_action(PlayerAction::Fold, 0).unwrap();
        assert!(g.is_hand_over());
        assert_eq!(
            g.player_action(PlayerAction::Call, 0).unwrap_err(),
            GameError::NoHandInProgress
        );
    }
}
