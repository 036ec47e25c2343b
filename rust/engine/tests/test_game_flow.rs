use std::cmp::Ordering;

use tablestakes_engine::game::Game;
use tablestakes_engine::hand::compare_hands;
use tablestakes_engine::history::{Phase, ShowdownKind};
use tablestakes_engine::player::{Player, PlayerAction, PlayerStatus};

fn table(names: &[&str], stack: u32, seed: u64) -> Game {
    let players = names.iter().map(|n| Player::new(*n, stack)).collect();
    Game::new(players, 20, Some(seed)).unwrap()
}

fn act(g: &mut Game, action: PlayerAction, amount: u32) {
    let seat = g.active_seat();
    g.player_action(action, amount)
        .unwrap_or_else(|e| panic!("seat {seat} {action:?} {amount}: {e}"));
}

#[test]
fn heads_up_hand_checked_down_to_showdown() {
    let mut g = table(&["B", "A"], 1000, 2024);
    g.start_new_hand().unwrap();
    assert_eq!(g.button(), 1);
    assert_eq!(g.players()[0].bet_amount(), 20);
    assert_eq!(g.total_pot(), 20);
    assert_eq!(g.active_seat(), 1);

    act(&mut g, PlayerAction::Call, 0);
    // posting the blind is not acting, so the big blind gets its option
    assert_eq!(g.phase(), Phase::PreFlop);
    assert_eq!(g.active_seat(), 0);
    act(&mut g, PlayerAction::Check, 0);
    assert_eq!(g.phase(), Phase::Flop);
    assert_eq!(g.board().len(), 3);
    assert_eq!(g.pot(), 40);

    for (street, board_len) in [(Phase::Turn, 4), (Phase::River, 5), (Phase::Showdown, 5)] {
        assert_eq!(g.active_seat(), 0, "first to act after the flop is left of the button");
        act(&mut g, PlayerAction::Check, 0);
        act(&mut g, PlayerAction::Check, 0);
        assert_eq!(g.phase(), street);
        assert_eq!(g.board().len(), board_len);
        assert_eq!(g.chip_total(), 2000);
    }

    assert_eq!(g.history().len(), 8);
    assert_eq!(g.history()[0].actor, "A");
    assert_eq!(g.history()[0].action, PlayerAction::Call);
    assert_eq!(g.history()[0].amount, 20);

    let showdown = g.last_showdown().unwrap();
    assert_eq!(showdown.kind, ShowdownKind::Evaluated);
    assert_eq!(showdown.hands.len(), 2);
    let b = showdown.hands.iter().find(|h| h.seat == 0).unwrap();
    let a = showdown.hands.iter().find(|h| h.seat == 1).unwrap();
    let stacks: Vec<u32> = g.players().iter().map(|p| p.stack()).collect();
    match compare_hands(&b.result.rank, &a.result.rank) {
        Ordering::Greater => assert_eq!(stacks, vec![1020, 980]),
        Ordering::Less => assert_eq!(stacks, vec![980, 1020]),
        Ordering::Equal => assert_eq!(stacks, vec![1000, 1000]),
    }
    assert_eq!(g.pot(), 0);
}

#[test]
fn bet_and_two_calls_close_the_street() {
    let mut g = table(&["p0", "p1", "p2"], 1000, 5);
    g.start_new_hand().unwrap();
    act(&mut g, PlayerAction::Call, 0);
    act(&mut g, PlayerAction::Call, 0);
    act(&mut g, PlayerAction::Check, 0);
    assert_eq!(g.phase(), Phase::Flop);

    assert_eq!(g.active_seat(), 2);
    act(&mut g, PlayerAction::Bet, 40);
    act(&mut g, PlayerAction::Call, 0);
    assert_eq!(g.phase(), Phase::Flop);
    act(&mut g, PlayerAction::Call, 0);
    assert_eq!(g.phase(), Phase::Turn);
    assert_eq!(g.pot(), 180);
    assert_eq!(g.current_bet(), 0);
}

#[test]
fn street_waits_for_a_seat_that_has_not_acted() {
    let mut g = table(&["p0", "p1", "p2", "p3"], 1000, 6);
    g.start_new_hand().unwrap();
    for _ in 0..3 {
        act(&mut g, PlayerAction::Call, 0);
    }
    act(&mut g, PlayerAction::Check, 0);
    assert_eq!(g.phase(), Phase::Flop);

    act(&mut g, PlayerAction::Bet, 40); // seat 2
    act(&mut g, PlayerAction::Call, 0); // seat 3
    act(&mut g, PlayerAction::Fold, 0); // seat 0
    assert_eq!(g.phase(), Phase::Flop);
    assert_eq!(g.active_seat(), 1);
    assert!(!g.is_betting_round_complete());

    act(&mut g, PlayerAction::Call, 0);
    assert_eq!(g.phase(), Phase::Turn);
    assert_eq!(g.players()[0].status(), PlayerStatus::Folded);
    // seat 0 is skipped from now on
    assert_eq!(g.active_seat(), 2);
}

#[test]
fn everyone_folding_awards_pot_without_showdown() {
    let mut g = table(&["p0", "p1", "p2"], 1000, 7);
    g.start_new_hand().unwrap();
    act(&mut g, PlayerAction::Raise, 60);
    act(&mut g, PlayerAction::Fold, 0);
    act(&mut g, PlayerAction::Fold, 0);

    assert!(g.is_hand_over());
    assert!(g.board().is_empty());
    let showdown = g.last_showdown().unwrap();
    assert_eq!(showdown.kind, ShowdownKind::Uncontested);
    assert_eq!(showdown.winners(), vec![0]);
    assert!(showdown.hands.is_empty());
    let stacks: Vec<u32> = g.players().iter().map(|p| p.stack()).collect();
    assert_eq!(stacks, vec![1020, 1000, 980]);
}

#[test]
fn all_in_player_wins_when_the_rest_fold() {
    let mut g = table(&["p0", "p1", "p2"], 1000, 8);
    g.start_new_hand().unwrap();
    act(&mut g, PlayerAction::AllIn, 0);
    act(&mut g, PlayerAction::Fold, 0);
    act(&mut g, PlayerAction::Fold, 0);
    assert!(g.is_hand_over());
    assert_eq!(g.players()[0].stack(), 1020);
}

#[test]
fn all_in_and_call_run_out_the_board() {
    let mut g = table(&["B", "A"], 1000, 9);
    g.start_new_hand().unwrap();
    act(&mut g, PlayerAction::AllIn, 0);
    act(&mut g, PlayerAction::Call, 0);

    assert_eq!(g.phase(), Phase::Showdown);
    assert_eq!(g.board().len(), 5);
    let showdown = g.last_showdown().unwrap();
    assert_eq!(showdown.kind, ShowdownKind::Evaluated);
    assert!(showdown.overpaid.is_empty());
    let total: u32 = g.players().iter().map(|p| p.stack()).sum();
    assert_eq!(total, 2000);
}

#[test]
fn caller_with_chips_left_is_not_asked_again() {
    let players = vec![Player::new("deep", 1000), Player::new("short", 100)];
    let mut g = Game::new(players, 20, Some(10)).unwrap();
    g.start_new_hand().unwrap();
    act(&mut g, PlayerAction::AllIn, 0);
    act(&mut g, PlayerAction::Call, 0);

    assert!(g.is_hand_over());
    assert_eq!(g.board().len(), 5);
    assert_eq!(g.players()[0].committed(), 100);
    assert_eq!(g.players()[1].committed(), 100);
    let total: u32 = g.players().iter().map(|p| p.stack()).sum();
    assert_eq!(total, 1100);
}

#[test]
fn observation_reflects_active_seat() {
    let mut g = table(&["p0", "p1", "p2"], 500, 12);
    g.start_new_hand().unwrap();
    let obs = g.observation();
    assert_eq!(obs.active_seat, 0);
    assert_eq!(obs.player_count, 3);
    assert_eq!(obs.pot, 20);
    assert_eq!(obs.current_bet, 20);
    assert_eq!(obs.big_blind, 20);
    assert_eq!(obs.stacks, vec![500, 500, 480]);
    assert_eq!(obs.hand_number, 1);
    assert_eq!(obs.board, [0; 5]);
    assert_eq!(obs.hole_cards(), g.players()[0].hole_cards());
    assert!(obs.hole.iter().all(|&i| (1..=52).contains(&i)));

    let v = obs.to_vec();
    assert_eq!(v.len(), 2 + 5 + 5 + 3 + 1);
    assert_eq!(&v[7..12], &[20, 20, 20, 0, 3]);
    assert_eq!(*v.last().unwrap(), 1);
}
