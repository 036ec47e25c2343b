use tablestakes_engine::errors::GameError;
use tablestakes_engine::game::Game;
use tablestakes_engine::history::Phase;
use tablestakes_engine::player::{Player, PlayerAction, PlayerStatus};

#[test]
fn one_funded_seat_cannot_start_a_hand() {
    let players = vec![Player::new("rich", 1000), Player::new("broke", 0)];
    let mut g = Game::new(players, 20, Some(1)).unwrap();
    assert_eq!(g.seats_with_chips(), 1);
    assert_eq!(g.start_new_hand().unwrap_err(), GameError::NotEnoughPlayers(1));
    assert_eq!(g.phase(), Phase::Setup);
    assert_eq!(g.hand_number(), 0);
}

#[test]
fn busted_seat_sits_out_while_others_play() {
    let players = vec![
        Player::new("a", 1000),
        Player::new("b", 0),
        Player::new("c", 1000),
    ];
    let mut g = Game::new(players, 20, Some(2)).unwrap();
    for _ in 0..3 {
        g.start_new_hand().unwrap();
        assert_eq!(g.players()[1].status(), PlayerStatus::Out);
        assert!(g.players()[1].hole_cards().is_empty());
        assert_ne!(g.button(), 1);
        assert_ne!(g.active_seat(), 1);
        g.player_action(PlayerAction::Fold, 0).unwrap();
        assert!(g.is_hand_over());
    }
    assert_eq!(g.players()[1].stack(), 0);
}

#[test]
fn losing_all_in_ends_the_session() {
    for seed in 0..100 {
        let players = vec![Player::new("deep", 1000), Player::new("short", 200)];
        let mut g = Game::new(players, 20, Some(seed)).unwrap();
        g.start_new_hand().unwrap();
        g.player_action(PlayerAction::AllIn, 0).unwrap();
        g.player_action(PlayerAction::Call, 0).unwrap();
        assert!(g.is_hand_over());

        if g.players()[1].stack() == 0 {
            assert_eq!(g.players()[0].stack(), 1200);
            assert_eq!(g.start_new_hand().unwrap_err(), GameError::NotEnoughPlayers(1));
            return;
        }
    }
    panic!("short stack never busted");
}
