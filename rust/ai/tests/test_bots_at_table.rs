use tablestakes_ai::bots::{CallBot, FoldBot, RaiseBot};
use tablestakes_ai::create_ai;
use tablestakes_ai::heuristic::HeuristicBot;
use tablestakes_engine::engine::Engine;
use tablestakes_engine::game::Game;
use tablestakes_engine::player::{Player, PlayerAction};
use tablestakes_engine::provider::ActionProvider;

fn engine(stacks: &[u32], seed: u64) -> Engine {
    let players = stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| Player::new(format!("seat{i}"), s))
        .collect();
    Engine::new(Game::new(players, 20, Some(seed)).unwrap())
}

#[test]
fn raise_bot_collects_from_fold_bot() {
    let mut eng = engine(&[1000, 1000], 1);
    let (mut folder, mut raiser) = (FoldBot, RaiseBot::default());
    let summaries = eng.play_hands(10, &mut [&mut folder, &mut raiser]).unwrap();
    assert_eq!(summaries.len(), 10);
    // the folder loses its blind every other hand and never wins a pot
    let stacks = &summaries.last().unwrap().stacks;
    assert_eq!(stacks[0], 1000 - 5 * 20);
    assert_eq!(stacks[1], 1000 + 5 * 20);
    assert!(summaries.iter().all(|s| s.forced_folds.is_empty()));
}

#[test]
fn raise_bots_escalate_until_all_in() {
    let mut eng = engine(&[500, 500], 2);
    let (mut a, mut b) = (RaiseBot::default(), RaiseBot::default());
    let summary = eng.play_hand(&mut [&mut a, &mut b]).unwrap();
    assert!(summary.forced_folds.is_empty());
    assert!(summary.actions.iter().any(|r| r.action == PlayerAction::AllIn));
    assert_eq!(summary.stacks.iter().sum::<u32>(), 1000);
}

#[test]
fn mixed_table_conserves_chips() {
    let mut eng = engine(&[800; 5], 3);
    let mut seats: Vec<Box<dyn ActionProvider>> = vec![
        Box::new(HeuristicBot::new(Some(1))),
        Box::new(CallBot),
        Box::new(RaiseBot::default()),
        Box::new(HeuristicBot::new(Some(2))),
        Box::new(FoldBot),
    ];
    let mut refs: Vec<&mut dyn ActionProvider> = seats
        .iter_mut()
        .map(|b| b.as_mut() as &mut dyn ActionProvider)
        .collect();
    let summaries = eng.play_hands(50, &mut refs).unwrap();

    assert!(!summaries.is_empty());
    for s in &summaries {
        assert_eq!(s.stacks.iter().sum::<u32>(), 4000, "hand {}", s.hand_number);
        assert!(s.forced_folds.is_empty(), "hand {}", s.hand_number);
    }
}

#[test]
fn heuristic_sessions_replay_with_same_seeds() {
    let run = || {
        let mut eng = engine(&[1000, 1000, 1000], 4);
        let mut a = create_ai("heuristic", Some(10)).unwrap();
        let mut b = create_ai("heuristic", Some(11)).unwrap();
        let mut c = create_ai("heuristic", Some(12)).unwrap();
        eng.play_hands(20, &mut [a.as_mut(), b.as_mut(), c.as_mut()])
            .unwrap()
    };
    assert_eq!(run(), run());
}
