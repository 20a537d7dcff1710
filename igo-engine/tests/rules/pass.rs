use igo_engine::{Engine, Rejection, Stage, Stone};

#[test]
fn single_pass_hands_over_the_turn() {
    let mut engine = Engine::default();
    assert_eq!(engine.pass(), Ok(Stage::WhiteToPlay));
    assert_eq!(engine.pass_streak(), 1);
    assert!(!engine.is_game_over());
    assert!(engine.score().is_none());
}

#[test]
fn two_consecutive_passes_end_the_game() {
    let mut engine = Engine::default();
    engine.pass().unwrap();
    assert_eq!(engine.pass(), Ok(Stage::GameOver));

    assert!(engine.is_game_over());
    let score = engine.score().unwrap();
    assert_eq!(score.final_score.black, 0.0);
    assert_eq!(score.final_score.white, 6.5);
    assert_eq!(score.winner, Stone::White);
}

#[test]
fn placement_between_passes_keeps_game_alive() {
    let mut engine = Engine::default();
    engine.pass().unwrap();
    engine.place_stone(4, 4).unwrap();
    assert_eq!(engine.pass_streak(), 0);
    assert!(!engine.is_game_over());

    engine.pass().unwrap();
    assert!(!engine.is_game_over());
    engine.pass().unwrap();
    assert!(engine.is_game_over());
}

#[test]
fn rejected_placement_does_not_reset_streak() {
    let mut engine = Engine::default();
    engine.place_stone(4, 4).unwrap();
    engine.pass().unwrap();
    assert_eq!(engine.place_stone(4, 4), Err(Rejection::Occupied));
    assert_eq!(engine.pass_streak(), 1);
    assert_eq!(engine.pass(), Ok(Stage::GameOver));
}

#[test]
fn passing_after_game_over_is_rejected() {
    let mut engine = Engine::default();
    engine.pass().unwrap();
    engine.pass().unwrap();
    let score = engine.score().cloned();

    assert_eq!(engine.pass(), Err(Rejection::GameOver));
    assert_eq!(engine.score().cloned(), score);
}
