use igo_engine::{Rejection, Stone};

use crate::common::engine_from_layout;

#[test]
fn single_stone_suicide_is_rejected() {
    let mut engine = engine_from_layout(&["+B", "B"], Stone::White);
    let before = engine.game_state();

    assert_eq!(engine.place_stone(0, 0), Err(Rejection::Suicide));
    assert_eq!(engine.game_state(), before);
    assert_eq!(engine.current_player(), Stone::White);
}

#[test]
fn group_suicide_is_rejected() {
    let mut engine = engine_from_layout(&["W+B", "WB", "B"], Stone::White);
    let before = engine.game_state();

    assert_eq!(engine.place_stone(0, 1), Err(Rejection::Suicide));
    assert_eq!(engine.game_state(), before);
}

#[test]
fn filling_last_liberty_of_opponent_is_legal() {
    // Black at (1,0) has no liberties of its own until it captures White (0,0)
    let mut engine = engine_from_layout(&["WB", "+W", "W"], Stone::Black);
    engine.place_stone(1, 0).unwrap();

    assert_eq!(engine.stone_at((1, 0)), Some(Stone::Black));
    assert_eq!(engine.stone_at((0, 0)), None);
    assert_eq!(engine.captures().black, 1);
}

#[test]
fn suicide_leaves_opponent_groups_in_place() {
    // The placed stone would be captured; no opponent group is removed either
    let mut engine = engine_from_layout(&["+W", "W+", "++"], Stone::Black);
    assert_eq!(engine.place_stone(0, 0), Err(Rejection::Suicide));
    assert_eq!(engine.stone_at((0, 1)), Some(Stone::White));
    assert_eq!(engine.stone_at((1, 0)), Some(Stone::White));
    assert_eq!(engine.captures().black, 0);
}

#[test]
fn occupied_point_is_rejected_for_both_colors() {
    let mut engine = engine_from_layout(&["B", "", "++W"], Stone::Black);
    let before = engine.game_state();
    assert_eq!(engine.place_stone(0, 0), Err(Rejection::Occupied));
    assert_eq!(engine.place_stone(2, 2), Err(Rejection::Occupied));
    assert_eq!(engine.game_state(), before);
}

#[test]
fn bent_four_in_top_left_corner_is_rejected() {
    let mut engine = engine_from_layout(&["++B", "+B", "B"], Stone::Black);
    let before = engine.game_state();
    assert_eq!(engine.place_stone(0, 0), Err(Rejection::BentFourCorner));
    assert_eq!(engine.game_state(), before);

    // Any other move is fine
    engine.place_stone(0, 1).unwrap();
}
