use igo_engine::{BoardSize, Engine, Stage, Stone};

use crate::common::{engine_from_layout, init_tracing, play_all, stones_on_board};

#[test]
fn white_captures_lone_corner_stone() {
    init_tracing();
    let mut engine = Engine::new(BoardSize::Nine);
    // B (0,0), W (0,1), B far away, W (1,0) takes the last liberty
    play_all(&mut engine, &[(0, 0), (0, 1), (8, 8), (1, 0)]);

    assert_eq!(engine.stone_at((0, 0)), None);
    assert_eq!(engine.captures().white, 1);
    assert_eq!(engine.captures().black, 0);
    assert_eq!(engine.last_move(), Some((1, 0)));
    assert_eq!(engine.stage(), Stage::BlackToPlay);
}

#[test]
fn capture_removes_whole_group() {
    let mut engine = engine_from_layout(&["BBBB", "WWWB", "+++B", "BBBB"], Stone::Black);
    // White row (1,0)-(1,2) has liberties (2,0), (2,1), (2,2)
    play_all(&mut engine, &[(2, 0), (5, 5), (2, 1), (5, 6)]);
    assert_eq!(engine.grid().stone_count(Stone::White), 5);

    engine.place_stone(2, 2).unwrap();
    assert_eq!(engine.grid().stone_count(Stone::White), 2);
    assert_eq!(engine.captures().black, 3);
    for col in 0..3 {
        assert_eq!(engine.stone_at((1, col)), None);
    }
}

#[test]
fn stones_are_conserved() {
    init_tracing();
    let mut engine = Engine::new(BoardSize::Nine);
    let moves = [(0, 1), (0, 0), (1, 0), (4, 4), (3, 4), (8, 8), (4, 3), (7, 7), (5, 4), (6, 6)];
    let mut placed = [0usize; 2];
    for (i, &(row, col)) in moves.iter().enumerate() {
        engine.place_stone(row, col).unwrap();
        placed[i % 2] += 1;
    }
    engine.place_stone(4, 5).unwrap();
    placed[0] += 1;

    let grid = engine.grid();
    assert_eq!(engine.captures().black, 2);
    assert_eq!(
        grid.stone_count(Stone::Black) + engine.captures().white as usize,
        placed[0]
    );
    assert_eq!(
        grid.stone_count(Stone::White) + engine.captures().black as usize,
        placed[1]
    );
    assert_eq!(stones_on_board(&engine), placed[0] + placed[1] - 2);
}

#[test]
fn multiple_groups_captured_by_one_stone() {
    let mut engine = engine_from_layout(&["BW+WB", "+B+B"], Stone::Black);
    engine.place_stone(0, 2).unwrap();

    assert_eq!(engine.grid().stone_count(Stone::White), 0);
    assert_eq!(engine.captures().black, 2);
}

#[test]
fn captures_accumulate_across_moves() {
    let mut engine = engine_from_layout(&["BW+WB", "+B+B"], Stone::Black);
    engine.place_stone(0, 2).unwrap();
    assert_eq!(engine.captures().black, 2);

    play_all(
        &mut engine,
        &[(5, 5), (4, 5), (8, 8), (6, 5), (8, 7), (5, 4), (8, 6), (5, 6)],
    );
    assert_eq!(engine.stone_at((5, 5)), None);
    assert_eq!(engine.captures().black, 3);
    assert_eq!(engine.captures().white, 0);
}
