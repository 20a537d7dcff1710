#![allow(dead_code)]

use igo_engine::{Engine, Grid, KOMI, Stone};

/// Route engine logs to the test harness. Set `RUST_LOG=igo_engine=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Pad a partial layout (top-left corner) to a 9x9 grid.
pub fn grid_from_layout(top: &[&str]) -> Grid {
    let mut rows: Vec<String> = top.iter().map(|r| format!("{r:+<9}")).collect();
    rows.resize(9, "+".repeat(9));
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    Grid::from_rows(&refs).unwrap()
}

pub fn engine_from_layout(top: &[&str], to_move: Stone) -> Engine {
    init_tracing();
    Engine::with_position(grid_from_layout(top), to_move, KOMI).unwrap()
}

/// Play a sequence of placements, panicking on the first rejection.
pub fn play_all(engine: &mut Engine, moves: &[(u8, u8)]) {
    for &(row, col) in moves {
        engine
            .place_stone(row, col)
            .unwrap_or_else(|e| panic!("({row},{col}) rejected: {e}\n{}", engine.grid()));
    }
}

pub fn stones_on_board(engine: &Engine) -> usize {
    engine.grid().stone_count(Stone::Black) + engine.grid().stone_count(Stone::White)
}
