pub mod board_size;
pub mod capture;
pub mod engine;
pub mod error;
pub mod grid;
pub mod group;
pub mod history;
pub mod intent;
pub mod rules;
pub mod scoring;
pub mod seki;
pub mod stone;
pub mod validate;

/// `(row, col)`, zero-based.
pub type Point = (u8, u8);

pub use board_size::BoardSize;
pub use engine::{Engine, GameState, Stage};
pub use error::Rejection;
pub use grid::{ByColor, Captures, Grid};
pub use group::{Group, all_groups, group_at};
pub use history::{History, Snapshot};
pub use intent::Intent;
pub use rules::Rules;
pub use scoring::{KOMI, ScoreResult};
pub use seki::{SekiMap, detect_seki};
pub use stone::Stone;
