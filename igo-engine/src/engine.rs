use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board_size::BoardSize;
use crate::error::Rejection;
use crate::grid::{Captures, Grid};
use crate::history::History;
use crate::intent::Intent;
use crate::rules::Rules;
use crate::scoring::{self, ScoreResult};
use crate::stone::Stone;
use crate::validate::{self, Placement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    BlackToPlay,
    WhiteToPlay,
    GameOver,
}

impl Stage {
    pub fn is_play(&self) -> bool {
        matches!(self, Stage::BlackToPlay | Stage::WhiteToPlay)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::BlackToPlay => write!(f, "black_to_play"),
            Stage::WhiteToPlay => write!(f, "white_to_play"),
            Stage::GameOver => write!(f, "game_over"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black_to_play" => Ok(Stage::BlackToPlay),
            "white_to_play" => Ok(Stage::WhiteToPlay),
            "game_over" => Ok(Stage::GameOver),
            _ => Err(format!("unknown stage: {s}")),
        }
    }
}

/// Everything needed to resume a session, serializable as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub board_size: BoardSize,
    pub komi: f64,
    pub current_player: Stone,
    pub last_move: Option<Point>,
    pub captures: Captures,
    pub pass_streak: u8,
    pub game_over: bool,
    pub history: History,
    pub score: Option<ScoreResult>,
}

impl GameState {
    fn fresh(rules: Rules) -> Self {
        GameState {
            grid: Grid::new(rules.board_size.side()),
            board_size: rules.board_size,
            komi: rules.komi,
            current_player: Stone::Black,
            last_move: None,
            captures: Captures::default(),
            pass_streak: 0,
            game_over: false,
            history: History::new(),
            score: None,
        }
    }

    /// Every grid, live or snapshotted, must be square at the active size,
    /// and the pass streak and score must agree with the game-over flag.
    fn check_consistency(&self) -> Result<(), Rejection> {
        let board = self.board_size.side();
        let check = |g: &Grid| {
            if g.size() != board {
                Err(Rejection::SizeMismatch {
                    grid: g.size(),
                    board,
                })
            } else if !g.is_well_formed() {
                Err(Rejection::MalformedLayout)
            } else {
                Ok(())
            }
        };

        check(&self.grid)?;
        for snapshot in self.history.snapshots() {
            check(&snapshot.grid)?;
        }
        if self.pass_streak > 1 || self.game_over != self.score.is_some() {
            return Err(Rejection::InconsistentState);
        }
        Ok(())
    }
}

/// The turn, pass and undo state machine for a single game session.
///
/// Every mutating operation either commits completely or returns a
/// [`Rejection`] and leaves the state untouched.
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    pub fn new(board_size: BoardSize) -> Self {
        Self::with_rules(Rules::new(board_size))
    }

    pub fn with_rules(rules: Rules) -> Self {
        Engine {
            state: GameState::fresh(rules),
        }
    }

    /// Start from an arbitrary position, e.g. a problem diagram.
    pub fn with_position(grid: Grid, to_move: Stone, komi: f64) -> Result<Self, Rejection> {
        let board_size = BoardSize::try_from(grid.size())?;
        let mut state = GameState::fresh(Rules { board_size, komi });
        state.grid = grid;
        state.current_player = to_move;
        state.check_consistency()?;
        Ok(Engine { state })
    }

    // -- Accessors --

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn board_size(&self) -> BoardSize {
        self.state.board_size
    }

    pub fn komi(&self) -> f64 {
        self.state.komi
    }

    pub fn rules(&self) -> Rules {
        Rules {
            board_size: self.state.board_size,
            komi: self.state.komi,
        }
    }

    pub fn current_player(&self) -> Stone {
        self.state.current_player
    }

    pub fn last_move(&self) -> Option<Point> {
        self.state.last_move
    }

    pub fn captures(&self) -> &Captures {
        &self.state.captures
    }

    pub fn pass_streak(&self) -> u8 {
        self.state.pass_streak
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    /// Populated once the game is over.
    pub fn score(&self) -> Option<&ScoreResult> {
        self.state.score.as_ref()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.state.grid.stone_at(point)
    }

    pub fn stage(&self) -> Stage {
        if self.state.game_over {
            Stage::GameOver
        } else {
            match self.state.current_player {
                Stone::Black => Stage::BlackToPlay,
                Stone::White => Stage::WhiteToPlay,
            }
        }
    }

    // -- Game actions --

    pub fn apply(&mut self, intent: Intent) -> Result<Stage, Rejection> {
        match intent {
            Intent::Place((row, col)) => self.place_stone(row, col),
            Intent::Pass => self.pass(),
            Intent::Undo => self.undo(),
            Intent::Reset => Ok(self.reset()),
            Intent::ChangeBoardSize(size) => Ok(self.change_board_size(size)),
        }
    }

    pub fn place_stone(&mut self, row: u8, col: u8) -> Result<Stage, Rejection> {
        let point = (row, col);
        let placement = self
            .check_placement(point)
            .map_err(|e| self.rejected(Intent::Place(point), e))?;

        let player = self.state.current_player;
        self.state.history.record_before_move(
            &self.state.grid,
            player,
            &self.state.captures,
            point,
        );

        let Placement { grid, captures, .. } = placement;
        self.state.grid = grid;
        self.state.captures = captures;
        self.state.last_move = Some(point);
        self.state.current_player = player.opp();
        self.state.pass_streak = 0;

        Ok(self.stage())
    }

    pub fn pass(&mut self) -> Result<Stage, Rejection> {
        if self.state.game_over {
            return Err(self.rejected(Intent::Pass, Rejection::GameOver));
        }

        // The second pass in a row ends the game; the streak stays at 1.
        if self.state.pass_streak == 0 {
            self.state.pass_streak = 1;
            self.state.current_player = self.state.current_player.opp();
        } else {
            self.finish();
        }

        Ok(self.stage())
    }

    pub fn undo(&mut self) -> Result<Stage, Rejection> {
        if self.state.game_over {
            return Err(self.rejected(Intent::Undo, Rejection::GameOver));
        }
        let Some(snapshot) = self.state.history.pop() else {
            return Err(self.rejected(Intent::Undo, Rejection::NothingToUndo));
        };

        self.state.grid = snapshot.grid;
        self.state.current_player = snapshot.to_move;
        self.state.captures = snapshot.captures;
        self.state.pass_streak = 0;
        self.state.last_move = self.state.history.last_move();

        Ok(self.stage())
    }

    /// Clear the board at the current size. Komi is kept.
    pub fn reset(&mut self) -> Stage {
        self.change_board_size(self.state.board_size)
    }

    pub fn change_board_size(&mut self, board_size: BoardSize) -> Stage {
        let rules = Rules {
            board_size,
            komi: self.state.komi,
        };
        self.state = GameState::fresh(rules);
        tracing::info!(%board_size, "game reset");
        self.stage()
    }

    /// Whether the player to move could place at `point` right now.
    pub fn is_legal(&self, point: Point) -> bool {
        self.check_placement(point).is_ok()
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        self.state.clone()
    }

    pub fn from_game_state(state: GameState) -> Result<Self, Rejection> {
        state.check_consistency()?;
        Ok(Engine { state })
    }

    // -- Internal helpers --

    fn check_placement(&self, point: Point) -> Result<Placement, Rejection> {
        if self.state.game_over {
            return Err(Rejection::GameOver);
        }
        validate::place_stone(
            &self.state.grid,
            &self.state.captures,
            point,
            self.state.current_player,
        )
    }

    fn finish(&mut self) {
        let score = scoring::score(&self.state.grid, &self.state.captures, self.state.komi);
        tracing::info!(
            result = %score.result(),
            black = score.final_score.black,
            white = score.final_score.white,
            "game over"
        );
        self.state.score = Some(score);
        self.state.game_over = true;
    }

    fn rejected(&self, intent: Intent, reason: Rejection) -> Rejection {
        tracing::debug!(
            %intent,
            player = %self.state.current_player,
            %reason,
            "intent rejected"
        );
        reason
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_rules(Rules::default())
    }
}
