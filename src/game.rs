use crate::{
    board::Board,
    common::Mark,
};

/// Whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub current_player: Mark,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            current_player: Mark::X,
        }
    }
}

/// Win and draw tallies for the current process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    /// Wins credited to `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Number of completed rounds.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// Returns `true` if any row, column or diagonal holds three identical marks.
pub fn check_winner(board: &Board) -> bool {
    winner(board).is_some()
}

/// Mark owning a completed line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O].into_iter().find(|&m| board.has_line(m))
}

/// Returns `true` when no cell is empty. A full board may also be a win;
/// consult [`check_winner`] first.
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

/// Classify the board, checking for a win before a draw.
pub fn status(board: &Board) -> GameStatus {
    if let Some(mark) = winner(board) {
        GameStatus::Won(mark)
    } else if check_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Turn tracking and score keeping. The board itself stays with the caller.
#[derive(Debug, Default)]
pub struct GameEngine {
    state: GameState,
    scores: ScoreBoard,
}

impl GameEngine {
    /// Create an engine with X to move and all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_player(&self) -> Mark {
        self.state.current_player
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    /// Hand the turn to the other mark.
    pub fn switch_player(&mut self) {
        self.state.current_player = self.state.current_player.opponent();
    }

    /// Credit a win to the current player. Call before switching turns so
    /// the mark that just moved is the one credited.
    pub fn increment_win_counter(&mut self) {
        match self.state.current_player {
            Mark::X => self.scores.x_wins += 1,
            Mark::O => self.scores.o_wins += 1,
        }
        log::debug!(
            "{} wins; score now X {} / O {} / draws {}",
            self.state.current_player,
            self.scores.x_wins,
            self.scores.o_wins,
            self.scores.draws
        );
    }

    pub fn increment_draw_count(&mut self) {
        self.scores.draws += 1;
        log::debug!("draw recorded; {} draws so far", self.scores.draws);
    }

    /// Start a new round with X to move. Scores are kept.
    pub fn reset_game(&mut self) {
        self.state = GameState::default();
    }

    /// Zero every counter.
    pub fn reset_scores(&mut self) {
        self.scores = ScoreBoard::default();
    }
}
