//! Headless game driver.
//!
//! `Session` owns the board and sequences rules-engine and opponent-policy
//! calls for one or two human players: it places marks, classifies the
//! board (win before draw), credits the mover, freezes input once a round
//! is decided and decides when the computer is due. Pacing of computer
//! moves is left to the caller, which waits however long it likes before
//! calling [`Session::ai_move`].

use crate::{
    ai::OpponentPolicy,
    board::Board,
    common::{Mark, MoveError},
    game::{self, GameEngine, GameStatus, ScoreBoard},
    player::Player,
};
use rand::{rngs::SmallRng, Rng};

/// Who plays the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans share the board.
    Multiplayer,
    /// One human against the computer opponent.
    SinglePlayer,
}

/// What happened after a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Round continues; a human plays next.
    Continue,
    /// Round continues; the computer is due and `ai_move` should be called.
    AiToMove,
    /// The mover completed a line. The round is frozen.
    Won(Mark),
    /// Board filled without a line. The round is frozen.
    Draw,
}

impl MoveOutcome {
    pub fn is_round_over(self) -> bool {
        matches!(self, MoveOutcome::Won(_) | MoveOutcome::Draw)
    }
}

pub struct Session {
    board: Board,
    engine: GameEngine,
    policy: OpponentPolicy,
    mode: GameMode,
    role: Mark,
    game_over: bool,
    ai_turn: bool,
}

impl Session {
    /// Multiplayer session with an empty board and zeroed scores.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            engine: GameEngine::new(),
            policy: OpponentPolicy::new(),
            mode: GameMode::Multiplayer,
            role: Mark::X,
            game_over: false,
            ai_turn: false,
        }
    }

    /// Single-player session with the human playing `role`.
    pub fn single_player(role: Mark) -> Self {
        let mut session = Self::new();
        session.mode = GameMode::SinglePlayer;
        session.role = role;
        session.reset_board();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> ScoreBoard {
        self.engine.scores()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Mark played by the human in single-player mode.
    pub fn role(&self) -> Mark {
        self.role
    }

    pub fn current_player(&self) -> Mark {
        self.engine.current_player()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_ai_turn(&self) -> bool {
        self.ai_turn
    }

    /// Moves the computer has chosen since the board was last cleared.
    pub fn ai_move_count(&self) -> u32 {
        self.policy.move_counter()
    }

    /// Classification of the current board.
    pub fn status(&self) -> GameStatus {
        game::status(&self.board)
    }

    /// Switch mode. Scores are zeroed only when the mode actually changes;
    /// the board is always reset.
    pub fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            self.reset_scores();
        }
        self.mode = mode;
        self.reset_board();
        if mode == GameMode::Multiplayer {
            self.ai_turn = false;
        }
    }

    /// Choose the human's mark. Zeroes scores and resets the board.
    pub fn set_role(&mut self, role: Mark) {
        self.role = role;
        self.reset_scores();
        self.reset_board();
    }

    /// Clear the board for a new round with X to move. When the computer
    /// plays X it is due immediately.
    pub fn reset_board(&mut self) {
        self.board.clear();
        self.engine.reset_game();
        self.policy.reset();
        self.ai_turn = false;
        self.game_over = false;
        if self.mode == GameMode::SinglePlayer && self.role == Mark::O {
            self.ai_turn = true;
        }
        log::debug!("board reset, ai_turn={}", self.ai_turn);
    }

    pub fn reset_scores(&mut self) {
        self.engine.reset_scores();
    }

    /// Acknowledge a finished round and start the next one.
    pub fn begin_next_round(&mut self) {
        self.reset_board();
    }

    /// Apply a human move for the current player.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if self.ai_turn {
            return Err(MoveError::NotYourTurn);
        }
        let mover = self.engine.current_player();
        self.board.place(row, col, mover)?;
        log::trace!("{} placed at ({}, {})", mover, row, col);
        if let Some(outcome) = self.settle_round() {
            return Ok(outcome);
        }
        self.engine.switch_player();
        if self.mode == GameMode::SinglePlayer && self.engine.current_player() != self.role {
            self.ai_turn = true;
            return Ok(MoveOutcome::AiToMove);
        }
        Ok(MoveOutcome::Continue)
    }

    /// Let the computer play for the current player.
    pub fn ai_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MoveOutcome, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if !self.ai_turn {
            return Err(MoveError::NotYourTurn);
        }
        let ai_player = self.engine.current_player();
        let (row, col) = self
            .policy
            .choose_move(&self.board, ai_player, ai_player.opponent(), rng)?;
        self.board.place(row, col, ai_player)?;
        log::trace!("{} placed at ({}, {}) by computer", ai_player, row, col);
        if let Some(outcome) = self.settle_round() {
            return Ok(outcome);
        }
        self.engine.switch_player();
        self.ai_turn = false;
        Ok(MoveOutcome::Continue)
    }

    /// Score and freeze the round if the last move decided it.
    fn settle_round(&mut self) -> Option<MoveOutcome> {
        if game::check_winner(&self.board) {
            self.game_over = true;
            self.engine.increment_win_counter();
            return Some(MoveOutcome::Won(self.engine.current_player()));
        }
        if game::check_draw(&self.board) {
            self.game_over = true;
            self.engine.increment_draw_count();
            return Some(MoveOutcome::Draw);
        }
        None
    }

    /// Play one full round. `x` and `o` are asked for moves whenever a human
    /// is due; in single-player mode the computer's side is played by the
    /// session itself, so the matching player is never consulted.
    pub fn run_round(
        &mut self,
        x: &mut dyn Player,
        o: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> Result<GameStatus, MoveError> {
        if self.game_over {
            self.begin_next_round();
        }
        x.reset();
        o.reset();
        loop {
            let mover = self.engine.current_player();
            let outcome = if self.ai_turn {
                self.ai_move(rng)?
            } else {
                let player: &mut dyn Player = match mover {
                    Mark::X => &mut *x,
                    Mark::O => &mut *o,
                };
                let (row, col) = player.select_move(rng, &self.board, mover)?;
                let outcome = self.submit_move(row, col)?;
                match mover {
                    Mark::X => o.handle_opponent_move((row, col), mover),
                    Mark::O => x.handle_opponent_move((row, col), mover),
                }
                outcome
            };
            match outcome {
                MoveOutcome::Won(mark) => return Ok(GameStatus::Won(mark)),
                MoveOutcome::Draw => return Ok(GameStatus::Draw),
                MoveOutcome::Continue | MoveOutcome::AiToMove => {}
            }
        }
    }

    /// `Player X's Turn`
    #[cfg(feature = "std")]
    pub fn turn_text(&self) -> std::string::String {
        std::format!("Player {}'s Turn", self.engine.current_player())
    }

    /// `X Wins: 1 | O Wins: 0 | Draws: 2`
    #[cfg(feature = "std")]
    pub fn score_text(&self) -> std::string::String {
        let s = self.engine.scores();
        std::format!(
            "X Wins: {} | O Wins: {} | Draws: {}",
            s.x_wins, s.o_wins, s.draws
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
