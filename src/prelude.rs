//! Commonly used types for ease of import.

pub use crate::{
    check_draw, check_winner, Board, Cell, GameEngine, GameMode, GameStatus, Mark, MoveError,
    MoveOutcome, OpponentPolicy, Player, AiPlayer, ScoreBoard, Session,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
