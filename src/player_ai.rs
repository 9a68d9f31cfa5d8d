use crate::{
    ai::OpponentPolicy,
    board::Board,
    common::{Mark, MoveError},
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer player backed by the heuristic [`OpponentPolicy`].
#[derive(Debug, Default)]
pub struct AiPlayer {
    policy: OpponentPolicy,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self {
            policy: OpponentPolicy::new(),
        }
    }

    /// Moves chosen since the last reset.
    pub fn move_counter(&self) -> u32 {
        self.policy.move_counter()
    }
}

impl Player for AiPlayer {
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> Result<(usize, usize), MoveError> {
        self.policy.choose_move(board, mark, mark.opponent(), rng)
    }

    fn reset(&mut self) {
        self.policy.reset();
    }
}
