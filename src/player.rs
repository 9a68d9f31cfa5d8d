use crate::{
    board::Board,
    common::{Mark, MoveError},
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the cell to play as `mark` on `board`.
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> Result<(usize, usize), MoveError>;

    /// Called when the board is cleared for a new round.
    fn reset(&mut self) {}

    /// Inform the player of a move just made by its opponent.
    fn handle_opponent_move(&mut self, _coord: (usize, usize), _mark: Mark) {}
}
