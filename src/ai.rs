// Heuristic computer opponent: win if possible, else block, else random,
// with a forced random move every RANDOM_MOVE_INTERVAL calls so it stays
// beatable. No heap allocations.

use crate::{
    board::Board,
    common::{Mark, MoveError},
    config::RANDOM_MOVE_INTERVAL,
    game,
};
use rand::Rng;

/// Move-selection policy for the computer player. The only state is the
/// number of moves chosen since the last board reset.
#[derive(Debug, Clone, Default)]
pub struct OpponentPolicy {
    move_counter: u32,
}

impl OpponentPolicy {
    pub const fn new() -> Self {
        Self { move_counter: 0 }
    }

    /// Moves chosen since the last reset.
    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    /// Called whenever the board is cleared.
    pub fn reset(&mut self) {
        self.move_counter = 0;
    }

    /// Pick the empty cell `ai_player` should occupy next.
    ///
    /// Fails with [`MoveError::NoEmptyCell`] on a full board, in which case
    /// the move counter is left unchanged.
    pub fn choose_move<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        ai_player: Mark,
        human_player: Mark,
        rng: &mut R,
    ) -> Result<(usize, usize), MoveError> {
        if board.is_full() {
            return Err(MoveError::NoEmptyCell);
        }
        self.move_counter += 1;

        if self.move_counter % RANDOM_MOVE_INTERVAL == 0 {
            let cell = random_empty_cell(board, rng).ok_or(MoveError::NoEmptyCell)?;
            log::debug!("move {}: forced random {:?}", self.move_counter, cell);
            return Ok(cell);
        }
        if let Some(cell) = find_winning_move(board, ai_player) {
            log::debug!("move {}: {} wins at {:?}", self.move_counter, ai_player, cell);
            return Ok(cell);
        }
        if let Some(cell) = find_winning_move(board, human_player) {
            log::debug!("move {}: blocking {} at {:?}", self.move_counter, human_player, cell);
            return Ok(cell);
        }
        let cell = random_empty_cell(board, rng).ok_or(MoveError::NoEmptyCell)?;
        log::debug!("move {}: random {:?}", self.move_counter, cell);
        Ok(cell)
    }
}

/// First empty cell, in row-major order, where placing `mark` completes a
/// line.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<(usize, usize)> {
    board.empty_cells().find(|&(r, c)| {
        board
            .with_move(r, c, mark)
            .map(|next| game::check_winner(&next))
            .unwrap_or(false)
    })
}

/// Uniformly random empty cell, or `None` on a full board.
pub fn random_empty_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let count = board.empty_count();
    if count == 0 {
        return None;
    }
    board.empty_cells().nth(rng.random_range(0..count))
}
