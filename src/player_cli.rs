#![cfg(feature = "std")]

use std::boxed::Box;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    ai,
    board::Board,
    common::{Mark, MoveError},
    config::BOARD_SIZE,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Human player reading moves from a line-oriented input (stdin by default).
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self::from_reader(io::stdin().lock())
    }

    /// Read moves from any buffered reader instead of stdin.
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self {
            input: Box::new(reader),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a coordinate as column letter plus 1-based row, e.g. `B3`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    std::format!("{}{}", col, r + 1)
}

/// Parse `B3` (column letter, 1-based row) or `3 2` (1-based row and column).
/// Range checking is left to the board.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    let mut parts = input.split_whitespace();
    if let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) {
        let row: usize = a.parse().ok()?;
        let col: usize = b.parse().ok()?;
        return Some((row.checked_sub(1)?, col.checked_sub(1)?));
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    Some((row.checked_sub(1)?, col))
}

/// Winning cell for `mark` if there is one, otherwise the cell that blocks
/// the opponent.
fn suggestion(board: &Board, mark: Mark) -> Option<(usize, usize)> {
    ai::find_winning_move(board, mark).or_else(|| ai::find_winning_move(board, mark.opponent()))
}

impl Player for CliPlayer {
    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> Result<(usize, usize), MoveError> {
        let hint = suggestion(board, mark);
        loop {
            match hint {
                Some((r, c)) => std::print!("Player {}, enter move [{}]: ", mark, coord_to_string(r, c)),
                None => std::print!("Player {}, enter move (e.g. B2, q to quit): ", mark),
            }
            // A failed flush only delays the prompt.
            let _ = io::stdout().flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Err(MoveError::Abandoned),
                Ok(_) => {}
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Err(MoveError::Abandoned);
            }
            if line.is_empty() {
                if let Some(coord) = hint {
                    return Ok(coord);
                }
                continue;
            }
            let Some((r, c)) = parse_coord(line) else {
                std::println!("Invalid coordinate, use a column A-C and a row 1-{}", BOARD_SIZE);
                continue;
            };
            match board.get(r, c) {
                Ok(cell) if cell.is_empty() => return Ok((r, c)),
                Ok(_) => std::println!("{} is already taken", coord_to_string(r, c)),
                Err(e) => std::println!("Error: {}", e),
            }
        }
    }

    fn handle_opponent_move(&mut self, coord: (usize, usize), mark: Mark) {
        std::println!("{} played {}", mark, coord_to_string(coord.0, coord.1));
    }
}
