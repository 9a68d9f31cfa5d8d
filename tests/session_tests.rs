use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::{
    check_winner, AiPlayer, Board, Cell, GameMode, GameStatus, Mark, MoveError, MoveOutcome,
    Player, ScoreBoard, Session,
};

fn play(session: &mut Session, moves: &[(usize, usize)]) -> MoveOutcome {
    let mut last = MoveOutcome::Continue;
    for &(r, c) in moves {
        last = session.submit_move(r, c).unwrap();
    }
    last
}

#[test]
fn test_new_session_defaults() {
    let session = Session::new();
    assert_eq!(session.mode(), GameMode::Multiplayer);
    assert_eq!(session.role(), Mark::X);
    assert_eq!(session.current_player(), Mark::X);
    assert!(!session.is_game_over());
    assert!(!session.is_ai_turn());
    assert_eq!(session.scores(), ScoreBoard::default());
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_top_row_win_freezes_round() {
    let mut session = Session::new();
    let outcome = play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(outcome, MoveOutcome::Won(Mark::X));
    assert_eq!(session.scores().x_wins, 1);
    assert_eq!(session.status(), GameStatus::Won(Mark::X));
    assert!(session.is_game_over());
    assert_eq!(session.submit_move(2, 0), Err(MoveError::GameOver));

    session.begin_next_round();
    assert!(!session.is_game_over());
    assert_eq!(session.current_player(), Mark::X);
    assert_eq!(session.board().empty_count(), 9);
    assert_eq!(session.scores().x_wins, 1);
}

#[test]
fn test_o_win_credits_o() {
    let mut session = Session::new();
    let outcome = play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    assert_eq!(outcome, MoveOutcome::Won(Mark::O));
    assert_eq!(
        session.scores(),
        ScoreBoard {
            x_wins: 0,
            o_wins: 1,
            draws: 0
        }
    );
}

#[test]
fn test_draw_counts_once() {
    let mut session = Session::new();
    let outcome = play(
        &mut session,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(outcome, MoveOutcome::Draw);
    assert_eq!(session.scores().draws, 1);
    assert_eq!(session.scores().rounds(), 1);
    assert!(session.is_game_over());
}

#[test]
fn test_illegal_moves_are_rejected() {
    let mut session = Session::new();
    session.submit_move(1, 1).unwrap();
    assert_eq!(
        session.submit_move(1, 1),
        Err(MoveError::Occupied { row: 1, col: 1 })
    );
    assert_eq!(
        session.submit_move(3, 1),
        Err(MoveError::OutOfBounds { row: 3, col: 1 })
    );
    // turn did not pass
    assert_eq!(session.current_player(), Mark::O);
    assert_eq!(session.board().get(1, 1).unwrap(), Cell::X);
}

#[test]
fn test_single_player_as_x() {
    let mut rng = SmallRng::seed_from_u64(10);
    let mut session = Session::single_player(Mark::X);
    assert!(!session.is_ai_turn());
    assert_eq!(session.ai_move(&mut rng), Err(MoveError::NotYourTurn));

    assert_eq!(session.submit_move(1, 1), Ok(MoveOutcome::AiToMove));
    assert!(session.is_ai_turn());
    assert_eq!(session.current_player(), Mark::O);
    assert_eq!(session.submit_move(0, 0), Err(MoveError::NotYourTurn));

    assert_eq!(session.ai_move(&mut rng), Ok(MoveOutcome::Continue));
    assert!(!session.is_ai_turn());
    assert_eq!(session.current_player(), Mark::X);
    assert_eq!(session.board().empty_count(), 7);
    assert_eq!(session.ai_move_count(), 1);
}

#[test]
fn test_single_player_as_o_computer_moves_first() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut session = Session::single_player(Mark::O);
    assert!(session.is_ai_turn());
    assert_eq!(session.submit_move(0, 0), Err(MoveError::NotYourTurn));

    session.ai_move(&mut rng).unwrap();
    assert_eq!(session.board().occupied().count_ones(), 1);
    assert_eq!(session.board().marks(Mark::X).count_ones(), 1);
    assert_eq!(session.current_player(), Mark::O);
}

#[test]
fn test_computer_blocks_in_session() {
    let mut rng = SmallRng::seed_from_u64(12);
    let mut session = Session::single_player(Mark::X);
    session.submit_move(0, 0).unwrap();
    // first computer move is whatever it picks; make sure X then threatens
    session.ai_move(&mut rng).unwrap();
    let (r, c) = if session.board().get(0, 1).unwrap() == Cell::Empty
        && session.board().get(0, 2).unwrap() == Cell::Empty
    {
        (0, 1)
    } else {
        (1, 0)
    };
    session.submit_move(r, c).unwrap();
    // O holds a single cell in row 0, so the threatened cell is free
    let block = if (r, c) == (0, 1) { (0, 2) } else { (2, 0) };
    assert_eq!(session.board().get(block.0, block.1).unwrap(), Cell::Empty);
    assert_eq!(session.ai_move(&mut rng), Ok(MoveOutcome::Continue));
    assert_eq!(session.board().get(block.0, block.1).unwrap(), Cell::O);
    assert_eq!(session.ai_move_count(), 2);
}

/// First empty cell where X neither completes a line nor takes O's
/// winning cell; any empty cell when there is no such cell.
fn careless_x_move(board: &Board) -> (usize, usize) {
    let completes = |(r, c): (usize, usize), mark: Mark| {
        check_winner(&board.with_move(r, c, mark).unwrap())
    };
    board
        .empty_cells()
        .find(|&cell| !completes(cell, Mark::X) && !completes(cell, Mark::O))
        .or_else(|| board.empty_cells().next())
        .unwrap()
}

#[test]
fn test_computer_win_credited_to_o() {
    let mut computer_wins = 0;
    for seed in 0..100 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = Session::single_player(Mark::X);
        while !session.is_game_over() {
            let (r, c) = careless_x_move(session.board());
            if session.submit_move(r, c).unwrap().is_round_over() {
                break;
            }
            if session.ai_move(&mut rng).unwrap() == MoveOutcome::Won(Mark::O) {
                assert_eq!(session.status(), GameStatus::Won(Mark::O));
                assert_eq!(
                    session.scores(),
                    ScoreBoard {
                        x_wins: 0,
                        o_wins: 1,
                        draws: 0
                    }
                );
                assert!(session.is_game_over());
                assert!(!session.is_ai_turn());
                assert_eq!(session.submit_move(r, c), Err(MoveError::GameOver));
                computer_wins += 1;
            }
        }
    }
    assert!(computer_wins > 0);
}

/// Scripted player that records every opponent move it is told about.
struct Recorder {
    script: Vec<(usize, usize)>,
    seen: Vec<((usize, usize), Mark)>,
}

impl Recorder {
    fn new(script: &[(usize, usize)]) -> Self {
        Recorder {
            script: script.iter().rev().copied().collect(),
            seen: Vec::new(),
        }
    }
}

impl Player for Recorder {
    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        _board: &Board,
        _mark: Mark,
    ) -> Result<(usize, usize), MoveError> {
        self.script.pop().ok_or(MoveError::Abandoned)
    }

    fn handle_opponent_move(&mut self, coord: (usize, usize), mark: Mark) {
        self.seen.push((coord, mark));
    }
}

#[test]
fn test_run_round_reports_opponent_moves() {
    let mut rng = SmallRng::seed_from_u64(15);
    let mut session = Session::new();
    let mut x = Recorder::new(&[(0, 0), (0, 1), (0, 2)]);
    let mut o = Recorder::new(&[(1, 1), (2, 2)]);
    let status = session.run_round(&mut x, &mut o, &mut rng).unwrap();
    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(o.seen, vec![((0, 0), Mark::X), ((0, 1), Mark::X), ((0, 2), Mark::X)]);
    assert_eq!(x.seen, vec![((1, 1), Mark::O), ((2, 2), Mark::O)]);
}

#[test]
fn test_mode_change_resets_scores_only_on_change() {
    let mut session = Session::new();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(session.scores().x_wins, 1);

    session.set_mode(GameMode::Multiplayer);
    assert_eq!(session.scores().x_wins, 1);
    assert!(!session.is_game_over());
    assert_eq!(session.board().empty_count(), 9);

    session.set_mode(GameMode::SinglePlayer);
    assert_eq!(session.scores(), ScoreBoard::default());
    assert_eq!(session.mode(), GameMode::SinglePlayer);
}

#[test]
fn test_role_change_resets_scores_and_board() {
    let mut session = Session::single_player(Mark::X);
    session.submit_move(1, 1).unwrap();
    session.set_role(Mark::O);
    assert_eq!(session.role(), Mark::O);
    assert_eq!(session.board().empty_count(), 9);
    assert!(session.is_ai_turn());

    session.set_mode(GameMode::Multiplayer);
    assert!(!session.is_ai_turn());
}

#[test]
fn test_board_reset_restarts_ai_counter() {
    let mut rng = SmallRng::seed_from_u64(13);
    let mut session = Session::single_player(Mark::O);
    session.ai_move(&mut rng).unwrap();
    assert_eq!(session.ai_move_count(), 1);
    session.reset_board();
    assert_eq!(session.ai_move_count(), 0);
    assert!(session.is_ai_turn());
}

#[test]
fn test_labels() {
    let mut session = Session::new();
    assert_eq!(session.turn_text(), "Player X's Turn");
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(session.score_text(), "X Wins: 1 | O Wins: 0 | Draws: 0");
    session.begin_next_round();
    session.submit_move(0, 0).unwrap();
    assert_eq!(session.turn_text(), "Player O's Turn");
}

#[test]
fn test_run_round_single_player() {
    let mut rng = SmallRng::seed_from_u64(14);
    let mut session = Session::single_player(Mark::O);
    let mut unused = AiPlayer::new();
    let mut human = AiPlayer::new();
    for _ in 0..5 {
        let status = session.run_round(&mut unused, &mut human, &mut rng).unwrap();
        assert!(matches!(status, GameStatus::Won(_) | GameStatus::Draw));
    }
    assert_eq!(session.scores().rounds(), 5);
    // the X seat belongs to the computer, so its player is never asked
    assert_eq!(unused.move_counter(), 0);
}
