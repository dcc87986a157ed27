//! Tests for the two-player game model.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use xo_game::rules::LINES;
use xo_game::{GameModel, GameStatus, Mode, MoveStatus, Player, Position};

use Position::*;

fn play(game: &mut GameModel, moves: &[Position]) -> Vec<MoveStatus> {
    moves.iter().map(|pos| game.apply_move(*pos)).collect()
}

/// X: A1, A3, B3, C2, B2. O: A2, B1, C1, C3. No line for either side.
const DRAW_SEQUENCE: [Position; 9] = [A1, A2, A3, B1, B3, C1, C2, C3, B2];

#[test]
fn test_new_game_starts_with_x_on_empty_board() {
    let game = GameModel::new(Mode::Multi);
    assert_eq!(game.current_player(), Player::X);
    assert!(game.board().is_empty());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.mode(), Mode::Multi);
}

#[test]
fn test_should_change_player() {
    let mut game = GameModel::new(Mode::Multi);
    let first = game.current_player();
    assert_eq!(game.apply_move(A1), MoveStatus::Accepted);
    assert_ne!(game.current_player(), first);
}

#[test]
fn test_should_invalidate_same_move() {
    let mut game = GameModel::new(Mode::Multi);
    let _ = game.apply_move(A3);
    assert!(!game.is_valid_move(A3));
}

#[test]
fn test_should_permit_move() {
    let mut game = GameModel::new(Mode::Multi);
    let _ = game.apply_move(C2);
    assert!(game.is_valid_move(B3));
}

#[test]
fn test_occupied_move_rejected_without_changes() {
    let mut game = GameModel::new(Mode::Multi);
    let _ = game.apply_move(B2);
    let before = game.state().clone();

    assert_eq!(game.apply_move(B2), MoveStatus::Rejected);
    assert_eq!(game.state(), &before);
    assert!(game.is_occupied_by(B2, Player::X));
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_win_on_column() {
    let mut game = GameModel::new(Mode::Multi);
    let statuses = play(&mut game, &[A1, B1, A2, B2, A3]);

    assert_eq!(statuses.last(), Some(&MoveStatus::Terminal));
    assert_eq!(game.winner(), Some(Player::X));
    assert!(game.is_terminal());
    // No switch after the winning move.
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_o_can_win() {
    let mut game = GameModel::new(Mode::Multi);
    let statuses = play(&mut game, &[A1, B1, A2, B2, C3, B3]);

    assert_eq!(
        statuses,
        vec![
            MoveStatus::Accepted,
            MoveStatus::Accepted,
            MoveStatus::Accepted,
            MoveStatus::Accepted,
            MoveStatus::Accepted,
            MoveStatus::Terminal,
        ]
    );
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_every_line_wins_for_x() {
    for line in LINES {
        let mut game = GameModel::new(Mode::Multi);
        let others: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| !line.contains(pos))
            .take(2)
            .collect();
        let moves = [line[0], others[0], line[1], others[1], line[2]];

        let statuses = play(&mut game, &moves);
        assert_eq!(statuses.last(), Some(&MoveStatus::Terminal), "line {:?}", line);
        assert_eq!(game.winner(), Some(Player::X), "line {:?}", line);
    }
}

#[test]
fn test_diagonal_win_ends_game_early() {
    let mut game = GameModel::new(Mode::Multi);
    let statuses = play(&mut game, &[A1, A2, A3, B1, B2, B3, C1, C2, C3]);

    // X completes C1-B2-A3 on the seventh move; the rest bounce.
    assert_eq!(statuses[6], MoveStatus::Terminal);
    assert_eq!(&statuses[7..], &[MoveStatus::Rejected, MoveStatus::Rejected]);
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.board().len(), 7);
    assert_eq!(game.apply_move(C3), MoveStatus::Rejected);
}

#[test]
fn test_last_move_should_end_game() {
    let mut game = GameModel::new(Mode::Multi);
    let statuses = play(&mut game, &DRAW_SEQUENCE[..7]);
    assert!(statuses.iter().all(|s| *s == MoveStatus::Accepted));

    assert!(game.is_valid_move(C3));
    assert_eq!(game.apply_move(C3), MoveStatus::Accepted);
    assert_eq!(game.apply_move(A2), MoveStatus::Rejected);
    assert_eq!(game.apply_move(B2), MoveStatus::Terminal);

    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.winner(), None);
    assert!(game.board().is_full());
}

#[test]
fn test_marks_alternate_by_owner() {
    let mut game = GameModel::new(Mode::Multi);
    let _ = play(&mut game, &DRAW_SEQUENCE);

    for (turn, pos) in DRAW_SEQUENCE.iter().enumerate() {
        let expected = if turn % 2 == 0 { Player::X } else { Player::O };
        assert!(game.is_occupied_by(*pos, expected), "{} should be {}", pos, expected);
        assert!(!game.is_occupied_by(*pos, expected.opponent()));
    }
}

#[test]
fn test_moves_after_terminal_change_nothing() {
    let mut game = GameModel::new(Mode::Multi);
    let _ = play(&mut game, &[A1, B1, A2, B2, A3]);
    let before = game.state().clone();

    for pos in Position::ALL {
        assert_eq!(game.apply_move(pos), MoveStatus::Rejected);
    }
    assert_eq!(game.state(), &before);
}

#[test]
fn test_valid_move_ignores_terminal_state() {
    let mut game = GameModel::new(Mode::Multi);
    let _ = play(&mut game, &[A1, B1, A2, B2, A3]);

    assert!(game.is_terminal());
    assert!(game.is_valid_move(C3));
    assert!(!game.is_valid_move(A1));
}

#[test]
fn test_reset_keeps_mode_and_player() {
    let mut game = GameModel::new(Mode::Multi);
    let _ = play(&mut game, &[A1, B1, A2, B2, C3, B3]);
    assert_eq!(game.winner(), Some(Player::O));

    game.reset();

    assert!(game.board().is_empty());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.winner(), None);
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.mode(), Mode::Multi);
    assert_eq!(game.apply_move(B2), MoveStatus::Accepted);
    assert!(game.is_occupied_by(B2, Player::O));
}

#[test]
fn test_reset_then_replay_is_deterministic() {
    for moves in [&DRAW_SEQUENCE[..], &[A1, B1, A2, B2, A3][..]] {
        let mut game = GameModel::new(Mode::Multi);
        let first = play(&mut game, moves);
        let first_state = game.state().clone();

        game.reset();
        let second = play(&mut game, moves);

        assert_eq!(first, second);
        assert_eq!(game.state(), &first_state);
    }
}

#[test]
fn test_player_alternates_only_on_accepted_moves() {
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = GameModel::new(Mode::Multi);

        for _ in 0..15 {
            let Some(&pos) = Position::ALL.choose(&mut rng) else {
                unreachable!("ALL is not empty");
            };
            let before_player = game.current_player();
            let before_board = game.board().clone();

            match game.apply_move(pos) {
                MoveStatus::Accepted => {
                    assert_eq!(game.current_player(), before_player.opponent());
                    assert_eq!(game.board().len(), before_board.len() + 1);
                }
                MoveStatus::Terminal => {
                    assert_eq!(game.current_player(), before_player);
                    assert!(game.is_terminal());
                }
                MoveStatus::Rejected => {
                    assert_eq!(game.current_player(), before_player);
                    assert_eq!(game.board(), &before_board);
                }
            }
        }
    }
}

#[test]
fn test_state_serializes() {
    let mut game = GameModel::new(Mode::Multi);
    let _ = play(&mut game, &[A1, B2]);

    let json = serde_json::to_value(game.state()).expect("state serializes");
    assert_eq!(json["current_player"], "X");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["board"]["cells"]["A1"], "X");
    assert_eq!(json["board"]["cells"]["B2"], "O");
}
