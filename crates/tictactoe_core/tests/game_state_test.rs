//! Tests for game state, history and time travel.

use tictactoe_core::{
    Board, GameError, GameState, GameStatus, IgnoredMove, Mark, Move, MoveOutcome, Position, Square,
};

fn pos(cell: usize) -> Position {
    Position::from_index(cell).expect("cell index 0-8")
}

fn play(game: &mut GameState, cells: &[usize]) {
    for &cell in cells {
        let outcome = game.apply_move(pos(cell));
        assert!(outcome.is_applied(), "move at {cell} should apply, got {outcome:?}");
    }
}

fn marks(board: &Board) -> Vec<Option<Mark>> {
    board.squares().iter().map(|s| s.mark()).collect()
}

#[test]
fn test_top_row_win_scenario() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 3, 2]);

    use Mark::{O, X};
    assert_eq!(
        marks(game.current_board()),
        vec![Some(X), Some(X), Some(X), Some(O), Some(O), None, None, None, None]
    );

    let win = game.win_result().expect("X wins");
    assert_eq!(win.mark(), Mark::X);
    assert_eq!(win.indices(), [0, 1, 2]);
    assert_eq!(game.status(), GameStatus::Won(win));
    assert!(!game.is_draw());
}

#[test]
fn test_draw_scenario() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(game.is_draw());
    assert_eq!(game.win_result(), None);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.apply_move(Position::Center), MoveOutcome::Ignored(IgnoredMove::GameOver));
}

#[test]
fn test_occupied_cell_is_a_noop_at_every_point() {
    let mut game = GameState::new();
    for &cell in &[4, 0, 8, 2] {
        play(&mut game, &[cell]);
        let taken_squares: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|p| !game.current_board().is_empty(*p))
            .collect();
        for taken in taken_squares {
            let before = game.clone();
            let outcome = game.apply_move(taken);
            assert_eq!(outcome, MoveOutcome::Ignored(IgnoredMove::SquareOccupied(taken)));
            assert_eq!(game, before);
        }
    }
}

#[test]
fn test_pointer_tracks_end_of_history_during_play() {
    let mut game = GameState::new();
    for &cell in &[4, 0, 8, 2, 6] {
        play(&mut game, &[cell]);
        assert_eq!(game.history().len() - 1, game.current_move());
    }
}

#[test]
fn test_jump_then_move_truncates() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0, 8, 2, 6]);
    let discarded = game.history()[3];

    game.jump_to(2).expect("in range");
    // Navigation alone keeps the future.
    assert_eq!(game.history().len(), 6);

    play(&mut game, &[1]);

    assert_eq!(game.history().len(), 2 + 2);
    assert_eq!(game.current_move(), 3);
    assert!(!game.history().contains(&discarded));
    assert_eq!(game.jump_to(4), Err(GameError::OutOfRange { requested: 4, len: 4 }));
}

#[test]
fn test_mark_follows_pointer_parity() {
    let mut game = GameState::new();
    for (k, &cell) in [4, 0, 8, 2, 6, 3].iter().enumerate() {
        let pointer_before = k;
        let action = game.apply_move(pos(cell)).applied().expect("applied");
        let expected = if pointer_before % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(action.mark(), expected);
        assert_eq!(game.move_at(game.current_move()), Some(action));
    }
}

#[test]
fn test_turn_after_jump_is_derived_from_pointer() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0, 8]);

    for index in 0..game.history().len() {
        game.jump_to(index).expect("in range");
        assert_eq!(game.current_turn(), if index % 2 == 0 { Mark::X } else { Mark::O });
    }
}

#[test]
fn test_jump_allowed_after_win_and_play_resumes_from_past() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 3, 2]);
    assert!(game.status().is_over());

    game.jump_to(4).expect("review is allowed after a win");
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.win_result(), None);

    // X plays elsewhere and the winning future is gone.
    play(&mut game, &[8]);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.win_result(), None);
    assert_eq!(game.current_board().get(Position::BottomRight), Square::Occupied(Mark::X));
}

#[test]
fn test_jump_out_of_range_leaves_state() {
    let mut game = GameState::new();
    play(&mut game, &[4]);
    let before = game.clone();

    let err = game.jump_to(7).unwrap_err();

    assert_eq!(err, GameError::OutOfRange { requested: 7, len: 2 });
    assert_eq!(err.to_string(), "Move 7 is out of range (history holds 2 boards)");
    assert_eq!(game, before);
}

#[test]
fn test_reset_yields_fresh_game() {
    let mut game = GameState::new();
    game.set_player_name(Mark::X, "Ada");
    game.set_player_name(Mark::O, "Grace");
    play(&mut game, &[0, 4, 1, 3, 2]);
    game.jump_to(2).expect("in range");

    game.reset();

    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_move(), 0);
    assert_eq!(game.player_names().name(Mark::X), "");
    assert_eq!(game.player_names().name(Mark::O), "");
    assert_eq!(game.win_result(), None);
    assert!(!game.is_draw());
}

#[test]
fn test_names_survive_moves_and_jumps() {
    let mut game = GameState::new();
    game.set_player_name(Mark::O, "");
    game.set_player_name(Mark::X, "Ada");
    play(&mut game, &[4, 0]);
    game.jump_to(0).expect("in range");

    assert_eq!(game.player_names().name(Mark::X), "Ada");
    assert_eq!(game.player_names().display_name(Mark::O, "Player O"), "Player O");
}

#[test]
fn test_moves_lists_full_history() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0, 8]);
    game.jump_to(1).expect("in range");

    assert_eq!(
        game.moves(),
        vec![
            Move::new(Mark::X, Position::Center),
            Move::new(Mark::O, Position::TopLeft),
            Move::new(Mark::X, Position::BottomRight),
        ]
    );
}

#[test]
fn test_state_serializes_history_and_pointer() {
    let mut game = GameState::new();
    game.set_player_name(Mark::X, "Ada");
    play(&mut game, &[4]);

    let json = serde_json::to_value(&game).expect("serializable");

    assert_eq!(json["current_move"], 1);
    assert_eq!(json["history"]["boards"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["history"]["boards"][1]["squares"][4], serde_json::json!({ "Occupied": "X" }));
    assert_eq!(json["players"]["x"], "Ada");
}
