use lights_out_core::*;

#[test]
fn center_toggle_round_trip_on_unlit_three_by_three() {
    let board = RandomBoardGenerator::new(0).generate(BoardConfig::new((3, 3), 0.0));
    assert_eq!(board.lit_count(), 0);

    let (board, won) = board.toggled((1, 1));
    assert!(!won);
    assert_eq!(board.lit_count(), 5);
    let lit: Vec<_> = board.iter_lit().collect();
    assert_eq!(lit, [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
    assert_eq!(board.to_string(), ".O.\nOOO\n.O.");

    let (board, won) = board.toggled((1, 1));
    assert!(won);
    assert!(board.is_won());
}

#[test]
fn session_driven_by_cell_labels() {
    let mut session = PlaySession::generate(RandomBoardGenerator::new(0), BoardConfig::new((3, 3), 0.0));

    let label = coord_label((1, 1));
    assert_eq!(label, "1-1");

    let coords = parse_coord_label(&label).unwrap();
    assert_eq!(session.toggle(coords), Ok(ToggleOutcome::Toggled));
    assert_eq!(session.state(), GameState::Playing);

    assert_eq!(session.toggle(coords), Ok(ToggleOutcome::Won));
    assert_eq!(session.state(), GameState::Won);
    assert_eq!(session.moves(), 2);

    assert_eq!(session.toggle(coords), Err(GameError::AlreadyEnded));
}

#[test]
fn restart_replaces_the_whole_session() {
    let config = BoardConfig::new((4, 6), 1.0);
    let mut session = PlaySession::generate(RandomBoardGenerator::new(1), config);
    session.toggle((0, 0)).unwrap();
    assert_eq!(session.moves(), 1);

    session = PlaySession::generate(RandomBoardGenerator::new(2), config);
    assert_eq!(session.moves(), 0);
    assert_eq!(session.state(), GameState::Playing);
    assert_eq!(session.board().lit_count(), 24);
}

#[test]
fn solving_a_generated_board_wins_the_session() {
    let config = BoardConfig::new((5, 5), 1.0);
    let mut session = PlaySession::generate(RandomBoardGenerator::new(3), config);

    let solution = solve(session.board()).expect("fully lit 5x5 is solvable");
    let presses: Vec<_> = solution.iter_presses().collect();
    let (last, rest) = presses.split_last().unwrap();
    for &coords in rest {
        assert_eq!(session.toggle(coords), Ok(ToggleOutcome::Toggled));
    }
    assert_eq!(session.toggle(*last), Ok(ToggleOutcome::Won));
    assert_eq!(session.moves() as usize, presses.len());
}
