use super::*;

#[test]
fn test_initial_board_piece_counts() {
    let b = create_initial_board();
    let counts = count_pieces(&b);
    assert_eq!(counts.red, PIECES_PER_SIDE);
    assert_eq!(counts.black, PIECES_PER_SIDE);
    assert_eq!(count_kings(&b), PieceCount::default());
}

#[test]
fn test_initial_board_layout() {
    let b = Board::initial();
    for (square, piece) in b.pieces() {
        assert!(square.is_dark(), "{} should be dark", square);
        match piece.player {
            Player::Black => assert!(square.row < 3),
            Player::Red => assert!(square.row > 4),
        }
        assert!(!piece.is_king());
    }
    for col in 0..BOARD_SIZE {
        assert!(b.is_empty_at(pos(3, col)));
        assert!(b.is_empty_at(pos(4, col)));
    }
}

#[test]
fn test_light_squares_always_empty() {
    let b = Board::initial();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if !is_dark_square(row, col) {
                assert!(b.is_empty_at(pos(row, col)));
            }
        }
    }
}

#[test]
fn test_diagram_round_trip() {
    let b = Board::initial();
    let text = b.to_string();
    assert_eq!(Board::from_diagram(&text), Ok(b));
    assert!(text.starts_with(".b.b.b.b\n"));
}

#[test]
fn test_diagram_accepts_spacing() {
    let b = board(
        ". . . . . . . .
         . . . . . . . .
         . . . . . . . .
         . . . . . . . .
         . . . b . . . .
         . . R . . . . .
         . . . . . . . .
         . . . . . . . .",
    );
    assert_eq!(b.piece_at(pos(4, 3)), Some(Piece::man(Player::Black)));
    assert_eq!(b.piece_at(pos(5, 2)), Some(Piece::king(Player::Red)));
    assert_eq!(b.pieces().count(), 2);
}

#[test]
fn test_diagram_rejects_light_square() {
    let err = Board::from_diagram(
        "r.......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    assert_eq!(err, Err(crate::error::EngineError::PieceOnLightSquare { row: 0, col: 0 }));
}

#[test]
fn test_diagram_rejects_bad_shape() {
    assert!(matches!(
        Board::from_diagram("........\n........"),
        Err(crate::error::EngineError::InvalidDiagram { .. })
    ));
    assert!(matches!(
        Board::from_diagram(&".x......\n".repeat(8)),
        Err(crate::error::EngineError::InvalidDiagram { .. })
    ));
}

#[test]
fn test_with_pieces_validates_squares() {
    let ok = Board::with_pieces(&[(pos(2, 1), Piece::man(Player::Black))]);
    assert!(ok.is_ok());

    let light = Board::with_pieces(&[(pos(2, 2), Piece::man(Player::Black))]);
    assert_eq!(light, Err(crate::error::EngineError::PieceOnLightSquare { row: 2, col: 2 }));

    let outside = Board::with_pieces(&[(pos(8, 1), Piece::man(Player::Black))]);
    assert_eq!(outside, Err(crate::error::EngineError::InvalidPosition { row: 8, col: 1 }));
}

#[test]
fn test_execute_move_leaves_original_untouched() {
    let b = Board::initial();
    let mv = Move::simple(pos(5, 0), pos(4, 1));
    let next = execute_move(&b, &mv);

    assert_eq!(b, Board::initial());
    assert!(next.is_empty_at(pos(5, 0)));
    assert_eq!(next.piece_at(pos(4, 1)), Some(Piece::man(Player::Red)));
}

#[test]
fn test_execute_move_from_empty_square_is_noop() {
    let b = Board::initial();
    let mv = Move::simple(pos(4, 1), pos(3, 2));
    assert_eq!(b.execute_move(&mv), b);
}
