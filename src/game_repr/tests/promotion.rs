use super::*;

#[test]
fn test_red_man_crowns_on_row_zero() {
    let b = board(
        "........
         ..r.....
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    for mv in all_valid_moves(&b, Player::Red, &RuleSet::american()) {
        let after = execute_move(&b, &mv);
        assert_eq!(after.piece_at(mv.to), Some(Piece::king(Player::Red)));
    }
}

#[test]
fn test_black_man_crowns_on_row_seven() {
    let b = board(
        "........
         ........
         ........
         ........
         ........
         ........
         .b......
         ........",
    );
    let moves = all_valid_moves(&b, Player::Black, &RuleSet::american());
    assert_eq!(moves.len(), 2);
    for mv in &moves {
        assert_eq!(b.execute_move(mv).piece_at(mv.to), Some(Piece::king(Player::Black)));
    }
}

#[test]
fn test_crowning_by_capture() {
    let b = board(
        "........
         ..b.....
         ...r....
         ........
         ........
         ........
         ........
         ........",
    );
    let moves = all_valid_moves(&b, Player::Red, &RuleSet::american());
    assert_eq!(moves.len(), 1);
    let after = b.execute_move(&moves[0]);
    assert_eq!(after.piece_at(pos(0, 1)), Some(Piece::king(Player::Red)));
    assert_eq!(count_kings(&after), PieceCount { red: 1, black: 0 });
}

#[test]
fn test_no_crowning_away_from_promotion_row() {
    let b = create_initial_board();
    let mv = Move::simple(pos(5, 2), pos(4, 3));
    assert_eq!(b.execute_move(&mv).piece_at(pos(4, 3)), Some(Piece::man(Player::Red)));
}

#[test]
fn test_king_stays_king() {
    let b = board(
        "........
         ........
         ........
         ........
         ........
         ........
         ........
         ......B.",
    );
    let mv = Move::simple(pos(7, 6), pos(6, 5));
    assert_eq!(b.execute_move(&mv).piece_at(pos(6, 5)), Some(Piece::king(Player::Black)));
}
