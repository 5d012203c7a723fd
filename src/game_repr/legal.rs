//! Legal move generation on top of the per-piece generators.
//!
//! Two filters sit between raw piece moves and what a player may actually do:
//!
//! - **Forced capture**: when the ruleset forces captures and any own piece
//!   can jump, simple moves are dropped for every piece.
//! - **Majority rule**: when the ruleset has it and a capture is forced, only
//!   moves capturing the most pieces anywhere on the board survive.
//!
//! Both filters are global, so [`valid_moves_for_piece`] is a view onto
//! [`all_valid_moves`] rather than a separate computation.

use super::*;

/// True if any piece of `player` has at least one capture available
pub fn player_has_captures(board: &Board, player: Player, rules: &RuleSet) -> bool {
    board
        .pieces_of(player)
        .any(|(pos, piece)| board.has_hop(pos, piece, rules))
}

/// Every legal move for `player` under `rules`, in row-major order of origin
pub fn all_valid_moves(board: &Board, player: Player, rules: &RuleSet) -> MoveList {
    let mut moves = MoveList::new();
    all_valid_moves_into(board, player, rules, &mut moves);
    moves
}

/// Generate every legal move for `player` into a provided buffer
pub fn all_valid_moves_into(board: &Board, player: Player, rules: &RuleSet, moves: &mut MoveList) {
    moves.clear();
    let must_capture = rules.forced_captures && player_has_captures(board, player, rules);

    for (pos, piece) in board.pieces_of(player) {
        board.jump_moves_into(pos, piece, rules, moves);
        if !must_capture {
            board.simple_moves_into(pos, piece, rules, moves);
        }
    }

    if rules.majority_rule && must_capture {
        let longest = moves.iter().map(Move::capture_count).max().unwrap_or(0);
        moves.retain(|mv| mv.capture_count() == longest);
    }
}

/// Legal moves for the piece on `pos`; empty for an empty square
pub fn valid_moves_for_piece(board: &Board, pos: Position, rules: &RuleSet) -> MoveList {
    let Some(piece) = board.piece_at(pos) else {
        return MoveList::new();
    };
    let mut moves = all_valid_moves(board, piece.player, rules);
    moves.retain(|mv| mv.from == pos);
    moves
}

/// Squares holding a piece of `player` with at least one legal move
pub fn selectable_pieces(board: &Board, player: Player, rules: &RuleSet) -> Vec<Position> {
    let mut squares: Vec<Position> = all_valid_moves(board, player, rules)
        .iter()
        .map(|mv| mv.from)
        .collect();
    squares.dedup();
    squares
}

/// Match a requested from/to pair against the generated moves.
///
/// Returns the legal move with that origin and destination, or `None` when the
/// origin is empty, belongs to the other player, or `to` is not reachable.
/// When several chains share the same endpoints the first generated one wins.
pub fn is_move_valid(
    board: &Board,
    from: Position,
    to: Position,
    player: Player,
    rules: &RuleSet,
) -> Option<Move> {
    let piece = board.piece_at(from)?;
    if !piece.is(player) {
        return None;
    }
    valid_moves_for_piece(board, from, rules)
        .into_iter()
        .find(|mv| positions_equal(mv.to, to))
}

/// Count leaf nodes of the legal move tree to `depth` plies.
///
/// Play stops early on a side with no moves, which contributes no leaves.
pub fn perft(board: &Board, player: Player, rules: &RuleSet, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_valid_moves(board, player, rules);

    // Bulk counting at the frontier
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&board.execute_move(mv), player.opposite(), rules, depth - 1))
        .sum()
}
