// Position evaluation function
// Returns a score from the perspective of the given player (positive = good for them)

use crate::game_repr::piece_moves::flies;
use crate::game_repr::{all_valid_moves, Board, Piece, Player, Position, RuleSet, BOARD_SIZE};

// Material values
pub const MAN_VALUE: i32 = 100;
pub const KING_VALUE: i32 = 150;

// Positional bonuses
const CENTER_BONUS: i32 = 5;
const ADVANCEMENT_BONUS: i32 = 2;
const BACK_ROW_BONUS: i32 = 10;
const FLYING_KING_CENTER_BONUS: i32 = 14;

// Per legal move of difference between the two sides
const MOBILITY_WEIGHT: i32 = 2;

fn piece_value(piece: Piece) -> i32 {
    if piece.is_king() {
        KING_VALUE
    } else {
        MAN_VALUE
    }
}

/// Positional bonus for `piece` on `pos`, from its owner's point of view
fn position_bonus(pos: Position, piece: Piece, rules: &RuleSet) -> i32 {
    let mut bonus = 0;

    if (2..=5).contains(&pos.col) {
        bonus += CENTER_BONUS;
    }

    if !piece.is_king() {
        let distance_from_start = (pos.row as i32 - piece.player.back_row() as i32).abs();
        bonus += distance_from_start * ADVANCEMENT_BONUS;

        if pos.row == piece.player.back_row() {
            bonus += BACK_ROW_BONUS;
        }
    }

    if flies(piece, rules) {
        bonus += flying_king_centrality(pos);
    }

    bonus
}

/// Decays linearly with Manhattan distance from the board centre.
///
/// Distances are doubled so the centre (3.5, 3.5) stays on integer math:
/// the closest dark squares score 12, the long-diagonal corners 0.
fn flying_king_centrality(pos: Position) -> i32 {
    let edge = BOARD_SIZE as i32 - 1;
    let doubled_distance = (2 * pos.row as i32 - edge).abs() + (2 * pos.col as i32 - edge).abs();
    (FLYING_KING_CENTER_BONUS - doubled_distance).max(0)
}

/// Material and position only, no move generation
pub fn static_material(board: &Board, player: Player, rules: &RuleSet) -> i32 {
    board
        .pieces()
        .map(|(pos, piece)| {
            let value = piece_value(piece) + position_bonus(pos, piece, rules);
            if piece.is(player) {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// Mobility difference scaled by its weight, oriented toward `player`
pub fn mobility(board: &Board, player: Player, rules: &RuleSet) -> i32 {
    let own = all_valid_moves(board, player, rules).len() as i32;
    let theirs = all_valid_moves(board, player.opposite(), rules).len() as i32;
    (own - theirs) * MOBILITY_WEIGHT
}

/// Zero-sum score of `board` for `player`.
///
/// Under an inverted win condition the whole sum is negated, so shedding
/// material and mobility becomes the favourable direction.
pub fn evaluate_board(board: &Board, player: Player, rules: &RuleSet) -> i32 {
    let score = static_material(board, player, rules) + mobility(board, player, rules);
    if rules.inverted_win_condition {
        -score
    } else {
        score
    }
}
