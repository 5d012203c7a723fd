pub mod simple;
pub mod jump;

use super::{Piece, RuleSet};

pub type Direction = (i8, i8);

pub const ALL_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Directions a piece may take a single step in.
///
/// Kings use all four diagonals. Under flying kings every piece does; otherwise
/// men only step toward their promotion row.
pub fn step_directions(piece: Piece, rules: &RuleSet) -> &'static [Direction] {
    if piece.is_king() || rules.flying_kings {
        &ALL_DIRECTIONS
    } else {
        forward_directions(piece)
    }
}

/// Directions a piece may capture in
pub fn capture_directions(piece: Piece, rules: &RuleSet) -> &'static [Direction] {
    if piece.is_king() || rules.backward_capture {
        &ALL_DIRECTIONS
    } else {
        forward_directions(piece)
    }
}

fn forward_directions(piece: Piece) -> &'static [Direction] {
    if piece.player.forward() < 0 {
        &ALL_DIRECTIONS[..2]
    } else {
        &ALL_DIRECTIONS[2..]
    }
}

/// Kings glide along diagonals only when the ruleset has flying kings
pub fn flies(piece: Piece, rules: &RuleSet) -> bool {
    piece.is_king() && rules.flying_kings
}
