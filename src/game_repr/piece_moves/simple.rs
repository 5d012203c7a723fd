use crate::game_repr::{Board, Move, MoveList, Piece, Position, RuleSet};

use super::{flies, step_directions};

impl Board {
    /// Generate non-capturing moves for `piece` standing on `from` into a provided buffer
    pub fn simple_moves_into(&self, from: Position, piece: Piece, rules: &RuleSet, moves: &mut MoveList) {
        let sliding = flies(piece, rules);

        for &(d_row, d_col) in step_directions(piece, rules) {
            let mut cursor = from;
            // A flying king keeps going until something blocks it
            while let Some(target) = cursor.offset(d_row, d_col) {
                if !self.is_empty_at(target) {
                    break;
                }
                moves.push(Move::simple(from, target));
                if !sliding {
                    break;
                }
                cursor = target;
            }
        }
    }

    /// Generate non-capturing moves (allocating wrapper)
    pub fn simple_moves(&self, from: Position, piece: Piece, rules: &RuleSet) -> MoveList {
        let mut moves = MoveList::new();
        self.simple_moves_into(from, piece, rules, &mut moves);
        moves
    }
}
