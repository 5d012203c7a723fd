use smallvec::SmallVec;

use crate::game_repr::{should_promote, Board, Captures, Move, MoveList, Piece, Position, RuleSet};

use super::{capture_directions, flies};

/// A single capture: the square jumped over and the square landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub captured: Position,
    pub landing: Position,
}

pub type Hops = SmallVec<[Hop; 8]>;

impl Board {
    /// Every single capture available to `piece` on `at`, ignoring chains.
    ///
    /// Short pieces jump one enemy into the square directly beyond it. A flying
    /// king looks down each diagonal for the first occupied square and, if it
    /// is an enemy, may land on any empty square past it up to the next
    /// blocker or the edge.
    pub fn hops(&self, at: Position, piece: Piece, rules: &RuleSet) -> Hops {
        let mut hops = Hops::new();
        let enemy = piece.player.opposite();

        if flies(piece, rules) {
            for &(d_row, d_col) in capture_directions(piece, rules) {
                let mut cursor = at;
                let mut blocker = None;
                while let Some(next) = cursor.offset(d_row, d_col) {
                    if !self.is_empty_at(next) {
                        blocker = Some(next);
                        break;
                    }
                    cursor = next;
                }

                let Some(captured) = blocker else { continue };
                if !self.piece_at(captured).is_some_and(|p| p.is(enemy)) {
                    continue;
                }

                let mut landing = captured;
                while let Some(next) = landing.offset(d_row, d_col) {
                    if !self.is_empty_at(next) {
                        break;
                    }
                    hops.push(Hop { captured, landing: next });
                    landing = next;
                }
            }
            return hops;
        }

        for &(d_row, d_col) in capture_directions(piece, rules) {
            let (Some(captured), Some(landing)) =
                (at.offset(d_row, d_col), at.offset(d_row * 2, d_col * 2))
            else {
                continue;
            };
            if self.piece_at(captured).is_some_and(|p| p.is(enemy)) && self.is_empty_at(landing) {
                hops.push(Hop { captured, landing });
            }
        }
        hops
    }

    /// True if `piece` on `at` has at least one capture
    pub fn has_hop(&self, at: Position, piece: Piece, rules: &RuleSet) -> bool {
        !self.hops(at, piece, rules).is_empty()
    }

    /// Generate complete capture moves for the piece on `from` into a provided buffer.
    ///
    /// Chains are followed depth-first: a jump with continuations is only
    /// emitted as part of its longer chains.
    pub fn jump_moves_into(&self, from: Position, piece: Piece, rules: &RuleSet, moves: &mut MoveList) {
        let start = moves.len();
        let mut captured = Captures::new();
        self.extend_chains(from, from, piece, rules, &mut captured, moves);

        // A flying king can reach the same capture from several landings on
        // one diagonal; keep the first copy of each resulting move
        let mut index = start + 1;
        while index < moves.len() {
            if moves[start..index].contains(&moves[index]) {
                moves.remove(index);
            } else {
                index += 1;
            }
        }
    }

    /// Generate complete capture moves (allocating wrapper)
    pub fn jump_moves(&self, from: Position, piece: Piece, rules: &RuleSet) -> MoveList {
        let mut moves = MoveList::new();
        self.jump_moves_into(from, piece, rules, &mut moves);
        moves
    }

    fn extend_chains(
        &self,
        origin: Position,
        at: Position,
        piece: Piece,
        rules: &RuleSet,
        captured: &mut Captures,
        moves: &mut MoveList,
    ) {
        for hop in self.hops(at, piece, rules) {
            // Board as it stands after this hop; a man reaching the far row
            // continues the chain as a king
            let landed = if !piece.is_king() && should_promote(hop.landing.row, piece.player) {
                piece.crowned()
            } else {
                piece
            };
            let mut next = *self;
            next.clear(at);
            next.clear(hop.captured);
            next.put(hop.landing, landed);

            captured.push(hop.captured);
            let before = moves.len();
            next.extend_chains(origin, hop.landing, landed, rules, captured, moves);
            if moves.len() == before {
                moves.push(Move::jump(origin, hop.landing, captured.clone()));
            }
            captured.pop();
        }
    }
}
