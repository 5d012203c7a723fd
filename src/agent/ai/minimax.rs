// Minimax Search with Alpha-Beta Pruning
//
// Scores are always taken from the AI player's perspective: maximizing nodes
// are the AI's turns, minimizing nodes the opponent's. Alpha is the best score
// the AI can already guarantee, beta the best the opponent can hold it to; a
// node stops exploring once beta <= alpha.
//
// Boards are small values, so each child is a fresh copy from execute_move
// rather than a make/unmake pair.

use crate::game_repr::{all_valid_moves, Board, Player, RuleSet};
use super::evaluation::evaluate_board;

/// Score of a position where the side to move has no legal moves
pub const TERMINAL_SCORE: i32 = 10_000;

/// Bound wider than any reachable score
pub const INFINITY: i32 = 1_000_000;

/// Score a side with no legal moves, from `ai_player`'s perspective.
///
/// Normally having no moves loses; under an inverted win condition it wins.
pub fn terminal_score(stuck: Player, ai_player: Player, rules: &RuleSet) -> i32 {
    let stuck_side_wins = rules.inverted_win_condition;
    let ai_is_stuck = stuck == ai_player;
    if ai_is_stuck == stuck_side_wins {
        TERMINAL_SCORE
    } else {
        -TERMINAL_SCORE
    }
}

/// Search context shared by every node of one search
pub struct SearchContext<'a> {
    pub ai_player: Player,
    pub rules: &'a RuleSet,
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(ai_player: Player, rules: &'a RuleSet) -> Self {
        Self {
            ai_player,
            rules,
            nodes: 0,
        }
    }
}

/// Minimax with alpha-beta pruning
///
/// # Arguments
///
/// * `board` - Position to score
/// * `depth` - Remaining plies (0 = leaf, evaluate statically)
/// * `alpha` - Lower bound the AI can already guarantee
/// * `beta` - Upper bound the opponent can already enforce
/// * `maximizing` - True when `to_move` is the AI player
/// * `to_move` - Side to move at this node
/// * `ctx` - AI player, ruleset and node counter
///
/// # Returns
///
/// The score from the AI player's perspective. A side to move with no legal
/// moves scores [`TERMINAL_SCORE`] either way, checked before depth so leaves
/// see terminal positions too.
pub fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    to_move: Player,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    let moves = all_valid_moves(board, to_move, ctx.rules);
    if moves.is_empty() {
        return terminal_score(to_move, ctx.ai_player, ctx.rules);
    }

    if depth == 0 {
        return evaluate_board(board, ctx.ai_player, ctx.rules);
    }

    if maximizing {
        let mut best = -INFINITY;
        for mv in &moves {
            let child = board.execute_move(mv);
            let score = minimax(&child, depth - 1, alpha, beta, false, to_move.opposite(), ctx);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in &moves {
            let child = board.execute_move(mv);
            let score = minimax(&child, depth - 1, alpha, beta, true, to_move.opposite(), ctx);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
