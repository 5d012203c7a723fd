// Root Search
//
// Scores every legal root move with a fixed-depth minimax and keeps the first
// best one. Two drivers exist: a sequential one that narrows alpha across root
// moves, and a rayon one that scores root moves concurrently with full
// windows. Both pick the same move because ties keep generation order.

use log::debug;
use rayon::prelude::*;

use crate::game_repr::{all_valid_moves, Board, Move, Player, RuleSet};
use super::minimax::{minimax, SearchContext, INFINITY};

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes_searched: 0,
        }
    }
}

/// Search `depth` plies for the best move for `player`.
///
/// Each root move is applied and the reply tree searched one ply shorter with
/// the opponent minimizing. A depth below 1 is treated as 1.
pub fn get_best_move(board: &Board, player: Player, depth: u8, rules: &RuleSet) -> SearchResult {
    let depth = depth.max(1);
    let moves = all_valid_moves(board, player, rules);
    let mut result = SearchResult::new(depth);
    if moves.is_empty() {
        return result;
    }

    let mut ctx = SearchContext::new(player, rules);
    let mut alpha = -INFINITY;
    let mut best_score = -INFINITY;
    let mut best_move = None;

    for mv in moves {
        let child = board.execute_move(&mv);
        let score = minimax(&child, depth - 1, alpha, INFINITY, false, player.opposite(), &mut ctx);
        debug!("root {} score {}", mv, score);

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(best_score);
    }

    result.best_move = best_move;
    result.score = best_score;
    result.nodes_searched = ctx.nodes;
    print_search_info(&result);
    result
}

/// Same as [`get_best_move`] with root moves scored on the rayon pool.
///
/// Every root subtree gets a full window, so more nodes are visited than in
/// the sequential search, but the chosen move and score are identical.
pub fn get_best_move_parallel(board: &Board, player: Player, depth: u8, rules: &RuleSet) -> SearchResult {
    let depth = depth.max(1);
    let moves = all_valid_moves(board, player, rules);
    let mut result = SearchResult::new(depth);
    if moves.is_empty() {
        return result;
    }

    let scored: Vec<(i32, u64)> = moves
        .as_slice()
        .par_iter()
        .map(|mv| {
            let mut ctx = SearchContext::new(player, rules);
            let child = board.execute_move(mv);
            let score = minimax(&child, depth - 1, -INFINITY, INFINITY, false, player.opposite(), &mut ctx);
            (score, ctx.nodes)
        })
        .collect();

    let mut best_index = 0;
    for (index, &(score, _)) in scored.iter().enumerate() {
        if score > scored[best_index].0 {
            best_index = index;
        }
    }

    result.best_move = moves.into_iter().nth(best_index);
    result.score = scored[best_index].0;
    result.nodes_searched = scored.iter().map(|&(_, nodes)| nodes).sum();
    print_search_info(&result);
    result
}

fn print_search_info(result: &SearchResult) {
    match &result.best_move {
        Some(mv) => debug!(
            "info depth {} score {} nodes {} best {}",
            result.depth, result.score, result.nodes_searched, mv
        ),
        None => debug!("info depth {} no legal moves", result.depth),
    }
}
