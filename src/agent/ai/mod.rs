// AI Agent - Minimax with Alpha-Beta Pruning
//
// Picks moves for one side of a checkers game under any rule variant.
//
// Key features:
// - Easy plays a uniformly random legal move
// - Medium and Hard run a fixed-depth minimax with alpha-beta pruning
// - Deterministic above Easy: ties keep the first move generated
// - Variant-aware evaluation (flying kings, inverted win condition)

mod difficulty;
mod evaluation;
mod minimax;
mod search;

#[cfg(test)]
mod tests;

pub use difficulty::Difficulty;
pub use evaluation::{evaluate_board, mobility, static_material, KING_VALUE, MAN_VALUE};
pub use minimax::{minimax, terminal_score, SearchContext, INFINITY, TERMINAL_SCORE};
pub use search::{get_best_move, get_best_move_parallel, SearchResult};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_repr::{all_valid_moves, Board, Move, Player, RuleSet};

/// Choose a move for `player`, or `None` exactly when it has no legal move.
///
/// Uses the thread-local RNG for Easy; see [`get_ai_move_with_rng`] for a
/// reproducible variant.
pub fn get_ai_move(board: &Board, player: Player, difficulty: Difficulty, rules: &RuleSet) -> Option<Move> {
    get_ai_move_with_rng(board, player, difficulty, rules, &mut rand::thread_rng())
}

/// Choose a move for `player` drawing randomness from `rng`
pub fn get_ai_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rules: &RuleSet,
    rng: &mut R,
) -> Option<Move> {
    let moves = all_valid_moves(board, player, rules);
    if moves.is_empty() {
        return None;
    }

    let depth = difficulty.search_depth(rules);
    match difficulty {
        Difficulty::Easy => moves.choose(rng).cloned(),
        Difficulty::Medium => get_best_move(board, player, depth, rules).best_move,
        Difficulty::Hard => get_best_move_parallel(board, player, depth, rules).best_move,
    }
}
