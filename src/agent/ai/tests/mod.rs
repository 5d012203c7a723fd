use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game_repr::{all_valid_moves, Board, Player, RuleSet};

/// Play `plies` seeded random moves from the opening, stopping early if stuck
pub fn random_position(rules: &RuleSet, plies: usize, seed: u64) -> (Board, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::initial();
    let mut to_move = Player::Red;
    for _ in 0..plies {
        let moves = all_valid_moves(&board, to_move, rules);
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        board = board.execute_move(mv);
        to_move = to_move.opposite();
    }
    (board, to_move)
}

pub fn board(diagram: &str) -> Board {
    Board::from_diagram(diagram).expect("test diagram should parse")
}
