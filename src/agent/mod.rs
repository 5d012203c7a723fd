pub mod ai;
pub use ai::{get_ai_move, Difficulty, SearchResult};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_repr::{Board, Move, Player, RuleSet};

/// Something that picks moves for one side of a game.
///
/// Implementors are handed the board by value semantics and must not keep
/// state about it between calls; only their own configuration and RNG persist.
pub trait Agent {
    /// Pick a move for `player`, `None` when it has no legal move
    fn choose_move(&mut self, board: &Board, player: Player, rules: &RuleSet) -> Option<Move>;

    /// Display name used in logs
    fn name(&self) -> String;
}

/// Engine-backed agent at a fixed difficulty
pub struct AiAgent {
    difficulty: Difficulty,
    rng: StdRng,
}

impl AiAgent {
    /// Create an agent seeded from system entropy
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an agent whose Easy choices are reproducible
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Agent for AiAgent {
    fn choose_move(&mut self, board: &Board, player: Player, rules: &RuleSet) -> Option<Move> {
        ai::get_ai_move_with_rng(board, player, self.difficulty, rules, &mut self.rng)
    }

    fn name(&self) -> String {
        format!("AI ({})", self.difficulty.name())
    }
}
