//! Checkers rule engine and game-playing AI.
//!
//! The engine is stateless: every operation takes a [`Board`] (plain `Copy`
//! data), the player concerned and a [`RuleSet`], and returns new values.
//! Four variants are built in: American, Casual, Brazilian and Suicide.
//!
//! ```no_run
//! use checkers_engine::{all_valid_moves, check_game_status, get_ai_move};
//! use checkers_engine::{Board, Difficulty, GameStatus, Player, RuleSet};
//!
//! let rules = RuleSet::american();
//! let mut board = Board::initial();
//! let mut to_move = Player::Red;
//!
//! while check_game_status(&board, to_move, &rules) == GameStatus::Playing {
//!     let Some(mv) = get_ai_move(&board, to_move, Difficulty::Medium, &rules) else { break };
//!     board = board.execute_move(&mv);
//!     to_move = to_move.opposite();
//! }
//! # let _ = all_valid_moves(&board, to_move, &rules);
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use agent::{get_ai_move, Agent, AiAgent, Difficulty, SearchResult};
pub use config::MatchConfig;
pub use error::{EngineError, EngineResult};
pub use game_repr::{
    all_valid_moves, check_game_status, count_kings, count_pieces, create_initial_board, execute_move,
    is_move_valid, perft, should_promote, valid_moves_for_piece, Board, GameStatus, Move, Piece, Player,
    Position, Rank, RuleSet, Variant,
};
pub use orchestrator::{play_match, MatchOutcome, Orchestrator, SideStats};
