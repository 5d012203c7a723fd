//! Caller-side game loop driving two agents against each other.
//!
//! The engine is stateless; whose turn it is, the move history and per-game
//! statistics live here, one layer above it. Each ply follows the same contract
//! any front end would use:
//!
//! ```text
//! [Agent picks move] -> [execute_move] -> [check_game_status] -> [Switch turn] ...
//! ```
//!
//! A match ends on a decisive status, or when the configured ply cap is hit.
//! Hitting the cap leaves the status at `Playing`; no draw is invented.

use log::{debug, info};

use crate::agent::{Agent, AiAgent};
use crate::config::MatchConfig;
use crate::game_repr::{check_game_status, Board, GameStatus, Move, Player, RuleSet};

/// Running statistics for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideStats {
    pub pieces_captured: usize,
    pub kings_earned: usize,
    pub longest_chain: usize,
}

/// Everything known about a finished (or abandoned) match
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub status: GameStatus,
    pub final_board: Board,
    pub history: Vec<Move>,
    pub red: SideStats,
    pub black: SideStats,
    pub ply_limit_reached: bool,
}

impl MatchOutcome {
    pub fn plies(&self) -> usize {
        self.history.len()
    }

    pub fn stats(&self, player: Player) -> SideStats {
        match player {
            Player::Red => self.red,
            Player::Black => self.black,
        }
    }
}

/// Root component coordinating a game between two [`Agent`]s.
///
/// Red always moves first from the standard opening unless a board is supplied
/// through [`Orchestrator::from_position`].
pub struct Orchestrator {
    board: Board,
    to_move: Player,
    rules: RuleSet,
    red: Box<dyn Agent>,
    black: Box<dyn Agent>,
    history: Vec<Move>,
    status: GameStatus,
    stats: [SideStats; 2],
    max_plies: usize,
}

impl Orchestrator {
    /// Build a match from a configuration, creating one [`AiAgent`] per side.
    ///
    /// With a seed, Red uses `seed` and Black `seed + 1` so the two sides do
    /// not mirror each other's random choices.
    pub fn new(config: &MatchConfig) -> Self {
        let (red, black) = match config.seed {
            Some(seed) => (
                AiAgent::with_seed(config.red, seed),
                AiAgent::with_seed(config.black, seed.wrapping_add(1)),
            ),
            None => (AiAgent::new(config.red), AiAgent::new(config.black)),
        };
        Self::with_agents(config.rules, Box::new(red), Box::new(black), config.max_plies)
    }

    /// Build a match from the opening with arbitrary agents
    pub fn with_agents(rules: RuleSet, red: Box<dyn Agent>, black: Box<dyn Agent>, max_plies: usize) -> Self {
        Self::from_position(Board::initial(), Player::Red, rules, red, black, max_plies)
    }

    /// Build a match resuming from `board` with `to_move` to play
    pub fn from_position(
        board: Board,
        to_move: Player,
        rules: RuleSet,
        red: Box<dyn Agent>,
        black: Box<dyn Agent>,
        max_plies: usize,
    ) -> Self {
        let status = check_game_status(&board, to_move, &rules);
        Self {
            board,
            to_move,
            rules,
            red,
            black,
            history: Vec::new(),
            status,
            stats: [SideStats::default(); 2],
            max_plies,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Play a single ply and return the resulting status.
    ///
    /// Does nothing once the game is decided. An agent returning no move
    /// settles the game: by the rules when its side is stuck or wiped out,
    /// otherwise as a loss for that side.
    pub fn step(&mut self) -> GameStatus {
        if self.status.is_over() {
            return self.status;
        }

        let player = self.to_move;
        let agent = match player {
            Player::Red => &mut self.red,
            Player::Black => &mut self.black,
        };

        let Some(mv) = agent.choose_move(&self.board, player, &self.rules) else {
            // A side declining to move while it still has moves concedes
            self.status = match check_game_status(&self.board, player, &self.rules) {
                GameStatus::Playing => GameStatus::from_winner(player.opposite()),
                decided => decided,
            };
            debug!("{} has no move, status {:?}", player.name(), self.status);
            return self.status;
        };

        debug!("ply {}: {} ({}) plays {}", self.history.len() + 1, player.name(), agent.name(), mv);

        let next = self.board.execute_move(&mv);
        self.record_stats(player, &mv, &next);
        self.board = next;
        self.history.push(mv);
        self.to_move = player.opposite();
        self.status = check_game_status(&self.board, self.to_move, &self.rules);
        self.status
    }

    /// Play until the game is decided or the ply cap is reached
    pub fn run(mut self) -> MatchOutcome {
        info!(
            "Starting {} match: {} vs {}",
            self.rules.display_name,
            self.red.name(),
            self.black.name()
        );

        while !self.status.is_over() && self.history.len() < self.max_plies {
            self.step();
        }

        let ply_limit_reached = !self.status.is_over();
        if ply_limit_reached {
            info!("Stopped after {} plies without a result", self.history.len());
        } else {
            info!("Game over after {} plies: {:?}", self.history.len(), self.status);
        }

        MatchOutcome {
            status: self.status,
            final_board: self.board,
            history: self.history,
            red: self.stats[0],
            black: self.stats[1],
            ply_limit_reached,
        }
    }

    fn record_stats(&mut self, player: Player, mv: &Move, after: &Board) {
        let crowned = self.board.piece_at(mv.from).is_some_and(|p| !p.is_king())
            && after.piece_at(mv.to).is_some_and(|p| p.is_king());

        let stats = &mut self.stats[player as usize];
        stats.pieces_captured += mv.captures.len();
        stats.longest_chain = stats.longest_chain.max(mv.captures.len());
        if crowned {
            stats.kings_earned += 1;
        }
    }
}

/// Run a full match described by `config`
pub fn play_match(config: &MatchConfig) -> MatchOutcome {
    Orchestrator::new(config).run()
}
