use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    RedWins,
    BlackWins,
    /// Part of the public vocabulary; [`check_game_status`] never reports it
    Draw,
}

impl GameStatus {
    pub fn from_winner(player: Player) -> Self {
        match player {
            Player::Red => GameStatus::RedWins,
            Player::Black => GameStatus::BlackWins,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::RedWins => Some(Player::Red),
            GameStatus::BlackWins => Some(Player::Black),
            GameStatus::Playing | GameStatus::Draw => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameStatus::Playing
    }
}

/// Per-side tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCount {
    pub red: usize,
    pub black: usize,
}

impl PieceCount {
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::Red => self.red,
            Player::Black => self.black,
        }
    }

    fn add(&mut self, player: Player) {
        match player {
            Player::Red => self.red += 1,
            Player::Black => self.black += 1,
        }
    }
}

pub fn count_pieces(board: &Board) -> PieceCount {
    let mut count = PieceCount::default();
    for (_, piece) in board.pieces() {
        count.add(piece.player);
    }
    count
}

pub fn count_kings(board: &Board) -> PieceCount {
    let mut count = PieceCount::default();
    for (_, piece) in board.pieces().filter(|(_, piece)| piece.is_king()) {
        count.add(piece.player);
    }
    count
}

/// Decide the game state with `to_move` about to play.
///
/// A side with no pieces, or the side to move with no legal moves, loses;
/// under an inverted win condition the same side wins instead.
pub fn check_game_status(board: &Board, to_move: Player, rules: &RuleSet) -> GameStatus {
    let exhausted = |player: Player| {
        if rules.inverted_win_condition {
            GameStatus::from_winner(player)
        } else {
            GameStatus::from_winner(player.opposite())
        }
    };

    let pieces = count_pieces(board);
    if pieces.red == 0 {
        return exhausted(Player::Red);
    }
    if pieces.black == 0 {
        return exhausted(Player::Black);
    }

    if all_valid_moves(board, to_move, rules).is_empty() {
        return exhausted(to_move);
    }

    GameStatus::Playing
}
