use super::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// Row delta of a forward step: red heads toward row 0, black toward row 7
    pub fn forward(&self) -> i8 {
        match self {
            Self::Red => -1,
            Self::Black => 1,
        }
    }

    /// Row on which a man of this player is crowned
    pub fn promotion_row(&self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Black => BOARD_SIZE - 1,
        }
    }

    /// Row the player's men start from, the opposite edge of the promotion row
    pub fn back_row(&self) -> u8 {
        self.opposite().promotion_row()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub player: Player,
    pub rank: Rank,
}

impl Piece {
    pub fn man(player: Player) -> Self {
        Self { player, rank: Rank::Man }
    }

    pub fn king(player: Player) -> Self {
        Self { player, rank: Rank::King }
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    pub fn is(&self, player: Player) -> bool {
        self.player == player
    }

    pub fn crowned(self) -> Self {
        Self::king(self.player)
    }

    /// Diagram glyph: lowercase for men, uppercase for kings
    pub fn to_char(&self) -> char {
        match (self.player, self.rank) {
            (Player::Red, Rank::Man) => 'r',
            (Player::Red, Rank::King) => 'R',
            (Player::Black, Rank::Man) => 'b',
            (Player::Black, Rank::King) => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Self::man(Player::Red)),
            'R' => Some(Self::king(Player::Red)),
            'b' => Some(Self::man(Player::Black)),
            'B' => Some(Self::king(Player::Black)),
            _ => None,
        }
    }
}

/// A single square's content; `None` is an empty square
pub type Cell = Option<Piece>;

/// True when a piece on `row` belonging to `player` should be crowned
pub fn should_promote(row: u8, player: Player) -> bool {
    row == player.promotion_row()
}
