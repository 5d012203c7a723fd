use std::fmt;

use super::*;
use crate::error::{EngineError, EngineResult};

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD REPRESENTATION AND MOVE APPLICATION
 */

/// Number of men each side starts with
pub const PIECES_PER_SIDE: usize = 12;

/// An 8x8 checkers board held by value.
///
/// Only dark squares (row + col odd) ever hold a piece. Every constructor
/// enforces that, and [`Board::execute_move`] returns a fresh board rather
/// than mutating the receiver.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// Board with no pieces on it
    pub fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// Standard opening: black on rows 0-2, red on rows 5-7, dark squares only
    pub fn initial() -> Self {
        // Each filled row holds one man per dark square
        let filled_rows = (PIECES_PER_SIDE / (BOARD_SIZE as usize / 2)) as u8;
        let mut board = Self::empty();
        for pos in dark_squares() {
            if pos.row < filled_rows {
                board.put(pos, Piece::man(Player::Black));
            } else if pos.row >= BOARD_SIZE - filled_rows {
                board.put(pos, Piece::man(Player::Red));
            }
        }
        board
    }

    /// Build a board from explicit placements, rejecting light squares
    pub fn with_pieces(pieces: &[(Position, Piece)]) -> EngineResult<Self> {
        let mut board = Self::empty();
        for &(pos, piece) in pieces {
            if pos.row >= BOARD_SIZE || pos.col >= BOARD_SIZE {
                return Err(EngineError::InvalidPosition { row: pos.row, col: pos.col });
            }
            if !pos.is_dark() {
                return Err(EngineError::PieceOnLightSquare { row: pos.row, col: pos.col });
            }
            board.put(pos, piece);
        }
        Ok(board)
    }

    /// Parse an 8-line diagram, row 0 first.
    ///
    /// `.` is an empty square, `r`/`b` are men and `R`/`B` kings. Whitespace
    /// inside a line is ignored so diagrams may be spaced out for reading.
    pub fn from_diagram(diagram: &str) -> EngineResult<Self> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE as usize {
            return Err(EngineError::InvalidDiagram {
                reason: format!("expected {} rows, found {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Self::empty();
        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != BOARD_SIZE as usize {
                return Err(EngineError::InvalidDiagram {
                    reason: format!("row {} has {} squares", row, glyphs.len()),
                });
            }
            for (col, &c) in glyphs.iter().enumerate() {
                let pos = Position::new(row as u8, col as u8);
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or_else(|| EngineError::InvalidDiagram {
                    reason: format!("unknown glyph '{}' at {}", c, pos),
                })?;
                if !pos.is_dark() {
                    return Err(EngineError::PieceOnLightSquare { row: pos.row, col: pos.col });
                }
                board.put(pos, piece);
            }
        }
        Ok(board)
    }

    pub fn piece_at(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Every occupied square with its piece, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        dark_squares().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.is(player))
    }

    pub(crate) fn put(&mut self, pos: Position, piece: Piece) {
        self.cells[pos.index()] = Some(piece);
    }

    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Apply a move, returning the resulting board.
    ///
    /// The origin and every captured square are cleared and the mover lands on
    /// `to`, crowned if `to` is its promotion row. The move is trusted: callers
    /// gate on generated moves first. A move from an empty square leaves the
    /// board unchanged.
    pub fn execute_move(&self, mv: &Move) -> Board {
        let mut next = *self;
        let Some(piece) = self.piece_at(mv.from) else {
            return next;
        };

        next.clear(mv.from);
        for &captured in &mv.captures {
            next.clear(captured);
        }

        let landed = if should_promote(mv.to.row, piece.player) {
            piece.crowned()
        } else {
            piece
        };
        next.put(mv.to, landed);
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let glyph = self
                    .piece_at(Position::new(row, col))
                    .map_or('.', |piece| piece.to_char());
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}

/// Opening position, see [`Board::initial`]
pub fn create_initial_board() -> Board {
    Board::initial()
}

/// Apply `mv` to `board`, see [`Board::execute_move`]
pub fn execute_move(board: &Board, mv: &Move) -> Board {
    board.execute_move(mv)
}
