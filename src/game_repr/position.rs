use std::fmt;

use super::BOARD_SIZE;

/// A square on the board, addressed by row (0 = black's back row) and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Offset this square by a diagonal step, `None` if it leaves the board
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Position> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if is_valid_position(row, col) {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn is_dark(&self) -> bool {
        is_dark_square(self.row, self.col)
    }

    pub(crate) fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Only dark squares, where row + col is odd, ever hold a piece
pub fn is_dark_square(row: u8, col: u8) -> bool {
    (row + col) % 2 == 1
}

pub fn is_valid_position(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col)
}

pub fn positions_equal(a: Position, b: Position) -> bool {
    a == b
}

/// Every dark square, row-major
pub fn dark_squares() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|row| {
        (0..BOARD_SIZE)
            .filter(move |&col| is_dark_square(row, col))
            .map(move |col| Position::new(row, col))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_square_parity() {
        assert!(is_dark_square(0, 1));
        assert!(!is_dark_square(0, 0));
        assert!(is_dark_square(7, 0));
        assert_eq!(dark_squares().count(), 32);
    }

    #[test]
    fn test_bounds() {
        assert!(is_valid_position(0, 0));
        assert!(is_valid_position(7, 7));
        assert!(!is_valid_position(-1, 3));
        assert!(!is_valid_position(3, 8));
    }

    #[test]
    fn test_offset_stops_at_edge() {
        let corner = Position::new(0, 1);
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(corner.offset(1, -1), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_positions_equal() {
        assert!(positions_equal(Position::new(2, 3), Position::new(2, 3)));
        assert!(!positions_equal(Position::new(2, 3), Position::new(3, 2)));
    }
}
