use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Build a board from a diagram, panicking on malformed test input
pub fn board(diagram: &str) -> Board {
    Board::from_diagram(diagram).expect("test diagram should parse")
}

pub fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

/// Check whether a move with the given endpoints exists
pub fn has_move(moves: &[Move], from: Position, to: Position) -> bool {
    moves.iter().any(|m| m.from == from && m.to == to)
}

pub fn count_jumps(moves: &[Move]) -> usize {
    moves.iter().filter(|m| m.is_jump).count()
}

// ==================== TEST MODULES ====================

mod board_setup;
mod promotion;
