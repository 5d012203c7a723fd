mod board;
mod legal;
mod moves;
mod piece;
mod position;
mod rules;
mod status;
pub mod piece_moves;

#[cfg(test)]
mod tests;

/// Side length of the board
pub const BOARD_SIZE: u8 = 8;

pub use board::*;
pub use legal::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use rules::*;
pub use status::*;
