use smallvec::SmallVec;
use std::fmt;

use super::Position;

/*-------ARCHITECTURE--------*/

// A move is a from/to pair plus the ordered squares vacated by captured pieces.
// Simple moves have no captures. Chains report only the final landing square.

/// Captured squares in capture order
pub type Captures = SmallVec<[Position; 4]>;

/// Move buffer used by the generators
pub type MoveList = SmallVec<[Move; 32]>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captures: Captures,
    pub is_jump: bool,
}

impl Move {
    pub fn simple(from: Position, to: Position) -> Move {
        Self {
            from,
            to,
            captures: Captures::new(),
            is_jump: false,
        }
    }

    pub fn jump(from: Position, to: Position, captures: Captures) -> Move {
        Self {
            from,
            to,
            captures,
            is_jump: true,
        }
    }

    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)?;
        if self.is_jump {
            write!(f, " [{} captured]", self.captures.len())?;
        }
        Ok(())
    }
}
