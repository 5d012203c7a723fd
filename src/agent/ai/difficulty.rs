use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::game_repr::RuleSet;

/// AI difficulty levels that map to a fixed search depth
///
/// - **Easy**: picks uniformly among legal moves, no search
/// - **Medium**: 3 plies (2 with flying kings)
/// - **Hard**: 6 plies (4 with flying kings)
///
/// Flying kings multiply the branching factor, so their depths are reduced to
/// keep a move within the same time envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of plies searched under `rules`
    pub fn search_depth(&self, rules: &RuleSet) -> u8 {
        match (self, rules.flying_kings) {
            (Difficulty::Easy, _) => 1,
            (Difficulty::Medium, false) => 3,
            (Difficulty::Medium, true) => 2,
            (Difficulty::Hard, false) => 6,
            (Difficulty::Hard, true) => 4,
        }
    }

    /// Whether this level runs the minimax search at all
    pub fn searches(&self) -> bool {
        *self != Difficulty::Easy
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownDifficulty(s.to_string()))
    }
}
