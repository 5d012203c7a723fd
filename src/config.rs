//! Match configuration for engine-versus-engine play.
//!
//! A [`MatchConfig`] holds everything the [`Orchestrator`](crate::orchestrator::Orchestrator)
//! needs to run a game: the ruleset, both sides' difficulty, a ply cap and an
//! optional RNG seed.

use crate::agent::Difficulty;
use crate::game_repr::{Player, RuleSet, Variant};

/// Default cap on plies before a match is abandoned
pub const DEFAULT_MAX_PLIES: usize = 200;

/// Complete configuration for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Rules both sides play under
    pub rules: RuleSet,
    /// Difficulty of the side moving first
    pub red: Difficulty,
    /// Difficulty of the second side
    pub black: Difficulty,
    /// Stop after this many plies; the engine itself never declares a draw
    pub max_plies: usize,
    /// Seed for reproducible Easy play; `None` draws from system entropy
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            red: Difficulty::default(),
            black: Difficulty::default(),
            max_plies: DEFAULT_MAX_PLIES,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create a configuration for `variant` with both sides at their difficulty.
    ///
    /// # Arguments
    /// * `variant` - Rule variant to play
    /// * `red` - Difficulty for Red
    /// * `black` - Difficulty for Black
    pub fn new(variant: Variant, red: Difficulty, black: Difficulty) -> Self {
        Self {
            rules: variant.rules(),
            red,
            black,
            ..Self::default()
        }
    }

    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Difficulty configured for `player`
    pub fn difficulty_for(&self, player: Player) -> Difficulty {
        match player {
            Player::Red => self.red,
            Player::Black => self.black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.rules, RuleSet::american());
        assert_eq!(config.red, Difficulty::Easy);
        assert_eq!(config.black, Difficulty::Easy);
        assert_eq!(config.max_plies, DEFAULT_MAX_PLIES);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new(Variant::Suicide, Difficulty::Hard, Difficulty::Medium)
            .with_max_plies(40)
            .with_seed(9);
        assert_eq!(config.rules.variant, Variant::Suicide);
        assert_eq!(config.difficulty_for(Player::Red), Difficulty::Hard);
        assert_eq!(config.difficulty_for(Player::Black), Difficulty::Medium);
        assert_eq!(config.max_plies, 40);
        assert_eq!(config.seed, Some(9));
    }
}
