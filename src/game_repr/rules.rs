//! Rule variants expressed as flat flag sets.
//!
//! Every generator and evaluator takes a [`RuleSet`] by reference and branches
//! on its flags with ordinary conditionals.

use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Forced jumps, men capture forward only
    #[default]
    American,
    /// Jumps are optional
    Casual,
    /// Flying kings, backward capture, majority rule
    Brazilian,
    /// Forced jumps, losing every piece wins
    Suicide,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::American,
        Variant::Casual,
        Variant::Brazilian,
        Variant::Suicide,
    ];

    pub fn rules(&self) -> RuleSet {
        RuleSet::for_variant(*self)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::American => "american",
            Variant::Casual => "casual",
            Variant::Brazilian => "brazilian",
            Variant::Suicide => "suicide",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == lowered)
            .ok_or_else(|| EngineError::UnknownVariant(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    pub variant: Variant,
    pub display_name: &'static str,
    pub description: &'static str,
    /// A jump must be played whenever one is available
    pub forced_captures: bool,
    /// Men may capture toward their own back row
    pub backward_capture: bool,
    /// Kings slide and capture at any distance
    pub flying_kings: bool,
    /// Only chains with the maximum capture count are legal
    pub majority_rule: bool,
    /// Running out of pieces or moves wins instead of loses
    pub inverted_win_condition: bool,
}

impl RuleSet {
    pub const AMERICAN: RuleSet = RuleSet {
        variant: Variant::American,
        display_name: "American",
        description: "Classic rules with forced jumps",
        forced_captures: true,
        backward_capture: false,
        flying_kings: false,
        majority_rule: false,
        inverted_win_condition: false,
    };

    pub const CASUAL: RuleSet = RuleSet {
        variant: Variant::Casual,
        display_name: "Casual",
        description: "Jumps are optional - great for beginners",
        forced_captures: false,
        backward_capture: false,
        flying_kings: false,
        majority_rule: false,
        inverted_win_condition: false,
    };

    pub const BRAZILIAN: RuleSet = RuleSet {
        variant: Variant::Brazilian,
        display_name: "Brazilian",
        description: "Flying kings, backward capture, must take max jumps",
        forced_captures: true,
        backward_capture: true,
        flying_kings: true,
        majority_rule: true,
        inverted_win_condition: false,
    };

    pub const SUICIDE: RuleSet = RuleSet {
        variant: Variant::Suicide,
        display_name: "Suicide",
        description: "First to lose all pieces wins!",
        forced_captures: true,
        backward_capture: false,
        flying_kings: false,
        majority_rule: false,
        inverted_win_condition: true,
    };

    pub fn for_variant(variant: Variant) -> RuleSet {
        match variant {
            Variant::American => Self::AMERICAN,
            Variant::Casual => Self::CASUAL,
            Variant::Brazilian => Self::BRAZILIAN,
            Variant::Suicide => Self::SUICIDE,
        }
    }

    pub fn american() -> RuleSet {
        Self::AMERICAN
    }

    pub fn casual() -> RuleSet {
        Self::CASUAL
    }

    pub fn brazilian() -> RuleSet {
        Self::BRAZILIAN
    }

    pub fn suicide() -> RuleSet {
        Self::SUICIDE
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::AMERICAN
    }
}
