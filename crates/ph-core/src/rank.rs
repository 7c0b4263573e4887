//! Actor seniority ranks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal seniority tier of an actor, ascending from `Beginner` to `Peoples`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// Just joined the company.
    #[default]
    Beginner,
    /// Permanent member of the company.
    Regular,
    /// Carries leading roles.
    Lead,
    /// Senior craftsman of the stage.
    Master,
    /// Holds the "Honored Artist" title.
    Honored,
    /// Holds the "People's Artist" title, the highest tier.
    Peoples,
}

impl Rank {
    /// All ranks in ascending order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Beginner,
            Self::Regular,
            Self::Lead,
            Self::Master,
            Self::Honored,
            Self::Peoples,
        ]
    }

    /// Zero-based position in the ascending order (`Beginner` = 0).
    pub fn index(self) -> u32 {
        match self {
            Self::Beginner => 0,
            Self::Regular => 1,
            Self::Lead => 2,
            Self::Master => 3,
            Self::Honored => 4,
            Self::Peoples => 5,
        }
    }

    /// The next tier up, or `None` at the top.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Beginner => Some(Self::Regular),
            Self::Regular => Some(Self::Lead),
            Self::Lead => Some(Self::Master),
            Self::Master => Some(Self::Honored),
            Self::Honored => Some(Self::Peoples),
            Self::Peoples => None,
        }
    }

    /// Parse a rank from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_', '\''], " ").trim() {
            "beginner" | "novice" => Some(Self::Beginner),
            "regular" | "permanent" => Some(Self::Regular),
            "lead" | "leading" => Some(Self::Lead),
            "master" => Some(Self::Master),
            "honored" | "honoured" => Some(Self::Honored),
            "peoples" | "people s" | "people" => Some(Self::Peoples),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Regular => write!(f, "Regular"),
            Self::Lead => write!(f, "Lead"),
            Self::Master => write!(f, "Master"),
            Self::Honored => write!(f, "Honored"),
            Self::Peoples => write!(f, "People's"),
        }
    }
}
