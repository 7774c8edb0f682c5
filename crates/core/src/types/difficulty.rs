//! Recipe difficulty scale.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recipe difficulty on the remote service's 1-4 scale.
///
/// Serialized as the bare integer the service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Difficulty {
    Easy,
    Medium,
    Challenging,
    Hard,
}

/// Error returned when a difficulty value is outside the 1-4 scale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid difficulty value: {0} (expected 1-4)")]
pub struct InvalidDifficulty(pub u8);

impl Difficulty {
    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Challenging => "challenging",
            Self::Hard => "hard",
        }
    }

    /// The numeric level on the service's scale.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Challenging => 3,
            Self::Hard => 4,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.level()
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = InvalidDifficulty;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Challenging),
            4 => Ok(Self::Hard),
            other => Err(InvalidDifficulty(other)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_levels() {
        assert_eq!(Difficulty::Easy.level(), 1);
        assert_eq!(Difficulty::Hard.level(), 4);
    }

    #[test]
    fn test_difficulty_serde_as_integer() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "2");
        let back: Difficulty = serde_json::from_str("3").unwrap();
        assert_eq!(back, Difficulty::Challenging);
    }

    #[test]
    fn test_difficulty_out_of_range() {
        let result: Result<Difficulty, _> = serde_json::from_str("5");
        assert!(result.is_err());
        assert_eq!(Difficulty::try_from(0), Err(InvalidDifficulty(0)));
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Hard);
    }
}
