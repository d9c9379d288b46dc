//! Game speed presets.

use crate::error::ParseDifficultyError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

/// Tick interval preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// One tick every 100ms.
    Slow,

    /// One tick every 75ms.
    Normal,

    /// One tick every 50ms.
    Fast,
}

impl Difficulty {
    /// All presets from the slowest to the fastest.
    pub const ALL: [Difficulty; 3] = [Self::Slow, Self::Normal, Self::Fast];

    /// Return tick interval in milliseconds.
    pub const fn millis(self) -> u64 {
        match self {
            Self::Slow => 100,
            Self::Normal => 75,
            Self::Fast => 50,
        }
    }

    /// Return tick interval.
    pub const fn interval(self) -> Duration {
        Duration::from_millis(self.millis())
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Normal
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_case = format!("{:?}", self).to_lowercase();
        write!(f, "{}", lower_case)
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "slow" => Ok(Self::Slow),
            "normal" => Ok(Self::Normal),
            "fast" => Ok(Self::Fast),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals() {
        assert_eq!(Difficulty::Slow.interval(), Duration::from_millis(100));
        assert_eq!(Difficulty::Normal.interval(), Duration::from_millis(75));
        assert_eq!(Difficulty::Fast.interval(), Duration::from_millis(50));
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }

    #[test]
    fn parse_and_display() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty, difficulty.to_string().parse().unwrap());
        }
        assert!("insane".parse::<Difficulty>().is_err());
    }
}
