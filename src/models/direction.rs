//! Sweep direction of the disk arm.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction in which the head sweeps first.
///
/// Only the sweep family (SCAN, C-SCAN, LOOK, C-LOOK) consults it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward higher track numbers.
    #[default]
    #[serde(alias = "right", alias = "up")]
    Increasing,
    /// Toward track 0.
    #[serde(alias = "left", alias = "down")]
    Decreasing,
}

impl Direction {
    /// Canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Increasing => "increasing",
            Direction::Decreasing => "decreasing",
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Increasing => Direction::Decreasing,
            Direction::Decreasing => Direction::Increasing,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increasing" | "right" | "up" => Ok(Direction::Increasing),
            "decreasing" | "left" | "down" => Ok(Direction::Decreasing),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_increasing() {
        assert_eq!(Direction::default(), Direction::Increasing);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Increasing".parse::<Direction>(), Ok(Direction::Increasing));
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Increasing));
        assert_eq!(" left ".parse::<Direction>(), Ok(Direction::Decreasing));
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Direction::Decreasing).unwrap();
        assert_eq!(json, "\"decreasing\"");
        let parsed: Direction = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(parsed, Direction::Increasing);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Direction::Increasing.reversed(), Direction::Decreasing);
        assert_eq!(Direction::Decreasing.reversed(), Direction::Increasing);
    }
}
