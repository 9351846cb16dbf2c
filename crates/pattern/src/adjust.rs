//! Adjustment policy for points that do not exist in a domain.

use std::fmt;
use std::str::FromStr;

/// What to do when a requested point does not exist in a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Adjustment {
    /// Fail with an unreachable-time error.
    #[default]
    None,
    /// Move to the nearest existing point after the request.
    Up,
    /// Move to the nearest existing point before the request.
    Down,
}

impl Adjustment {
    /// Returns the lowercase name of the policy.
    pub fn name(self) -> &'static str {
        match self {
            Adjustment::None => "none",
            Adjustment::Up => "up",
            Adjustment::Down => "down",
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an adjustment name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown adjustment: {0:?} (expected none, up or down)")]
pub struct ParseAdjustmentError(pub String);

impl FromStr for Adjustment {
    type Err = ParseAdjustmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Adjustment::None),
            "up" => Ok(Adjustment::Up),
            "down" => Ok(Adjustment::Down),
            _ => Err(ParseAdjustmentError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(Adjustment::default(), Adjustment::None);
    }

    #[test]
    fn parse() {
        assert_eq!("UP".parse::<Adjustment>().unwrap(), Adjustment::Up);
        assert_eq!("down".parse::<Adjustment>().unwrap(), Adjustment::Down);
        assert_eq!("none".parse::<Adjustment>().unwrap(), Adjustment::None);
        let err = "sideways".parse::<Adjustment>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown adjustment: \"sideways\" (expected none, up or down)"
        );
    }
}
