use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StatsError;

/// How many trailing months of a series are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WindowSelection {
    Last3,
    Last6,
    #[default]
    Last12,
}

impl WindowSelection {
    pub const ALL: [WindowSelection; 3] = [
        WindowSelection::Last12,
        WindowSelection::Last6,
        WindowSelection::Last3,
    ];

    pub fn months(&self) -> usize {
        match self {
            WindowSelection::Last3 => 3,
            WindowSelection::Last6 => 6,
            WindowSelection::Last12 => 12,
        }
    }

    /// Parse a selector token ("3", "6", "12").
    ///
    /// Anything unrecognised falls back to the full twelve months.
    pub fn from_token(token: &str) -> WindowSelection {
        token.parse().unwrap_or_else(|_| {
            warn!("Unrecognized window token {token:?}, showing the last 12 months");
            WindowSelection::Last12
        })
    }

    /// Token understood by [`WindowSelection::from_token`].
    pub fn token(&self) -> &'static str {
        match self {
            WindowSelection::Last3 => "3",
            WindowSelection::Last6 => "6",
            WindowSelection::Last12 => "12",
        }
    }

    /// Selector caption, e.g. "Last 6 months".
    pub fn caption(&self) -> String {
        format!("Last {} months", self.months())
    }
}

impl TryFrom<usize> for WindowSelection {
    type Error = StatsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(WindowSelection::Last3),
            6 => Ok(WindowSelection::Last6),
            12 => Ok(WindowSelection::Last12),
            other => Err(StatsError::InvalidWindow(other)),
        }
    }
}

impl From<WindowSelection> for usize {
    fn from(value: WindowSelection) -> Self {
        value.months()
    }
}

impl FromStr for WindowSelection {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let months: usize = s
            .trim()
            .parse()
            .map_err(|_| StatsError::InvalidWindowToken(s.to_string()))?;
        WindowSelection::try_from(months)
    }
}

impl fmt::Display for WindowSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.months())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_is_twelve() {
        assert_eq!(WindowSelection::default(), WindowSelection::Last12);
    }

    #[test]
    fn test_try_from_is_strict() {
        assert_eq!(WindowSelection::try_from(3).unwrap(), WindowSelection::Last3);
        assert_eq!(WindowSelection::try_from(6).unwrap(), WindowSelection::Last6);
        assert_eq!(WindowSelection::try_from(12).unwrap(), WindowSelection::Last12);
        for bad in [0, 1, 4, 11, 24] {
            let err = WindowSelection::try_from(bad).unwrap_err();
            assert!(matches!(err, StatsError::InvalidWindow(n) if n == bad));
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_from_token_falls_back_to_twelve() {
        assert_eq!(WindowSelection::from_token("3"), WindowSelection::Last3);
        assert_eq!(WindowSelection::from_token(" 6 "), WindowSelection::Last6);
        assert_eq!(WindowSelection::from_token("12"), WindowSelection::Last12);
        assert_eq!(WindowSelection::from_token("9"), WindowSelection::Last12);
        assert_eq!(WindowSelection::from_token("quarter"), WindowSelection::Last12);
        assert_eq!(WindowSelection::from_token(""), WindowSelection::Last12);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("6".parse::<WindowSelection>().unwrap(), WindowSelection::Last6);
        assert!("9".parse::<WindowSelection>().is_err());
        assert!("six".parse::<WindowSelection>().is_err());
    }

    #[test]
    fn test_tokens_round_trip_through_selector() {
        for window in WindowSelection::ALL {
            assert_eq!(WindowSelection::from_token(window.token()), window);
        }
        assert_eq!(WindowSelection::Last6.caption(), "Last 6 months");
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&WindowSelection::Last6).unwrap();
        assert_eq!(json, "6");
        let parsed: WindowSelection = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, WindowSelection::Last3);
        assert!(serde_json::from_str::<WindowSelection>("5").is_err());
    }
}
