//! Match periods and the match clock.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Half of a match an event happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchPeriod {
    #[serde(rename = "1H")]
    FirstHalf,
    #[serde(rename = "2H")]
    SecondHalf,
}

impl MatchPeriod {
    /// Minutes already played when this period kicks off.
    pub fn offset_minutes(&self) -> u32 {
        match self {
            MatchPeriod::FirstHalf => 0,
            MatchPeriod::SecondHalf => 45,
        }
    }

    /// Last regulation minute of this period; later minutes are stoppage time.
    pub fn regulation_end(&self) -> u32 {
        self.offset_minutes() + 45
    }

    /// Storage code of the period.
    pub fn code(&self) -> &'static str {
        match self {
            MatchPeriod::FirstHalf => "1H",
            MatchPeriod::SecondHalf => "2H",
        }
    }
}

impl fmt::Display for MatchPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Unknown period code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown match period: {0}")]
pub struct ParsePeriodError(pub String);

impl FromStr for MatchPeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1H" | "FirstHalf" | "first_half" => Ok(MatchPeriod::FirstHalf),
            "2H" | "SecondHalf" | "second_half" => Ok(MatchPeriod::SecondHalf),
            other => Err(ParsePeriodError(other.to_string())),
        }
    }
}

/// A match-clock minute, split into regulation and stoppage parts.
///
/// Displays as `"46"` or `"45+1"`. Serializes as a number when there is no
/// stoppage time and as a string otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchMinute {
    pub regular: u32,
    pub stoppage: Option<u32>,
}

impl MatchMinute {
    pub fn regular(minute: u32) -> Self {
        Self {
            regular: minute,
            stoppage: None,
        }
    }

    pub fn with_stoppage(regular: u32, stoppage: u32) -> Self {
        Self {
            regular,
            stoppage: Some(stoppage),
        }
    }

    /// Total elapsed minutes, used for ordering only ("45+2" -> 47).
    pub fn normalized(&self) -> u32 {
        self.regular + self.stoppage.unwrap_or(0)
    }
}

impl fmt::Display for MatchMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stoppage {
            Some(extra) => write!(f, "{}+{}", self.regular, extra),
            None => write!(f, "{}", self.regular),
        }
    }
}

impl Serialize for MatchMinute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.stoppage {
            Some(_) => serializer.serialize_str(&self.to_string()),
            None => serializer.serialize_u32(self.regular),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse() {
        assert_eq!("1H".parse::<MatchPeriod>(), Ok(MatchPeriod::FirstHalf));
        assert_eq!("2H".parse::<MatchPeriod>(), Ok(MatchPeriod::SecondHalf));
        assert_eq!(
            "SecondHalf".parse::<MatchPeriod>(),
            Ok(MatchPeriod::SecondHalf)
        );
        assert!("E1".parse::<MatchPeriod>().is_err());
    }

    #[test]
    fn test_period_ordering() {
        assert!(MatchPeriod::FirstHalf < MatchPeriod::SecondHalf);
    }

    #[test]
    fn test_period_serialization() {
        let json = serde_json::to_string(&MatchPeriod::SecondHalf).unwrap();
        assert_eq!(json, "\"2H\"");
    }

    #[test]
    fn test_minute_display() {
        assert_eq!(MatchMinute::regular(46).to_string(), "46");
        assert_eq!(MatchMinute::with_stoppage(90, 3).to_string(), "90+3");
    }

    #[test]
    fn test_minute_normalized() {
        assert_eq!(MatchMinute::with_stoppage(45, 2).normalized(), 47);
        assert_eq!(MatchMinute::regular(12).normalized(), 12);
    }

    #[test]
    fn test_minute_serialization() {
        assert_eq!(serde_json::to_string(&MatchMinute::regular(46)).unwrap(), "46");
        assert_eq!(
            serde_json::to_string(&MatchMinute::with_stoppage(45, 1)).unwrap(),
            "\"45+1\""
        );
    }
}
