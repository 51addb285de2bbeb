//! Player positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Playing position, ordered by lineup priority (GK first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DF")]
    Defender,
    #[serde(rename = "MF")]
    Midfielder,
    #[serde(rename = "FW")]
    Forward,
    #[serde(rename = "--")]
    Other,
}

impl Position {
    /// Parse a stored position. Accepts short codes and full names.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "gk" | "goalkeeper" => Position::Goalkeeper,
            "df" | "defender" => Position::Defender,
            "mf" | "midfielder" => Position::Midfielder,
            "fw" | "forward" => Position::Forward,
            _ => Position::Other,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Midfielder => "MF",
            Position::Forward => "FW",
            Position::Other => "--",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
