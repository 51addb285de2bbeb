//! Lineup and substitution records.

use serde::{Deserialize, Serialize};

use super::{CountryId, MatchMinute, MatchPeriod, PlayerId, Position};

/// A player in a starting eleven.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,
    pub country_id: Option<CountryId>,
}

/// A player change, as inferred from touch timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Substitution {
    pub sub_on_id: PlayerId,
    pub sub_on_name: String,
    pub sub_off_id: PlayerId,
    pub sub_off_name: String,
    pub period: MatchPeriod,
    pub minute: MatchMinute,
}
