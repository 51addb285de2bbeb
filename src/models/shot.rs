//! Shot map and event map records.

use serde::{Deserialize, Serialize};

use super::{ClubId, EventId, MatchMinute, MatchPeriod, PitchPoint, PlayerId};

/// Outcome of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    Goal,
    Save,
    Blocked,
    Intercepted,
    #[serde(rename = "Opportunity Missed")]
    OpportunityMissed,
    Miss,
    Post,
    #[serde(rename = "")]
    Unknown,
}

/// Game situation a shot was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotSituation {
    #[serde(rename = "Regular play")]
    RegularPlay,
    Penalty,
    #[serde(rename = "Free Kick")]
    FreeKick,
    #[serde(rename = "")]
    Unknown,
}

/// A shot placed on the pitch.
#[derive(Debug, Clone, Serialize)]
pub struct Shot {
    pub event_id: EventId,
    pub player_id: PlayerId,
    pub player_name: String,
    pub club_id: ClubId,
    pub is_home: bool,
    pub period: MatchPeriod,
    pub minute: MatchMinute,

    /// Goal-mouth zone code the shot ended in, if any
    pub modifier: Option<String>,

    pub coordinates: PitchPoint,
    pub end_coordinates: PitchPoint,

    /// Distance to the attacked goal, `None` without coordinates.
    /// Serialized as `null`, not the `-1` point sentinel.
    pub distance: Option<f64>,

    pub result: ShotResult,
    pub situation: ShotSituation,
}

/// A non-shot event placed on the pitch (passes, duels, fouls, ...).
#[derive(Debug, Clone, Serialize)]
pub struct EventMarker {
    pub event_id: EventId,
    pub player_id: PlayerId,
    pub player_name: String,
    pub club_id: ClubId,
    pub is_home: bool,
    pub period: MatchPeriod,
    pub minute: MatchMinute,
    pub action: Option<String>,
    pub modifier: Option<String>,
    pub is_success: Option<bool>,
    pub coordinates: PitchPoint,
    pub end_coordinates: PitchPoint,

    /// Begin-to-end distance, `None` (`null` in JSON) without coordinates
    pub distance: Option<f64>,
}
