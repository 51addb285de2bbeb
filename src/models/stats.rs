//! Derived statistics models.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    ClubId, CountryId, EventMarker, Goal, KeyEvent, LineupEntry, MatchInfo, PitchPoint, PlayerId,
    Shot, Substitution,
};

/// Home/away comparison of one metric.
///
/// Widths sum to 100 when the total is positive and are 50/50 otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricWidth {
    pub metric_name: String,
    pub home_count: u32,
    pub away_count: u32,
    pub home_width_pct: f64,
    pub away_width_pct: f64,
}

/// Scope of a top-contributors ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ContributionScope {
    Club(ClubId),
    Country(CountryId),
}

impl fmt::Display for ContributionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContributionScope::Club(id) => write!(f, "club {}", id),
            ContributionScope::Country(id) => write!(f, "country {}", id),
        }
    }
}

/// Goals plus assists of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub player_id: PlayerId,
    pub player_name: String,
    pub goals: u32,
    pub assists: u32,
    pub total: u32,
}

/// Everything the match statistics page renders.
#[derive(Debug, Clone, Serialize)]
pub struct MatchStatsView {
    pub match_info: MatchInfo,

    /// Possession first, then the summary metrics
    pub summary_widths: Vec<MetricWidth>,
    pub shot_widths: Vec<MetricWidth>,
    pub pass_widths: Vec<MetricWidth>,
    pub defense_widths: Vec<MetricWidth>,

    pub home_goals: Vec<Goal>,
    pub away_goals: Vec<Goal>,

    #[serde(rename = "home_XI")]
    pub home_xi: Vec<LineupEntry>,
    #[serde(rename = "away_XI")]
    pub away_xi: Vec<LineupEntry>,
    pub home_subs: Vec<Substitution>,
    pub away_subs: Vec<Substitution>,

    pub key_events: Vec<KeyEvent>,

    pub shots: Vec<Shot>,
    pub passes: Vec<EventMarker>,
    pub interceptions: Vec<EventMarker>,
    pub offsides: Vec<EventMarker>,
    pub duels: Vec<EventMarker>,
    pub fouls: Vec<EventMarker>,
    pub freekicks: Vec<EventMarker>,
    pub saves: Vec<EventMarker>,

    /// Shot origins on the simple home-left-to-right pitch
    pub home_shot_positions: Vec<PitchPoint>,
    pub away_shot_positions: Vec<PitchPoint>,
}
