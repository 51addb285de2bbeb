//! Match header information.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{ClubId, MatchId};

/// A match with its clubs, venue and final score resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInfo {
    pub match_id: MatchId,
    pub date: NaiveDateTime,
    pub competition: String,
    pub season: Option<String>,

    pub home_club_id: ClubId,
    pub home_club: String,
    pub away_club_id: ClubId,
    pub away_club: String,

    /// Winning club name, `None` for a draw
    pub winner: Option<String>,

    pub home_goals: u32,
    pub away_goals: u32,

    pub stadium: String,
    pub city: Option<String>,
    pub capacity: Option<u32>,
    pub country: Option<String>,
    pub region: Option<String>,
}

impl MatchInfo {
    /// Whether a club is the home side of this match.
    pub fn is_home(&self, club_id: ClubId) -> bool {
        club_id == self.home_club_id
    }
}

#[cfg(test)]
pub(crate) mod match_fixtures {
    use super::*;

    pub fn match_info(home: i64, away: i64) -> MatchInfo {
        MatchInfo {
            match_id: MatchId::new(100),
            date: chrono::NaiveDate::from_ymd_opt(2018, 5, 20)
                .unwrap()
                .and_hms_opt(18, 45, 0)
                .unwrap(),
            competition: "Premier League".to_string(),
            season: Some("2017/2018".to_string()),
            home_club_id: ClubId::new(home),
            home_club: "Home FC".to_string(),
            away_club_id: ClubId::new(away),
            away_club: "Away United".to_string(),
            winner: None,
            home_goals: 0,
            away_goals: 0,
            stadium: "Ground".to_string(),
            city: None,
            capacity: None,
            country: None,
            region: None,
        }
    }
}
