//! Raw match events and their normalized form.

use serde::{Deserialize, Serialize};

use super::{ClubId, CountryId, EventId, MatchId, MatchMinute, MatchPeriod, PlayerId, Position};

/// Event names used by the event log.
pub mod names {
    pub const PASS: &str = "Pass";
    pub const SHOT: &str = "Shot";
    pub const DUEL: &str = "Duel";
    pub const FOUL: &str = "Foul";
    pub const FREE_KICK: &str = "Free Kick";
    pub const OFFSIDE: &str = "Offside";
    pub const SAVE_ATTEMPT: &str = "Save attempt";
    pub const OTHERS_ON_THE_BALL: &str = "Others on the ball";
}

/// Actions (sub-event types) with special meaning.
pub mod actions {
    pub const SHOT: &str = "Shot";
    pub const PENALTY: &str = "Penalty";
    pub const FREE_KICK_SHOT: &str = "Free kick shot";
    pub const OUT_OF_GAME_FOUL: &str = "Out of game foul";
}

/// Modifiers (event tags) with special meaning.
pub mod modifiers {
    pub const YELLOW_CARD: &str = "yellow_card";
    pub const RED_CARD: &str = "red_card";
    pub const SECOND_YELLOW_CARD: &str = "second_yellow_card";
    pub const ASSIST: &str = "assist";
    pub const KEY_PASS: &str = "key_pass";
    pub const INTERCEPTION: &str = "interception";
    pub const BLOCKED: &str = "blocked";
    pub const OPPORTUNITY: &str = "opportunity";

    /// Card modifiers, in ascending severity.
    pub const CARDS: [&str; 3] = [YELLOW_CARD, SECOND_YELLOW_CARD, RED_CARD];

    /// Modifiers that send a player off.
    pub const DISMISSALS: [&str; 2] = [RED_CARD, SECOND_YELLOW_CARD];
}

/// One on-pitch event as stored, joined with the acting player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEvent {
    pub id: EventId,
    pub match_id: MatchId,
    pub club_id: ClubId,
    pub player_id: PlayerId,

    /// Acting player's display name ("First Last")
    pub player_name: String,
    pub player_position: Position,
    pub player_country_id: Option<CountryId>,

    pub period: MatchPeriod,

    /// Seconds elapsed since the start of the period
    pub second: f64,

    pub name: String,
    pub action: Option<String>,
    pub modifier: Option<String>,

    /// Percentage coordinates in the acting team's frame (0..=100)
    pub x_begin: Option<f64>,
    pub y_begin: Option<f64>,
    pub x_end: Option<f64>,
    pub y_end: Option<f64>,

    pub is_success: Option<bool>,
}

impl MatchEvent {
    pub fn action_is(&self, action: &str) -> bool {
        self.action.as_deref() == Some(action)
    }

    pub fn modifier_is(&self, modifier: &str) -> bool {
        self.modifier.as_deref() == Some(modifier)
    }

    /// True when the event carries a yellow, second yellow or red card.
    pub fn is_card(&self) -> bool {
        self.modifier
            .as_deref()
            .is_some_and(|m| modifiers::CARDS.contains(&m))
    }

    /// True when the event sent the player off.
    pub fn is_dismissal(&self) -> bool {
        self.modifier
            .as_deref()
            .is_some_and(|m| modifiers::DISMISSALS.contains(&m))
    }
}

/// A match event annotated with side, clock minute and per-match sequence.
#[derive(Debug, Clone)]
pub struct NormalizedEvent {
    /// 0-based position of the event within its match, in id order
    pub sequence: usize,
    pub event: MatchEvent,
    pub minute: MatchMinute,
    pub is_home: bool,
}

impl std::ops::Deref for NormalizedEvent {
    type Target = MatchEvent;

    fn deref(&self) -> &Self::Target {
        &self.event
    }
}
