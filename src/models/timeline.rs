//! Goals and the key-events feed.

use serde::{Deserialize, Serialize};

use super::{modifiers, ClubId, CountryId, EventId, MatchMinute, MatchPeriod, PlayerId};

/// A goal reconstructed from the event log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Goal {
    /// The scoring event
    pub event_id: EventId,

    /// Club credited with the goal
    pub club_id: ClubId,

    /// Player who put the ball in (an opponent for own goals)
    pub player_id: PlayerId,
    pub player_name: String,
    pub player_country_id: Option<CountryId>,

    pub period: MatchPeriod,
    pub minute: MatchMinute,
    pub is_own_goal: bool,
    pub is_penalty: bool,
}

/// Icon tag of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyEventIcon {
    Goal,
    #[serde(rename = "goal_og")]
    OwnGoal,
    #[serde(rename = "goal_p")]
    PenaltyGoal,
    #[serde(rename = "sub")]
    Substitution,
    YellowCard,
    SecondYellowCard,
    RedCard,
}

impl KeyEventIcon {
    /// Icon for a card modifier.
    pub fn for_card(modifier: &str) -> Option<Self> {
        match modifier {
            modifiers::YELLOW_CARD => Some(KeyEventIcon::YellowCard),
            modifiers::SECOND_YELLOW_CARD => Some(KeyEventIcon::SecondYellowCard),
            modifiers::RED_CARD => Some(KeyEventIcon::RedCard),
            _ => None,
        }
    }

    /// Icon for a goal.
    pub fn for_goal(goal: &Goal) -> Self {
        if goal.is_own_goal {
            KeyEventIcon::OwnGoal
        } else if goal.is_penalty {
            KeyEventIcon::PenaltyGoal
        } else {
            KeyEventIcon::Goal
        }
    }
}

/// One line of the chronological key-events feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyEvent {
    pub player_id: PlayerId,
    pub icon: KeyEventIcon,
    pub details_up: String,
    pub details_down: String,
    pub period: MatchPeriod,
    pub minute: MatchMinute,
    pub is_home: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_serialization() {
        assert_eq!(serde_json::to_string(&KeyEventIcon::Goal).unwrap(), "\"goal\"");
        assert_eq!(serde_json::to_string(&KeyEventIcon::OwnGoal).unwrap(), "\"goal_og\"");
        assert_eq!(
            serde_json::to_string(&KeyEventIcon::PenaltyGoal).unwrap(),
            "\"goal_p\""
        );
        assert_eq!(
            serde_json::to_string(&KeyEventIcon::Substitution).unwrap(),
            "\"sub\""
        );
        assert_eq!(
            serde_json::to_string(&KeyEventIcon::SecondYellowCard).unwrap(),
            "\"second_yellow_card\""
        );
    }

    #[test]
    fn test_icon_for_card() {
        assert_eq!(
            KeyEventIcon::for_card("red_card"),
            Some(KeyEventIcon::RedCard)
        );
        assert_eq!(KeyEventIcon::for_card("key_pass"), None);
    }
}
