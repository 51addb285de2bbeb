//! Shot map and per-category event maps.

use std::collections::HashSet;

use super::coordinates::{
    attacked_goal, distance_between, map_optional, parse_zone_code, shot_end_point, Orientation,
    ShotOutcomeKind,
};
use super::normalize::abbreviate_name;
use crate::models::{
    actions, modifiers, names, EventId, EventMarker, Goal, NormalizedEvent, PitchPoint, Shot,
    ShotResult, ShotSituation,
};

/// True for shots from open play and for penalties/direct free kicks.
pub fn is_shot(event: &NormalizedEvent) -> bool {
    event.name == names::SHOT
        || (event.name == names::FREE_KICK
            && (event.action_is(actions::PENALTY) || event.action_is(actions::FREE_KICK_SHOT)))
}

pub fn shot_result(event: &NormalizedEvent, goal_ids: &HashSet<EventId>) -> ShotResult {
    if goal_ids.contains(&event.id) {
        return ShotResult::Goal;
    }

    let Some(modifier) = event.modifier.as_deref() else {
        return ShotResult::Unknown;
    };

    if let Some(zone) = parse_zone_code(modifier) {
        return match zone.kind {
            ShotOutcomeKind::Post => ShotResult::Post,
            ShotOutcomeKind::OffTarget => ShotResult::Miss,
            ShotOutcomeKind::OnTarget => ShotResult::Save,
        };
    }

    match modifier {
        modifiers::BLOCKED => ShotResult::Blocked,
        modifiers::INTERCEPTION => ShotResult::Intercepted,
        modifiers::OPPORTUNITY => ShotResult::OpportunityMissed,
        _ => ShotResult::Unknown,
    }
}

pub fn shot_situation(event: &NormalizedEvent) -> ShotSituation {
    match event.action.as_deref() {
        Some(actions::SHOT) => ShotSituation::RegularPlay,
        Some(actions::PENALTY) => ShotSituation::Penalty,
        Some(actions::FREE_KICK_SHOT) => ShotSituation::FreeKick,
        _ => ShotSituation::Unknown,
    }
}

/// Every shot of a match, attack-normalized, with distance to the attacked goal.
///
/// `goals` must hold the goals of both sides so results agree with them.
pub fn shot_map(events: &[NormalizedEvent], goals: &[Goal], name_max_len: usize) -> Vec<Shot> {
    let goal_ids: HashSet<EventId> = goals.iter().map(|g| g.event_id).collect();

    events
        .iter()
        .filter(|e| is_shot(e))
        .map(|e| {
            let coordinates =
                map_optional(e.x_begin, e.y_begin, e.is_home, Orientation::AttackNormalized);
            Shot {
                event_id: e.id,
                player_id: e.player_id,
                player_name: abbreviate_name(&e.player_name, name_max_len),
                club_id: e.club_id,
                is_home: e.is_home,
                period: e.period,
                minute: e.minute,
                modifier: e.modifier.clone(),
                coordinates,
                end_coordinates: shot_end_point(e.modifier.as_deref(), e.is_home),
                distance: distance_between(&coordinates, &attacked_goal(e.is_home)),
                result: shot_result(e, &goal_ids),
                situation: shot_situation(e),
            }
        })
        .collect()
}

/// Shot origins on the home-left-to-right pitch, `(home, away)`.
pub fn shot_positions(events: &[NormalizedEvent]) -> (Vec<PitchPoint>, Vec<PitchPoint>) {
    let mut home = Vec::new();
    let mut away = Vec::new();

    for e in events.iter().filter(|e| is_shot(e)) {
        let point = map_optional(e.x_begin, e.y_begin, e.is_home, Orientation::HomeLeftToRight);
        if !point.is_available() {
            continue;
        }
        if e.is_home {
            home.push(point);
        } else {
            away.push(point);
        }
    }

    (home, away)
}

/// Event-map categories of the statistics page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCategory {
    Passes,
    Interceptions,
    Offsides,
    Duels,
    Fouls,
    FreeKicks,
    Saves,
}

impl MarkerCategory {
    pub const ALL: [MarkerCategory; 7] = [
        MarkerCategory::Passes,
        MarkerCategory::Interceptions,
        MarkerCategory::Offsides,
        MarkerCategory::Duels,
        MarkerCategory::Fouls,
        MarkerCategory::FreeKicks,
        MarkerCategory::Saves,
    ];

    pub fn matches(&self, event: &NormalizedEvent) -> bool {
        match self {
            MarkerCategory::Passes => event.name == names::PASS,
            MarkerCategory::Interceptions => event.modifier_is(modifiers::INTERCEPTION),
            MarkerCategory::Offsides => event.name == names::OFFSIDE,
            MarkerCategory::Duels => event.name == names::DUEL,
            MarkerCategory::Fouls => event.name == names::FOUL,
            MarkerCategory::FreeKicks => event.name == names::FREE_KICK,
            MarkerCategory::Saves => event.name == names::SAVE_ATTEMPT,
        }
    }
}

/// Attack-normalized markers for one category, in event order.
pub fn event_markers(
    events: &[NormalizedEvent],
    category: MarkerCategory,
    name_max_len: usize,
) -> Vec<EventMarker> {
    events
        .iter()
        .filter(|e| category.matches(e))
        .map(|e| {
            let coordinates =
                map_optional(e.x_begin, e.y_begin, e.is_home, Orientation::AttackNormalized);
            let end_coordinates =
                map_optional(e.x_end, e.y_end, e.is_home, Orientation::AttackNormalized);
            EventMarker {
                event_id: e.id,
                player_id: e.player_id,
                player_name: abbreviate_name(&e.player_name, name_max_len),
                club_id: e.club_id,
                is_home: e.is_home,
                period: e.period,
                minute: e.minute,
                action: e.action.clone(),
                modifier: e.modifier.clone(),
                is_success: e.is_success,
                coordinates,
                end_coordinates,
                distance: distance_between(&coordinates, &end_coordinates),
            }
        })
        .collect()
}
