//! Goal reconstruction from failed save attempts.
//!
//! The event log has no goal record. A goal is a `Save attempt` with
//! `is_success = false` by the defending club, immediately followed (next
//! sequence number, same match) by the scoring event.

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{actions, names, ClubId, Goal, MatchInfo, NormalizedEvent};

/// Reconstruct the goals credited to `attacking_club`.
///
/// `events` must be one match's normalized events in sequence order. A failed
/// save with no following event produces no goal.
pub fn reconstruct_goals(events: &[NormalizedEvent], attacking_club: ClubId) -> Vec<Goal> {
    let mut goals = Vec::new();

    for save in events.iter().filter(|e| {
        e.name == names::SAVE_ATTEMPT && e.is_success == Some(false) && e.club_id != attacking_club
    }) {
        let next = events
            .binary_search_by_key(&(save.sequence + 1), |e| e.sequence)
            .ok()
            .map(|idx| &events[idx])
            .filter(|e| e.match_id == save.match_id);

        let Some(scoring) = next else {
            warn!(
                "Failed save attempt {} in match {} has no following event",
                save.id, save.match_id
            );
            continue;
        };

        goals.push(Goal {
            event_id: scoring.id,
            club_id: attacking_club,
            player_id: scoring.player_id,
            player_name: scoring.player_name.clone(),
            player_country_id: scoring.player_country_id,
            period: scoring.period,
            minute: scoring.minute,
            is_own_goal: scoring.club_id != attacking_club,
            is_penalty: scoring.action_is(actions::PENALTY),
        });
    }

    debug!("Reconstructed {} goals for club {}", goals.len(), attacking_club);
    goals
}

/// Goals of both sides of a match, `(home, away)`.
pub fn match_goals(info: &MatchInfo, events: &[NormalizedEvent]) -> (Vec<Goal>, Vec<Goal>) {
    (
        reconstruct_goals(events, info.home_club_id),
        reconstruct_goals(events, info.away_club_id),
    )
}

/// Score after a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreLine {
    pub home: u32,
    pub away: u32,
}

/// A goal with the side it counted for and the score it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGoal<'a> {
    pub goal: &'a Goal,
    pub is_home: bool,
    pub score: ScoreLine,
}

/// Walk both sides' goals chronologically, accumulating the score.
///
/// Own goals sit in the list of the side they were credited to, so they
/// increment that side's tally.
pub fn running_score<'a>(home_goals: &'a [Goal], away_goals: &'a [Goal]) -> Vec<ScoredGoal<'a>> {
    let mut all: Vec<(&Goal, bool)> = home_goals
        .iter()
        .map(|g| (g, true))
        .chain(away_goals.iter().map(|g| (g, false)))
        .collect();
    all.sort_by_key(|(g, _)| (g.period, g.minute.normalized(), g.event_id));

    let mut score = ScoreLine::default();
    all.into_iter()
        .map(|(goal, is_home)| {
            if is_home {
                score.home += 1;
            } else {
                score.away += 1;
            }
            ScoredGoal {
                goal,
                is_home,
                score,
            }
        })
        .collect()
}
