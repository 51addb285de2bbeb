//! Top goal contributors (goals plus assists) for a club or a country.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use super::goals::reconstruct_goals;
use super::normalize::sequence_by_match;
use crate::models::{
    modifiers, ClubId, Contribution, ContributionScope, CountryId, MatchEvent, PlayerId,
};

/// Largest ranking a caller may request.
pub const MAX_LIMIT: usize = 100;

/// Whether `limit` is an acceptable ranking length (`1..=MAX_LIMIT`).
pub fn valid_limit(limit: usize) -> bool {
    (1..=MAX_LIMIT).contains(&limit)
}

/// Whether a player acting for `club` with nationality `country` falls in `scope`.
pub fn in_scope(scope: ContributionScope, club: ClubId, country: Option<CountryId>) -> bool {
    match scope {
        ContributionScope::Club(id) => club == id,
        ContributionScope::Country(id) => country == Some(id),
    }
}

#[derive(Debug, Default)]
struct Tally {
    name: String,
    goals: u32,
    assists: u32,
}

/// Rank the players in `scope` by goals plus assists.
///
/// `events` may span many matches. Own goals are not credited to the player
/// who put the ball in. Ties break on goals, then on name.
pub fn top_contributions(
    scope: ContributionScope,
    events: Vec<MatchEvent>,
    limit: usize,
) -> Vec<Contribution> {
    let mut tallies: HashMap<PlayerId, Tally> = HashMap::new();

    for (match_id, sequenced) in sequence_by_match(events) {
        let clubs: BTreeSet<ClubId> = sequenced.iter().map(|e| e.club_id).collect();

        for club in clubs {
            for goal in reconstruct_goals(&sequenced, club)
                .into_iter()
                .filter(|g| !g.is_own_goal && in_scope(scope, g.club_id, g.player_country_id))
            {
                let tally = tallies.entry(goal.player_id).or_default();
                tally.name = goal.player_name;
                tally.goals += 1;
            }
        }

        for assist in sequenced.iter().filter(|e| {
            e.modifier_is(modifiers::ASSIST) && in_scope(scope, e.club_id, e.player_country_id)
        }) {
            let tally = tallies.entry(assist.player_id).or_default();
            tally.name = assist.player_name.clone();
            tally.assists += 1;
        }

        debug!("Counted contributions of match {} for {}", match_id, scope);
    }

    let mut ranked: Vec<Contribution> = tallies
        .into_iter()
        .map(|(player_id, t)| Contribution {
            player_id,
            player_name: t.name,
            goals: t.goals,
            assists: t.assists,
            total: t.goals + t.assists,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then(b.goals.cmp(&a.goals))
            .then_with(|| a.player_name.cmp(&b.player_name))
            .then(a.player_id.cmp(&b.player_id))
    });
    ranked.truncate(limit);
    ranked
}
