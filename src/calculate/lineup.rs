//! Starting elevens and substitutions.
//!
//! The schema has no lineup table, so [`TouchInferredLineup`] derives both
//! from the first and last touch of every player. Anything that can read a
//! real lineup source only needs to implement [`LineupProvider`].

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, warn};

use super::normalize::{abbreviate_name, LINEUP_NAME_MAX_LEN, NAME_MAX_LEN};
use crate::models::{
    actions, ClubId, LineupEntry, MatchMinute, MatchPeriod, NormalizedEvent, PlayerId,
    Substitution,
};

/// Players fielded at kick-off.
pub const STARTING_PLAYERS: usize = 11;

/// Source of lineup data for a club in one match.
pub trait LineupProvider: Send + Sync {
    /// The starting eleven, goalkeeper first.
    fn starting_eleven(&self, events: &[NormalizedEvent], club: ClubId) -> Vec<LineupEntry>;

    /// Substitutions in the order they happened.
    fn substitutions(&self, events: &[NormalizedEvent], club: ClubId) -> Vec<Substitution>;
}

/// Lineups inferred from touch timestamps.
#[derive(Debug, Clone)]
pub struct TouchInferredLineup {
    /// Name length limit in the starting-eleven listing
    pub lineup_name_max_len: usize,

    /// Name length limit in substitution lines
    pub name_max_len: usize,
}

impl Default for TouchInferredLineup {
    fn default() -> Self {
        Self {
            lineup_name_max_len: LINEUP_NAME_MAX_LEN,
            name_max_len: NAME_MAX_LEN,
        }
    }
}

/// A point on the match clock.
#[derive(Debug, Clone, Copy)]
struct Touch {
    period: MatchPeriod,
    second: f64,
    minute: MatchMinute,
}

impl Touch {
    fn of(event: &NormalizedEvent) -> Self {
        Self {
            period: event.period,
            second: event.second,
            minute: event.minute,
        }
    }

    fn cmp_clock(&self, other: &Touch) -> Ordering {
        self.period
            .cmp(&other.period)
            .then(self.second.total_cmp(&other.second))
    }
}

/// First and last touch of one player.
#[derive(Debug, Clone)]
struct TouchSpan<'a> {
    player: &'a NormalizedEvent,
    first: Touch,
    last: Touch,
    dismissed: bool,
}

fn touch_spans<'a>(
    events: &'a [NormalizedEvent],
    club: ClubId,
) -> HashMap<PlayerId, TouchSpan<'a>> {
    let mut spans: HashMap<PlayerId, TouchSpan<'a>> = HashMap::new();

    for event in events
        .iter()
        .filter(|e| e.club_id == club && !e.action_is(actions::OUT_OF_GAME_FOUL))
    {
        let touch = Touch::of(event);
        spans
            .entry(event.player_id)
            .and_modify(|span| {
                if touch.cmp_clock(&span.first) == Ordering::Less {
                    span.first = touch;
                }
                if touch.cmp_clock(&span.last) != Ordering::Less {
                    span.last = touch;
                    span.dismissed = event.is_dismissal();
                }
            })
            .or_insert_with(|| TouchSpan {
                player: event,
                first: touch,
                last: touch,
                dismissed: event.is_dismissal(),
            });
    }

    spans
}

/// Starting eleven: the 11 earliest first-half touches, ordered by position then id.
pub fn starting_eleven(
    events: &[NormalizedEvent],
    club: ClubId,
    name_max_len: usize,
) -> Vec<LineupEntry> {
    let mut first_touch: HashMap<PlayerId, (&NormalizedEvent, f64)> = HashMap::new();
    for event in events
        .iter()
        .filter(|e| e.club_id == club && e.period == MatchPeriod::FirstHalf)
    {
        first_touch
            .entry(event.player_id)
            .and_modify(|(_, second)| {
                if event.second < *second {
                    *second = event.second;
                }
            })
            .or_insert((event, event.second));
    }

    let mut earliest: Vec<(&NormalizedEvent, f64)> = first_touch.into_values().collect();
    earliest.sort_by(|(a, sa), (b, sb)| sa.total_cmp(sb).then(a.player_id.cmp(&b.player_id)));
    earliest.truncate(STARTING_PLAYERS);

    let mut lineup: Vec<LineupEntry> = earliest
        .into_iter()
        .map(|(e, _)| LineupEntry {
            player_id: e.player_id,
            name: abbreviate_name(&e.player_name, name_max_len),
            position: e.player_position,
            country_id: e.player_country_id,
        })
        .collect();
    lineup.sort_by_key(|entry| (entry.position, entry.player_id));

    debug!("Starting eleven for club {}: {} players", club, lineup.len());
    lineup
}

/// Substitutions paired from the earliest last touches and the latest first touches.
pub fn substitutions(
    events: &[NormalizedEvent],
    club: ClubId,
    name_max_len: usize,
) -> Vec<Substitution> {
    let spans = touch_spans(events, club);
    let distinct_players = spans.len();

    if distinct_players < STARTING_PLAYERS {
        warn!(
            "Club {} used {} distinct players, fewer than {}",
            club, distinct_players, STARTING_PLAYERS
        );
    }
    let subs_count = distinct_players.saturating_sub(STARTING_PLAYERS);
    if subs_count == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<&TouchSpan> = spans.values().filter(|s| !s.dismissed).collect();

    candidates.sort_by(|a, b| {
        a.last
            .cmp_clock(&b.last)
            .then(a.player.player_id.cmp(&b.player.player_id))
    });
    let subbed_off: Vec<&TouchSpan> = candidates.iter().take(subs_count).copied().collect();

    candidates.sort_by(|a, b| {
        a.first
            .cmp_clock(&b.first)
            .then(a.player.player_id.cmp(&b.player.player_id))
    });
    let skip = candidates.len().saturating_sub(subs_count);
    let subbed_on: Vec<&TouchSpan> = candidates.iter().skip(skip).copied().collect();

    let subs: Vec<Substitution> = subbed_on
        .iter()
        .zip(subbed_off.iter())
        .filter(|(on, off)| on.player.player_id != off.player.player_id)
        .map(|(on, off)| Substitution {
            sub_on_id: on.player.player_id,
            sub_on_name: abbreviate_name(&on.player.player_name, name_max_len),
            sub_off_id: off.player.player_id,
            sub_off_name: abbreviate_name(&off.player.player_name, name_max_len),
            period: on.first.period,
            minute: on.first.minute,
        })
        .collect();

    debug!(
        "Club {}: {} distinct players, {} substitutions",
        club,
        distinct_players,
        subs.len()
    );
    subs
}

impl LineupProvider for TouchInferredLineup {
    fn starting_eleven(&self, events: &[NormalizedEvent], club: ClubId) -> Vec<LineupEntry> {
        starting_eleven(events, club, self.lineup_name_max_len)
    }

    fn substitutions(&self, events: &[NormalizedEvent], club: ClubId) -> Vec<Substitution> {
        substitutions(events, club, self.name_max_len)
    }
}
