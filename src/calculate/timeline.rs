//! Key-events feed: goals, substitutions and cards in match order.

use tracing::debug;

use super::goals::running_score;
use super::normalize::abbreviate_name;
use crate::models::{Goal, KeyEvent, KeyEventIcon, NormalizedEvent, Substitution};

fn goal_annotation(goal: &Goal) -> &'static str {
    if goal.is_own_goal {
        " (OG)"
    } else if goal.is_penalty {
        " (P)"
    } else {
        ""
    }
}

fn substitution_event(sub: &Substitution, is_home: bool) -> KeyEvent {
    KeyEvent {
        player_id: sub.sub_on_id,
        icon: KeyEventIcon::Substitution,
        details_up: sub.sub_on_name.clone(),
        details_down: sub.sub_off_name.clone(),
        period: sub.period,
        minute: sub.minute,
        is_home,
    }
}

/// Merge goals, substitutions and cards into one chronological feed.
///
/// Entries are ordered by period then normalized minute ("45+2" sorts as
/// 47); the sort is stable so same-minute entries keep goal, substitution,
/// card order.
pub fn key_events(
    home_goals: &[Goal],
    away_goals: &[Goal],
    home_subs: &[Substitution],
    away_subs: &[Substitution],
    events: &[NormalizedEvent],
    name_max_len: usize,
) -> Vec<KeyEvent> {
    let mut feed: Vec<KeyEvent> = running_score(home_goals, away_goals)
        .into_iter()
        .map(|scored| KeyEvent {
            player_id: scored.goal.player_id,
            icon: KeyEventIcon::for_goal(scored.goal),
            details_up: abbreviate_name(&scored.goal.player_name, name_max_len),
            details_down: format!(
                "{} - {}{}",
                scored.score.home,
                scored.score.away,
                goal_annotation(scored.goal)
            ),
            period: scored.goal.period,
            minute: scored.goal.minute,
            is_home: scored.is_home,
        })
        .collect();

    feed.extend(home_subs.iter().map(|s| substitution_event(s, true)));
    feed.extend(away_subs.iter().map(|s| substitution_event(s, false)));

    feed.extend(events.iter().filter(|e| e.is_card()).filter_map(|e| {
        let icon = KeyEventIcon::for_card(e.modifier.as_deref()?)?;
        Some(KeyEvent {
            player_id: e.player_id,
            icon,
            details_up: abbreviate_name(&e.player_name, name_max_len),
            details_down: e.action.clone().unwrap_or_default(),
            period: e.period,
            minute: e.minute,
            is_home: e.is_home,
        })
    }));

    feed.sort_by_key(|k| (k.period, k.minute.normalized()));
    debug!("Composed {} key events", feed.len());
    feed
}
