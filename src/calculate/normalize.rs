//! Event normalization: match clock, side flag and per-match sequence.

use std::collections::BTreeMap;

use crate::models::{MatchEvent, MatchId, MatchInfo, MatchMinute, MatchPeriod, NormalizedEvent};

/// Default display-name length before abbreviation.
pub const NAME_MAX_LEN: usize = 18;

/// Display-name length used in lineup listings.
pub const LINEUP_NAME_MAX_LEN: usize = 15;

/// Convert a period-relative second into a match-clock minute.
///
/// Minutes past 45 in the first half and past 90 in the second half are
/// reported as stoppage time ("45+1", "90+3").
pub fn calculate_minute(period: MatchPeriod, event_second: f64) -> MatchMinute {
    let elapsed = (event_second.max(0.0) / 60.0).ceil() as u32;
    let minute = elapsed + period.offset_minutes();
    let end = period.regulation_end();

    if minute > end {
        MatchMinute::with_stoppage(end, minute - end)
    } else {
        MatchMinute::regular(minute)
    }
}

/// Shorten a long multi-word name to "F. Last".
pub fn abbreviate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        return name.to_string();
    }

    let tokens: Vec<&str> = name.split_whitespace().collect();
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) if tokens.len() > 1 => {
            let initial: String = first.chars().take(1).collect();
            format!("{}. {}", initial, last)
        }
        _ => name.to_string(),
    }
}

/// Annotate a match's events with minute, home flag and sequence number.
///
/// Events belonging to other matches are dropped. The result is ordered by
/// event id and `sequence` is the position in that order.
pub fn normalize_events(info: &MatchInfo, events: Vec<MatchEvent>) -> Vec<NormalizedEvent> {
    let mut events: Vec<MatchEvent> = events
        .into_iter()
        .filter(|e| e.match_id == info.match_id)
        .collect();
    events.sort_by_key(|e| e.id);

    events
        .into_iter()
        .enumerate()
        .map(|(sequence, event)| NormalizedEvent {
            sequence,
            minute: calculate_minute(event.period, event.second),
            is_home: info.is_home(event.club_id),
            event,
        })
        .collect()
}

/// Group events of several matches, each group in sequence order.
///
/// Side flags are not resolved here (`is_home` is always false); use
/// [`normalize_events`] when the match record is at hand.
pub fn sequence_by_match(events: Vec<MatchEvent>) -> BTreeMap<MatchId, Vec<NormalizedEvent>> {
    let mut grouped: BTreeMap<MatchId, Vec<MatchEvent>> = BTreeMap::new();
    for event in events {
        grouped.entry(event.match_id).or_default().push(event);
    }

    grouped
        .into_iter()
        .map(|(match_id, mut events)| {
            events.sort_by_key(|e| e.id);
            let sequenced = events
                .into_iter()
                .enumerate()
                .map(|(sequence, event)| NormalizedEvent {
                    sequence,
                    minute: calculate_minute(event.period, event.second),
                    is_home: false,
                    event,
                })
                .collect();
            (match_id, sequenced)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::*;
    use crate::models::EventId;

    #[test]
    fn test_minute_first_half_stoppage() {
        assert_eq!(calculate_minute(MatchPeriod::FirstHalf, 2730.0).to_string(), "45+1");
    }

    #[test]
    fn test_minute_second_half_offset() {
        assert_eq!(
            calculate_minute(MatchPeriod::SecondHalf, 60.0),
            MatchMinute::regular(46)
        );
    }

    #[test]
    fn test_minute_second_half_stoppage() {
        assert_eq!(calculate_minute(MatchPeriod::SecondHalf, 2760.0).to_string(), "90+1");
    }

    #[test]
    fn test_minute_boundaries() {
        assert_eq!(calculate_minute(MatchPeriod::FirstHalf, 0.0), MatchMinute::regular(0));
        assert_eq!(calculate_minute(MatchPeriod::FirstHalf, 0.4), MatchMinute::regular(1));
        assert_eq!(calculate_minute(MatchPeriod::FirstHalf, 2700.0), MatchMinute::regular(45));
        assert_eq!(
            calculate_minute(MatchPeriod::SecondHalf, 2700.0),
            MatchMinute::regular(90)
        );
    }

    #[test]
    fn test_abbreviate_long_name() {
        assert_eq!(
            abbreviate_name("Cristiano Ronaldo dos Santos Aveiro", NAME_MAX_LEN),
            "C. Aveiro"
        );
    }

    #[test]
    fn test_abbreviate_keeps_short_names() {
        assert_eq!(abbreviate_name("Pelé", NAME_MAX_LEN), "Pelé");
        assert_eq!(abbreviate_name("Harry Kane", NAME_MAX_LEN), "Harry Kane");
    }

    #[test]
    fn test_abbreviate_single_long_token() {
        let name = "Abcdefghijklmnopqrstuvwxyz";
        assert_eq!(abbreviate_name(name, NAME_MAX_LEN), name);
    }

    #[test]
    fn test_abbreviate_lineup_threshold() {
        // 16 characters: kept at 18, shortened at 15
        let name = "Kevin De Bruyne!";
        assert_eq!(abbreviate_name(name, NAME_MAX_LEN), name);
        assert_eq!(abbreviate_name(name, LINEUP_NAME_MAX_LEN), "K. Bruyne!");
    }

    #[test]
    fn test_normalize_orders_and_sequences() {
        let info = match_info(HOME, AWAY);
        let events = vec![
            event(12, AWAY, 20, MatchPeriod::FirstHalf, 100.0),
            event(10, HOME, 5, MatchPeriod::FirstHalf, 10.0),
            event(11, HOME, 6, MatchPeriod::SecondHalf, 2760.0),
        ];

        let normalized = normalize_events(&info, events);

        let ids: Vec<EventId> = normalized.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EventId::new(10), EventId::new(11), EventId::new(12)]);
        assert_eq!(normalized[0].sequence, 0);
        assert_eq!(normalized[2].sequence, 2);
        assert!(normalized[0].is_home);
        assert!(!normalized[2].is_home);
        assert_eq!(normalized[1].minute.to_string(), "90+1");
    }

    #[test]
    fn test_normalize_drops_other_matches() {
        let info = match_info(HOME, AWAY);
        let mut foreign = event(1, HOME, 5, MatchPeriod::FirstHalf, 10.0);
        foreign.match_id = MatchId::new(999);

        assert!(normalize_events(&info, vec![foreign]).is_empty());
    }

    #[test]
    fn test_sequence_by_match() {
        let mut other = event(3, HOME, 5, MatchPeriod::FirstHalf, 10.0);
        other.match_id = MatchId::new(7);
        let events = vec![
            event(9, HOME, 5, MatchPeriod::FirstHalf, 10.0),
            other,
            event(4, AWAY, 20, MatchPeriod::FirstHalf, 20.0),
        ];

        let grouped = sequence_by_match(events);

        assert_eq!(grouped.len(), 2);
        let main: Vec<(usize, EventId)> = grouped[&MatchId::new(100)]
            .iter()
            .map(|e| (e.sequence, e.id))
            .collect();
        assert_eq!(main, vec![(0, EventId::new(4)), (1, EventId::new(9))]);
        assert_eq!(grouped[&MatchId::new(7)][0].sequence, 0);
    }
}
