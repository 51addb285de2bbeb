//! Match statistics view assembly.

use tracing::info;

use super::event_maps::{event_markers, shot_map, shot_positions, MarkerCategory};
use super::goals::match_goals;
use super::lineup::LineupProvider;
use super::metrics::metric_table;
use super::normalize::normalize_events;
use super::timeline::key_events;
use crate::config::DisplayConfig;
use crate::models::{Goal, MatchEvent, MatchId, MatchInfo, MatchStatsView};
use crate::storage::{MatchRepository, StorageError};

/// Build the full statistics view of one match from its rows.
///
/// Every derivation is total, so the view is either complete or, when the
/// rows could not be read, not built at all.
pub fn build_match_report(
    info: MatchInfo,
    events: Vec<MatchEvent>,
    lineup: &dyn LineupProvider,
    display: &DisplayConfig,
) -> MatchStatsView {
    let events = normalize_events(&info, events);
    let name_len = display.name_max_len;

    let (home_goals, away_goals) = match_goals(&info, &events);
    let all_goals: Vec<Goal> = home_goals.iter().chain(&away_goals).cloned().collect();

    let home_subs = lineup.substitutions(&events, info.home_club_id);
    let away_subs = lineup.substitutions(&events, info.away_club_id);
    let timeline = key_events(
        &home_goals,
        &away_goals,
        &home_subs,
        &away_subs,
        &events,
        name_len,
    );

    let metrics = metric_table(&events);
    let (home_shot_positions, away_shot_positions) = shot_positions(&events);
    let markers = |category| event_markers(&events, category, name_len);

    MatchStatsView {
        summary_widths: metrics.summary,
        shot_widths: metrics.shots,
        pass_widths: metrics.passes,
        defense_widths: metrics.defense,
        home_xi: lineup.starting_eleven(&events, info.home_club_id),
        away_xi: lineup.starting_eleven(&events, info.away_club_id),
        home_subs,
        away_subs,
        key_events: timeline,
        shots: shot_map(&events, &all_goals, name_len),
        passes: markers(MarkerCategory::Passes),
        interceptions: markers(MarkerCategory::Interceptions),
        offsides: markers(MarkerCategory::Offsides),
        duels: markers(MarkerCategory::Duels),
        fouls: markers(MarkerCategory::Fouls),
        freekicks: markers(MarkerCategory::FreeKicks),
        saves: markers(MarkerCategory::Saves),
        home_shot_positions,
        away_shot_positions,
        home_goals,
        away_goals,
        match_info: info,
    }
}

/// Load a match and build its statistics view; `Ok(None)` if the match does not exist.
pub async fn match_report(
    store: &dyn MatchRepository,
    match_id: MatchId,
    lineup: &dyn LineupProvider,
    display: &DisplayConfig,
) -> Result<Option<MatchStatsView>, StorageError> {
    let (info, events) = tokio::try_join!(store.match_info(match_id), store.match_events(match_id))?;

    let Some(info) = info else {
        info!("Match {} not found", match_id);
        return Ok(None);
    };

    let event_count = events.len();
    let view = build_match_report(info, events, lineup, display);
    info!(
        "Built report for match {} from {} events: {} - {}",
        match_id,
        event_count,
        view.home_goals.len(),
        view.away_goals.len()
    );
    Ok(Some(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::lineup::TouchInferredLineup;
    use crate::models::test_support::*;
    use crate::models::{names, ContributionScope, KeyEventIcon, MatchPeriod, ShotResult};
    use async_trait::async_trait;

    fn sample_events() -> Vec<MatchEvent> {
        vec![
            event(1, HOME, 5, MatchPeriod::FirstHalf, 10.0),
            with_success(
                named(
                    event(2, AWAY, 1, MatchPeriod::FirstHalf, 600.0),
                    names::SAVE_ATTEMPT,
                    None,
                ),
                Some(false),
            ),
            with_modifier(
                named(
                    event(3, HOME, 9, MatchPeriod::FirstHalf, 601.0),
                    names::SHOT,
                    Some("Shot"),
                ),
                "gtr",
            ),
            with_modifier(
                named(
                    event(4, AWAY, 20, MatchPeriod::SecondHalf, 100.0),
                    names::FOUL,
                    Some("Foul"),
                ),
                "yellow_card",
            ),
        ]
    }

    #[test]
    fn test_build_match_report() {
        let view = build_match_report(
            match_info(HOME, AWAY),
            sample_events(),
            &TouchInferredLineup::default(),
            &DisplayConfig::default(),
        );

        assert_eq!(view.summary_widths.len(), 13);
        assert_eq!(view.shot_widths.len(), 4);
        assert_eq!(view.pass_widths.len(), 3);
        assert_eq!(view.home_goals.len(), 1);
        assert!(view.away_goals.is_empty());
        assert_eq!(view.shots.len(), 1);
        assert_eq!(view.shots[0].result, ShotResult::Goal);
        assert_eq!(view.home_xi.len(), 2);
        assert_eq!(view.away_xi.len(), 1);
        assert_eq!(view.passes.len(), 1);
        assert_eq!(view.fouls.len(), 1);
        assert_eq!(view.saves.len(), 1);
        assert_eq!(view.home_shot_positions.len(), 1);

        let icons: Vec<KeyEventIcon> = view.key_events.iter().map(|k| k.icon).collect();
        assert_eq!(icons, vec![KeyEventIcon::Goal, KeyEventIcon::YellowCard]);
    }

    #[test]
    fn test_view_serialization_keys() {
        let view = build_match_report(
            match_info(HOME, AWAY),
            sample_events(),
            &TouchInferredLineup::default(),
            &DisplayConfig::default(),
        );

        let json = serde_json::to_value(&view).unwrap();
        for key in [
            "match_info",
            "summary_widths",
            "shot_widths",
            "pass_widths",
            "defense_widths",
            "home_goals",
            "away_goals",
            "home_XI",
            "away_XI",
            "home_subs",
            "away_subs",
            "key_events",
            "shots",
            "passes",
            "interceptions",
            "offsides",
            "duels",
            "fouls",
            "freekicks",
            "saves",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
    }

    struct FixedStore {
        found: bool,
    }

    #[async_trait]
    impl MatchRepository for FixedStore {
        async fn match_info(&self, _: MatchId) -> Result<Option<MatchInfo>, StorageError> {
            Ok(self.found.then(|| match_info(HOME, AWAY)))
        }

        async fn match_events(&self, _: MatchId) -> Result<Vec<MatchEvent>, StorageError> {
            Ok(sample_events())
        }

        async fn scope_events(
            &self,
            _: ContributionScope,
        ) -> Result<Vec<MatchEvent>, StorageError> {
            Ok(Vec::new())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl MatchRepository for FailingStore {
        async fn match_info(&self, _: MatchId) -> Result<Option<MatchInfo>, StorageError> {
            Ok(Some(match_info(HOME, AWAY)))
        }

        async fn match_events(&self, _: MatchId) -> Result<Vec<MatchEvent>, StorageError> {
            Err(StorageError::InvalidRow("broken".to_string()))
        }

        async fn scope_events(
            &self,
            _: ContributionScope,
        ) -> Result<Vec<MatchEvent>, StorageError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_match_report_found() {
        let view = match_report(
            &FixedStore { found: true },
            MatchId::new(100),
            &TouchInferredLineup::default(),
            &DisplayConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(view.unwrap().home_goals.len(), 1);
    }

    #[tokio::test]
    async fn test_match_report_not_found() {
        let view = match_report(
            &FixedStore { found: false },
            MatchId::new(100),
            &TouchInferredLineup::default(),
            &DisplayConfig::default(),
        )
        .await
        .unwrap();

        assert!(view.is_none());
    }

    #[tokio::test]
    async fn test_match_report_storage_failure_aborts() {
        let result = match_report(
            &FailingStore,
            MatchId::new(100),
            &TouchInferredLineup::default(),
            &DisplayConfig::default(),
        )
        .await;

        assert!(matches!(result, Err(StorageError::InvalidRow(_))));
    }
}
