use axum::extract::{Path, State};
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::match_report;
use crate::models::{MatchId, MatchStatsView};

/// Full statistics view of one match.
pub async fn match_stats(
    State(state): State<AppState>,
    Path(match_id): Path<i64>,
) -> Result<Json<MatchStatsView>, ApiError> {
    let match_id = MatchId::new(match_id);

    match_report(
        state.store.as_ref(),
        match_id,
        state.lineup.as_ref(),
        &state.display,
    )
    .await?
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("match {}", match_id)))
}
