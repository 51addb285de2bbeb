use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::contributions::{valid_limit, MAX_LIMIT};
use crate::calculate::top_contributions;
use crate::models::{ClubId, Contribution, ContributionScope, CountryId};

#[derive(Debug, Deserialize)]
pub struct ContributorParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ContributorsResponse {
    pub scope: ContributionScope,
    pub contributors: Vec<Contribution>,
}

async fn ranking(
    state: &AppState,
    scope: ContributionScope,
    params: ContributorParams,
) -> Result<Json<ContributorsResponse>, ApiError> {
    let limit = params.limit.unwrap_or(state.display.top_contributors);
    if !valid_limit(limit) {
        return Err(ApiError::BadRequest(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }

    let events = state.store.scope_events(scope).await?;
    let contributors = top_contributions(scope, events, limit);
    info!("Ranked {} contributors for {}", contributors.len(), scope);

    Ok(Json(ContributorsResponse {
        scope,
        contributors,
    }))
}

pub async fn club_contributors(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Query(params): Query<ContributorParams>,
) -> Result<Json<ContributorsResponse>, ApiError> {
    ranking(&state, ContributionScope::Club(ClubId::new(club_id)), params).await
}

pub async fn country_contributors(
    State(state): State<AppState>,
    Path(country_id): Path<i64>,
    Query(params): Query<ContributorParams>,
) -> Result<Json<ContributorsResponse>, ApiError> {
    ranking(
        &state,
        ContributionScope::Country(CountryId::new(country_id)),
        params,
    )
    .await
}
