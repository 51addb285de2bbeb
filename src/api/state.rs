use std::sync::Arc;

use crate::calculate::LineupProvider;
use crate::config::DisplayConfig;
use crate::storage::MatchRepository;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MatchRepository>,
    pub lineup: Arc<dyn LineupProvider>,
    pub display: Arc<DisplayConfig>,
}
