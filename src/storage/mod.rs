//! Relational storage of matches and their event logs.
//!
//! The engine only reads through [`MatchRepository`]; [`SqlStore`] is the
//! sqlx implementation used by the server and the CLI.

mod sql;

pub use sql::SqlStore;

#[cfg(test)]
pub(crate) use sql::test_data;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ContributionScope, MatchEvent, MatchId, MatchInfo};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid row: {0}")]
    InvalidRow(String),
}

/// Read access to matches and their events.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Header of one match, `None` if it does not exist.
    async fn match_info(&self, match_id: MatchId) -> Result<Option<MatchInfo>, StorageError>;

    /// Events of one match ordered by event id.
    async fn match_events(&self, match_id: MatchId) -> Result<Vec<MatchEvent>, StorageError>;

    /// Every event of every match the scope took part in, ordered by match then event id.
    async fn scope_events(&self, scope: ContributionScope)
        -> Result<Vec<MatchEvent>, StorageError>;
}
