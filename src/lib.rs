//! # Matchday Stats
//!
//! Football match statistics derived from raw on-pitch event logs.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (events, matches, goals, shots, lineups, etc.)
//! - **calculate**: The aggregation engine turning event logs into statistics
//! - **storage**: Relational match repository (SQLite via sqlx)
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
