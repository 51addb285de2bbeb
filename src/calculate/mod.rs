//! Statistics calculation engine.
//!
//! Turns a match's raw event log into display-ready structures:
//! - Match clock, side flags and per-match sequence ([`normalize`])
//! - Pitch coordinate conventions and goal-mouth zones ([`coordinates`])
//! - Goals from failed save attempts ([`goals`])
//! - Starting elevens and substitutions ([`lineup`])
//! - Home/away metric widths and possession ([`metrics`])
//! - Shot map and event maps ([`event_maps`])
//! - The key-events feed ([`timeline`])
//! - Club and country top contributors ([`contributions`])
//!
//! All functions here are pure over their input rows; [`report`] wires them
//! to a [`MatchRepository`](crate::storage::MatchRepository).

pub mod contributions;
pub mod coordinates;
pub mod event_maps;
pub mod goals;
pub mod lineup;
pub mod metrics;
pub mod normalize;
pub mod report;
pub mod timeline;

pub use contributions::top_contributions;
pub use lineup::{LineupProvider, TouchInferredLineup};
pub use report::{build_match_report, match_report};
