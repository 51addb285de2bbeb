//! Core data models for the match statistics engine.

mod event;
mod football_match;
mod ids;
mod lineup;
mod period;
mod pitch;
mod player;
mod shot;
mod stats;
mod timeline;

pub use event::*;
pub use football_match::*;
pub use ids::*;
pub use lineup::*;
pub use period::*;
pub use pitch::*;
pub use player::*;
pub use shot::*;
pub use stats::*;
pub use timeline::*;
