//! Absolute pitch geometry.

use serde::{Deserialize, Serialize};

/// Pitch length in metres.
pub const PITCH_LENGTH: f64 = 105.0;

/// Pitch width in metres.
pub const PITCH_WIDTH: f64 = 68.0;

/// A position on the 105x68 pitch.
///
/// `(-1, -1)` marks a position that could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchPoint {
    pub x: f64,
    pub y: f64,
}

impl PitchPoint {
    pub const UNAVAILABLE: PitchPoint = PitchPoint { x: -1.0, y: -1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_available(&self) -> bool {
        *self != Self::UNAVAILABLE
    }

    /// Euclidean distance rounded to 2 decimals.
    pub fn distance_to(&self, other: &PitchPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        round_to((dx * dx + dy * dy).sqrt(), 2)
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
