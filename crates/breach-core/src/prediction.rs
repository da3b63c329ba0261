//! Prediction records and their columnar collections.

use breach_macros::Series;

/// Point estimate with its one-sided 95% bounds, all in the equation's unit.
#[derive(Debug, Clone, Copy, PartialEq, Series)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Prediction {
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Prediction {
    /// `false` if any component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

/// One point of a volume sweep.
#[derive(Debug, Clone, Copy, PartialEq, Series)]
#[series(name = "VolumeSweep")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepPoint {
    pub volume_of_water: f64,
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
}
