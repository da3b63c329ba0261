//! Prediction-error statistics and one-sided confidence bound ratios.
//!
//! Each equation carries the mean and standard deviation of log10 of its
//! predicted/observed ratio. The bound on the *observed* value therefore uses
//! the negated mean:
//!
//! ```text
//! upper = 10^(-mean + z·stdev)
//! lower = 10^(-mean - z·stdev)
//! ```
//!
//! with z = 1.645 (one-sided 95%).

use std::fmt;

use crate::constants::Z_95_ONE_SIDED;

/// Which side of the one-sided interval to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundSide {
    Upper,
    Lower,
}

impl fmt::Display for BoundSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundSide::Upper => f.write_str("upper"),
            BoundSide::Lower => f.write_str("lower"),
        }
    }
}

/// Selects the published or the recalibrated coefficient set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Calibration {
    #[default]
    Original,
    Recalibrated,
}

impl Calibration {
    pub fn is_recalibrated(self) -> bool {
        self == Calibration::Recalibrated
    }
}

impl From<bool> for Calibration {
    /// `true` selects the recalibrated set.
    fn from(use_recalibrated: bool) -> Self {
        if use_recalibrated {
            Calibration::Recalibrated
        } else {
            Calibration::Original
        }
    }
}

impl fmt::Display for Calibration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calibration::Original => f.write_str("original"),
            Calibration::Recalibrated => f.write_str("recalibrated"),
        }
    }
}

/// log10 prediction-ratio error distribution of one fit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorStats {
    pub mean: f64,
    pub stdev: f64,
}

impl ErrorStats {
    pub const fn new(mean: f64, stdev: f64) -> Self {
        Self { mean, stdev }
    }

    /// Multiplier that turns a point estimate into the requested bound.
    pub fn bound_ratio(self, side: BoundSide) -> f64 {
        let spread = Z_95_ONE_SIDED * self.stdev;
        let exponent = match side {
            BoundSide::Upper => -self.mean + spread,
            BoundSide::Lower => -self.mean - spread,
        };
        10f64.powf(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn froehlich_1995a_bounds() {
        let stats = ErrorStats::new(0.2558, 0.4828);
        let upper = stats.bound_ratio(BoundSide::Upper);
        let lower = stats.bound_ratio(BoundSide::Lower);
        assert_relative_eq!(upper, 10f64.powf(-0.2558 + 1.645 * 0.4828), epsilon = 1e-12);
        assert_relative_eq!(lower, 10f64.powf(-0.2558 - 1.645 * 0.4828), epsilon = 1e-12);
        assert_relative_eq!(upper, 3.454665476695877, max_relative = 1e-9);
        assert_relative_eq!(lower, 0.08912386251320553, max_relative = 1e-9);
        assert!(upper > 1.0 && lower < 1.0);
    }

    #[test]
    fn mean_is_negated() {
        // A fit that over-predicts (positive mean) pulls both bounds down.
        let stats = ErrorStats::new(0.5, 0.0);
        assert_relative_eq!(stats.bound_ratio(BoundSide::Upper), 10f64.powf(-0.5));
        assert_relative_eq!(stats.bound_ratio(BoundSide::Lower), 10f64.powf(-0.5));
    }

    #[test]
    fn zero_error_gives_unit_ratio() {
        let stats = ErrorStats::new(0.0, 0.0);
        assert_eq!(stats.bound_ratio(BoundSide::Upper), 1.0);
        assert_eq!(stats.bound_ratio(BoundSide::Lower), 1.0);
    }

    #[test]
    fn upper_not_below_lower() {
        for (mean, stdev) in [(0.2558, 0.4828), (-0.0831, 0.438), (0.1088, 1.8251)] {
            let stats = ErrorStats::new(mean, stdev);
            assert!(stats.bound_ratio(BoundSide::Upper) >= stats.bound_ratio(BoundSide::Lower));
        }
    }

    #[test]
    fn calibration_from_flag() {
        assert_eq!(Calibration::from(true), Calibration::Recalibrated);
        assert_eq!(Calibration::from(false), Calibration::Original);
        assert!(!Calibration::default().is_recalibrated());
    }
}
