//! The three breach characteristics an equation can predict.

use std::fmt;
use std::str::FromStr;

use crate::constants::{UNITS_BREACH_WIDTH, UNITS_PEAK_FLOW, UNITS_TIME_TO_FAILURE};
use crate::error::BreachError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Quantity {
    PeakFlow,
    TimeToFailure,
    BreachWidth,
}

impl Quantity {
    pub const ALL: [Quantity; 3] = [
        Quantity::PeakFlow,
        Quantity::TimeToFailure,
        Quantity::BreachWidth,
    ];

    /// Identifier suffix, as in `Xu09-Q`.
    pub fn suffix(self) -> &'static str {
        match self {
            Quantity::PeakFlow => "Q",
            Quantity::TimeToFailure => "T",
            Quantity::BreachWidth => "B",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.suffix() == suffix)
    }

    /// Unit of the raw formula output.
    pub fn units(self) -> &'static str {
        match self {
            Quantity::PeakFlow => UNITS_PEAK_FLOW,
            Quantity::TimeToFailure => UNITS_TIME_TO_FAILURE,
            Quantity::BreachWidth => UNITS_BREACH_WIDTH,
        }
    }

    /// Machine name, also accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Quantity::PeakFlow => "peak_flow",
            Quantity::TimeToFailure => "time_to_failure",
            Quantity::BreachWidth => "breach_width",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Quantity::PeakFlow => "peak flow",
            Quantity::TimeToFailure => "time to failure",
            Quantity::BreachWidth => "breach width",
        };
        f.write_str(label)
    }
}

impl FromStr for Quantity {
    type Err = BreachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|q| q.as_str() == s)
            .ok_or_else(|| BreachError::UnknownCategory {
                kind: "quantity",
                value: s.to_string(),
                expected: &["peak_flow", "time_to_failure", "breach_width"],
            })
    }
}
