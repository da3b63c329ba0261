//! Empirical embankment dam breach equations.
//!
//! Estimates peak outflow and time to failure of an embankment dam breach
//! from a handful of dimensions and categorical descriptors, using published
//! regression equations in their original and recalibrated forms, together
//! with one-sided 95% confidence bounds from each fit's logged error.
//!
//! ```
//! use breach_core::{BreachEquation, Calibration, DamFailureInput, PeakFlowEquation};
//!
//! let dam = DamFailureInput::new(5.0, 30_000.0)?;
//! let eq = PeakFlowEquation::new("Xu and Zhang (2009)")?;
//! let q = eq.predict(&dam, Calibration::Original);
//! let q_upper = eq.upper_bound_ratio(Calibration::Original) * q;
//! assert!(q_upper > q);
//! # Ok::<(), breach_core::BreachError>(())
//! ```
pub mod bounds;
pub mod constants;
pub mod equation;
pub mod error;
pub mod input;
pub mod prediction;
pub mod quantity;
pub mod registry;

pub use bounds::{BoundSide, Calibration, ErrorStats};
pub use equation::{
    AnyEquation, BreachEquation, BreachWidthEquation, PeakFlowEquation, TimeToFailureEquation,
};
pub use error::{BreachError, Result};
pub use input::{DamFailureInput, DamFailureInputBuilder, DamType, Erodibility, FailureMode};
pub use prediction::{Prediction, PredictionSeries, SweepPoint, VolumeSweep};
pub use quantity::Quantity;
pub use registry::{EquationDefinition, EquationInfo};
