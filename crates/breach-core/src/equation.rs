//! Typed access to one quantity's equations.
//!
//! [`PeakFlowEquation`], [`TimeToFailureEquation`] and [`BreachWidthEquation`]
//! bind to a registry entry at construction and share the [`BreachEquation`]
//! interface. [`AnyEquation`] does the same when the quantity is only known at
//! runtime.
//!
//! None of the operations re-check the input: `DamFailureInput` already
//! guarantees positive, finite dimensions.

use tracing::trace;

use crate::bounds::{BoundSide, Calibration};
use crate::constants::{SWEEP_END, SWEEP_GROWTH, SWEEP_START};
use crate::error::Result;
use crate::input::DamFailureInput;
use crate::prediction::{Prediction, PredictionSeries, SweepPoint, VolumeSweep};
use crate::quantity::Quantity;
use crate::registry::{self, EquationDefinition, EquationInfo};

pub trait BreachEquation {
    /// Registry entry this equation is bound to.
    fn definition(&self) -> &'static EquationDefinition;

    fn quantity(&self) -> Quantity {
        self.definition().quantity
    }

    fn units(&self) -> &'static str {
        self.quantity().units()
    }

    fn display_name(&self) -> &'static str {
        self.definition().display_name
    }

    fn description(&self) -> &'static str {
        self.definition().description
    }

    fn info(&self) -> EquationInfo {
        self.definition().info()
    }

    /// Raw formula output in `units()`.
    fn predict(&self, dam: &DamFailureInput, calibration: Calibration) -> f64 {
        let value = self.definition().predict(dam, calibration);
        trace!(
            equation = %self.definition().identifier(),
            %calibration,
            value,
            "prediction"
        );
        value
    }

    /// `10^(-mean ± 1.645·stdev)` for the selected fit.
    fn bound_ratio(&self, calibration: Calibration, side: BoundSide) -> f64 {
        self.definition().stats(calibration).bound_ratio(side)
    }

    fn upper_bound_ratio(&self, calibration: Calibration) -> f64 {
        self.bound_ratio(calibration, BoundSide::Upper)
    }

    fn lower_bound_ratio(&self, calibration: Calibration) -> f64 {
        self.bound_ratio(calibration, BoundSide::Lower)
    }

    /// Bound ratio applied to the point estimate.
    fn bound(&self, dam: &DamFailureInput, calibration: Calibration, side: BoundSide) -> f64 {
        self.bound_ratio(calibration, side) * self.predict(dam, calibration)
    }

    /// Point estimate with both one-sided bounds.
    fn prediction(&self, dam: &DamFailureInput, calibration: Calibration) -> Prediction {
        let variant = self.definition().variant(calibration);
        let estimate = variant.predict(dam);
        Prediction {
            estimate,
            lower: variant.bound_ratio(BoundSide::Lower) * estimate,
            upper: variant.bound_ratio(BoundSide::Upper) * estimate,
        }
    }

    fn predict_many(&self, dams: &[DamFailureInput], calibration: Calibration) -> PredictionSeries {
        dams.iter()
            .map(|dam| self.prediction(dam, calibration))
            .collect()
    }

    /// Predictions over scaled copies of the stored volume, everything else fixed.
    fn volume_sweep(&self, dam: &DamFailureInput, calibration: Calibration) -> Result<VolumeSweep> {
        sweep_factors()
            .map(|factor| {
                let scaled = dam.with_volume_of_water(dam.volume_of_water() * factor)?;
                let p = self.prediction(&scaled, calibration);
                Ok(SweepPoint {
                    volume_of_water: scaled.volume_of_water(),
                    estimate: p.estimate,
                    lower: p.lower,
                    upper: p.upper,
                })
            })
            .collect()
    }
}

/// Volume multipliers of a sweep: 0.1, 0.18, 0.324, ... while below 10.
pub fn sweep_factors() -> impl Iterator<Item = f64> {
    std::iter::successors(Some(SWEEP_START), |f| Some(f * SWEEP_GROWTH))
        .take_while(|f| *f < SWEEP_END)
}

macro_rules! define_equation {
    (
        $(#[$meta:meta])*
        $name:ident => $quantity:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            definition: &'static EquationDefinition,
        }

        impl $name {
            pub const QUANTITY: Quantity = $quantity;

            /// Bind to the entry for a family key (`Xu09`) or display name
            /// (`Xu and Zhang (2009)`). Fails with `NotFound` if the family
            /// has no equation for this quantity.
            pub fn new(name: &str) -> Result<Self> {
                Ok(Self {
                    definition: registry::find(name, Self::QUANTITY)?,
                })
            }

            /// Every registered equation for this quantity.
            pub fn available() -> impl Iterator<Item = Self> {
                registry::catalog(Self::QUANTITY)
                    .iter()
                    .map(|definition| Self { definition })
            }
        }

        impl BreachEquation for $name {
            fn definition(&self) -> &'static EquationDefinition {
                self.definition
            }
        }
    };
}

define_equation! {
    /// Peak breach outflow [m³/s].
    PeakFlowEquation => Quantity::PeakFlow
}

define_equation! {
    /// Time from breach initiation to full breach formation [h].
    TimeToFailureEquation => Quantity::TimeToFailure
}

define_equation! {
    /// Final breach width [m]. No equations are registered yet, so `new`
    /// always fails with `NotFound`.
    BreachWidthEquation => Quantity::BreachWidth
}

/// Equation whose quantity is chosen at runtime.
#[derive(Debug, Clone, Copy)]
pub struct AnyEquation {
    definition: &'static EquationDefinition,
}

impl AnyEquation {
    pub fn new(quantity: Quantity, name: &str) -> Result<Self> {
        Ok(Self {
            definition: registry::find(name, quantity)?,
        })
    }

    /// From a full identifier such as `Fr08-T`.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        Ok(Self {
            definition: registry::lookup(identifier)?,
        })
    }
}

impl BreachEquation for AnyEquation {
    fn definition(&self) -> &'static EquationDefinition {
        self.definition
    }
}
