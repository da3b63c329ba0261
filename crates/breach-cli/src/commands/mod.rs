//! Subcommands and the dam arguments they share.

pub mod catalog;
pub mod predict;
pub mod sweep;

use anyhow::{anyhow, Result};
use clap::Args;
use tracing::debug;

use breach_core::{Calibration, DamFailureInput, DamType, Erodibility, FailureMode};

use crate::format::{parse_number, parse_optional, INPUT_PROBLEM};

/// Dimensions and descriptors of one dam, as typed on the command line.
#[derive(Args, Debug)]
pub struct DamArgs {
    /// Height of water above the breach invert [m]
    #[arg(long = "h-w", default_value = "5.0", allow_hyphen_values = true)]
    pub height_of_water: String,

    /// Volume of water released [m³], thousands separators allowed
    #[arg(long = "v-w", default_value = "30,000", allow_hyphen_values = true)]
    pub volume_of_water: String,

    /// Breach depth [m], defaults to the height of water
    #[arg(long = "h-b", allow_hyphen_values = true)]
    pub breach_depth: Option<String>,

    /// Dam height [m], defaults to the height of water
    #[arg(long = "h-d", allow_hyphen_values = true)]
    pub dam_height: Option<String>,

    /// Average breach width [m], defaults to 2.6 times the dam height
    #[arg(long = "w-avg", allow_hyphen_values = true)]
    pub average_width: Option<String>,

    /// low, medium or high
    #[arg(long, default_value = "medium")]
    pub erodibility: String,

    /// overtopping or piping
    #[arg(long, default_value = "overtopping")]
    pub failure_mode: String,

    /// homogeneous-fill or core-wall
    #[arg(long, default_value = "homogeneous-fill")]
    pub dam_type: String,

    /// Use the recalibrated coefficients and error statistics
    #[arg(long)]
    pub recalibrated: bool,
}

impl DamArgs {
    pub fn calibration(&self) -> Calibration {
        Calibration::from(self.recalibrated)
    }

    /// Build the validated input, or fail with the user-facing input message.
    pub fn to_input(&self) -> Result<DamFailureInput> {
        let erodibility: Erodibility = self.erodibility.parse()?;
        let failure_mode: FailureMode = self.failure_mode.parse()?;
        let dam_type: DamType = self.dam_type.parse()?;

        let (Some(h_w), Some(v_w)) = (
            parse_number(&self.height_of_water),
            parse_number(&self.volume_of_water),
        ) else {
            return Err(anyhow!(INPUT_PROBLEM));
        };

        DamFailureInput::builder(h_w, v_w)
            .breach_depth(parse_optional(self.breach_depth.as_deref()))
            .dam_height(parse_optional(self.dam_height.as_deref()))
            .average_width(parse_optional(self.average_width.as_deref()))
            .erodibility(erodibility)
            .failure_mode(failure_mode)
            .dam_type(dam_type)
            .build()
            .map_err(|err| {
                debug!(%err, "rejected input");
                anyhow!(INPUT_PROBLEM)
            })
    }
}
