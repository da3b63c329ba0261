//! Point estimates with their one-sided 95% bounds.

use anyhow::Result;
use clap::Args;
use tracing::info;

use breach_core::{
    BreachEquation, Calibration, DamFailureInput, PeakFlowEquation,
    TimeToFailureEquation,
};

use super::DamArgs;
use crate::format::{duration, flow, round_significant, NOT_AVAILABLE};

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub dam: DamArgs,

    /// Peak flow equation, by key (Fr95) or display name
    #[arg(long, default_value = "Froehlich (1995a)")]
    pub peak_flow: String,

    /// Time to failure equation, by key (Fr95) or display name
    #[arg(long, default_value = "Froehlich (1995b)")]
    pub time_to_failure: String,
}

pub fn execute(args: PredictArgs) -> Result<()> {
    let dam = args.dam.to_input()?;
    let calibration = args.dam.calibration();
    info!(?dam, %calibration, "predicting");

    println!("{}", peak_flow_report(&args.peak_flow, &dam, calibration)?);
    println!("{}", time_to_failure_report(&args.time_to_failure, &dam, calibration)?);
    Ok(())
}

fn peak_flow_report(name: &str, dam: &DamFailureInput, calibration: Calibration) -> Result<String> {
    let eq = match PeakFlowEquation::new(name) {
        Ok(eq) => eq,
        Err(err) if err.is_not_found() => return Ok(format!("Peak flow: {}", NOT_AVAILABLE)),
        Err(err) => return Err(err.into()),
    };
    let p = eq.prediction(dam, calibration);
    let text = match (flow(p.estimate), flow(p.upper)) {
        (Some(estimate), Some(upper)) => format!(
            "The estimated peak flow is {estimate} {units},\n\
             with 95% confidence that the true peak flow is less than {upper} {units}.",
            units = eq.units()
        ),
        _ => format!("Peak flow: {}", NOT_AVAILABLE),
    };
    Ok(text)
}

fn time_to_failure_report(
    name: &str,
    dam: &DamFailureInput,
    calibration: Calibration,
) -> Result<String> {
    let eq = match TimeToFailureEquation::new(name) {
        Ok(eq) => eq,
        Err(err) if err.is_not_found() => {
            return Ok(format!("Time to failure: {}", NOT_AVAILABLE))
        }
        Err(err) => return Err(err.into()),
    };
    let p = eq.prediction(dam, calibration);
    // bound goes through two significant figures before the duration rounding
    let text = match (duration(p.estimate), duration(round_significant(p.lower, 2))) {
        (Some(estimate), Some(lower)) => format!(
            "The estimated time to failure is {estimate},\n\
             with 95% confidence that the true time to failure is larger than {lower}."
        ),
        _ => format!("Time to failure: {}", NOT_AVAILABLE),
    };
    Ok(text)
}
