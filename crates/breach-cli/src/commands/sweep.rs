//! Peak flow against reservoir volume.

use anyhow::Result;
use clap::Args;
use tracing::info;

use breach_core::{BreachEquation, PeakFlowEquation};

use super::DamArgs;
use crate::format::{flow, group_thousands, round_significant, NOT_AVAILABLE};

#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub dam: DamArgs,

    /// Peak flow equation, by key (Fr95) or display name
    #[arg(long, default_value = "Froehlich (1995a)")]
    pub peak_flow: String,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SweepArgs) -> Result<()> {
    let dam = args.dam.to_input()?;
    let calibration = args.dam.calibration();

    let eq = match PeakFlowEquation::new(&args.peak_flow) {
        Ok(eq) => eq,
        Err(err) if err.is_not_found() => {
            println!("Peak flow: {}", NOT_AVAILABLE);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let sweep = eq.volume_sweep(&dam, calibration)?;
    info!(equation = eq.display_name(), points = sweep.len(), "volume sweep");

    if args.json {
        let points: Vec<_> = sweep.iter().collect();
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("{} [{}]", eq.display_name(), eq.units());
    println!("{:>14} {:>12} {:>12}", "volume [m³]", "estimate", "upper");
    for point in sweep.iter() {
        let estimate = flow(point.estimate).unwrap_or_else(|| "-".to_string());
        let upper = flow(point.upper).unwrap_or_else(|| "-".to_string());
        println!(
            "{:>14} {:>12} {:>12}",
            group_thousands(round_significant(point.volume_of_water, 3)),
            estimate,
            upper
        );
    }
    Ok(())
}
