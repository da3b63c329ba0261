//! Listing of the equation registry.

use anyhow::Result;
use clap::Args;

use breach_core::{registry, EquationInfo, Quantity};

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Only this quantity (peak_flow, time_to_failure, breach_width)
    #[arg(long)]
    pub quantity: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Include the equation descriptions
    #[arg(long)]
    pub describe: bool,
}

pub fn execute(args: CatalogArgs) -> Result<()> {
    let quantities = match &args.quantity {
        Some(name) => vec![name.parse::<Quantity>()?],
        None => Quantity::ALL.to_vec(),
    };

    let entries: Vec<EquationInfo> = quantities
        .iter()
        .flat_map(|q| registry::catalog(*q).iter().map(|def| def.info()))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for quantity in quantities {
        println!("=== {} [{}] ===", quantity, quantity.units());
        let rows: Vec<_> = entries.iter().filter(|e| e.quantity == quantity).collect();
        if rows.is_empty() {
            println!("  (none)");
        }
        for info in rows {
            println!(
                "  {:<8} {:<28} mean {:>8.4}  stdev {:.4}  | recal mean {:>8.4}  stdev {:.4}",
                info.identifier,
                info.display_name,
                info.original.mean,
                info.original.stdev,
                info.recalibrated.mean,
                info.recalibrated.stdev,
            );
            if args.describe {
                println!("      {}", info.description);
            }
        }
        println!();
    }
    Ok(())
}
