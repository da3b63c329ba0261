//! Command-line front end for the dam breach equations.
//!
//! Parses dimensions the way a person types them (`30,000`), applies the
//! defaulting rules through the core builder and prints rounded results.

mod commands;
mod format;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Empirical embankment dam breach estimates
#[derive(Parser)]
#[command(name = "breach")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Peak flow and time to failure of an embankment dam breach", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate peak flow and time to failure for one dam
    Predict(commands::predict::PredictArgs),
    /// List the registered equations
    Catalog(commands::catalog::CatalogArgs),
    /// Peak flow over a range of reservoir volumes
    Sweep(commands::sweep::SweepArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Predict(args) => commands::predict::execute(args),
        Commands::Catalog(args) => commands::catalog::execute(args),
        Commands::Sweep(args) => commands::sweep::execute(args),
    }
}
