//! The command line interface for the program.
use crate::demand::DemandMode;
use crate::exclusion::Exclusion;
use crate::log;
use crate::output::{create_output_directory, get_output_dir, preview, write_results};
use crate::pipeline::{self, PipelineOptions};
use crate::settings::Settings;
use crate::supply::SupplyMode;
use ::log::info;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// The command line interface for the program.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Commands,
}

/// Options for the run command
#[derive(Args)]
pub struct RunOpts {
    /// Which supply sources contribute to the curve
    #[arg(long, value_enum, default_value_t = SupplyMode::Total)]
    pub supply_mode: SupplyMode,
    /// Exclusion preset to apply (none if omitted)
    #[arg(long, value_enum)]
    pub exclude: Option<Exclusion>,
    /// Which demand figure to intersect the curve with
    #[arg(long, value_enum, default_value_t = DemandMode::Utility)]
    pub demand_mode: DemandMode,
    /// Demand value in MW, overriding the workbook's demand grid
    #[arg(long)]
    pub demand: Option<f64>,
    /// Directory for output files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run the curve analysis for a workbook.
    Run {
        /// Path to the source workbook (xlsx/xlsm).
        workbook: PathBuf,
        /// Other run options
        #[command(flatten)]
        opts: RunOpts,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Run { workbook, opts } => handle_run_command(&workbook, &opts, None),
        }
    }
}

/// Parse CLI arguments and start the program
pub fn run_cli() -> Result<()> {
    Cli::parse().command.execute()
}

/// Handle the `run` command.
pub fn handle_run_command(
    workbook: &Path,
    opts: &RunOpts,
    settings: Option<Settings>,
) -> Result<()> {
    // Load program settings, if not provided
    let settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    log::init(Some(settings.log_level.as_str())).context("Failed to initialise logging.")?;

    let options = PipelineOptions {
        supply_mode: opts.supply_mode,
        exclusion: opts.exclude,
        demand_mode: opts.demand_mode,
        demand_override: opts.demand,
    };
    let result = pipeline::run(workbook, &options)?;

    // Get path to output folder
    let pathbuf: PathBuf;
    let output_path = if let Some(p) = opts.output_dir.as_deref() {
        p
    } else {
        pathbuf = get_output_dir(workbook)?;
        &pathbuf
    };
    create_output_directory(output_path).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_path.display()
        )
    })?;
    write_results(output_path, &result)?;
    info!("Results written to {}", output_path.display());

    println!("{}", preview(&result.curve, settings.preview_rows));

    Ok(())
}
