//! fsm_modal_analysis - command line entry point
//!
//! Visualization and modal analysis of the parametric model of buckling and
//! free vibration in prismatic shell structures, as computed by the
//! fsm_eigenvalue project.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fsm_modal_analysis::render::colormap;
use fsm_modal_analysis::{analyze_model, FilterCriteria, PlotConfig};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// File storing the computed parametric model
    model_file: PathBuf,

    /// Store the modal analysis report to the selected FILENAME,
    /// uses '<model_file>.pdf' by default
    #[arg(short = 'r', long, value_name = "FILENAME")]
    report_file: Option<PathBuf>,

    /// If specified, clip the minimum strip length [mm] to VAL
    #[arg(long, value_name = "VAL")]
    a_min: Option<f64>,

    /// If specified, clip the maximum strip length [mm] to VAL
    #[arg(long, value_name = "VAL")]
    a_max: Option<f64>,

    /// If specified, clip the minimum base strip thickness [mm] to VAL
    #[arg(long, value_name = "VAL")]
    t_b_min: Option<f64>,

    /// If specified, clip the maximum base strip thickness [mm] to VAL
    #[arg(long, value_name = "VAL")]
    t_b_max: Option<f64>,

    /// Plot figures using the selected colormap
    #[arg(short = 'c', long, value_name = "CMAP", default_value = colormap::DEFAULT_CMAP)]
    cmap: String,

    /// Be quiet, show only warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Be very verbose, show debug information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let config = PlotConfig::with_colormap(&cli.cmap)?;
    let report_file = cli
        .report_file
        .clone()
        .unwrap_or_else(|| cli.model_file.with_extension("pdf"));
    let criteria = FilterCriteria {
        a_min: cli.a_min,
        a_max: cli.a_max,
        t_b_min: cli.t_b_min,
        t_b_max: cli.t_b_max,
    };

    analyze_model(&cli.model_file, &report_file, &criteria, &config)?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}
