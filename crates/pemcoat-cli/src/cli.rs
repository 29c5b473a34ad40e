use clap::{Args, Parser, Subcommand};
use pemcoat::collector::pipeline::DEFAULT_STABILITY_THRESHOLD;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "pemcoat CLI - Curate literature performance data and screen coating candidates for PEM electrolyzer bipolar plates.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query, benchmark, and analyze the literature database of coating performance.
    Literature(LiteratureArgs),
    /// Collect coating candidates from the Materials Project and classify them by stability.
    Collect(CollectArgs),
}

/// Arguments for the `literature` subcommand.
#[derive(Args, Debug)]
pub struct LiteratureArgs {
    /// Load literature entries from a CSV file before analysis.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Include the curated set of key reference papers.
    #[arg(long)]
    pub seed: bool,

    /// Write the (filtered) table to this CSV path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- Query Filters ---
    /// Filter by coating material (case-insensitive substring).
    #[arg(long, value_name = "TEXT")]
    pub material: Option<String>,

    /// Filter by substrate (case-insensitive substring).
    #[arg(long, value_name = "TEXT")]
    pub substrate: Option<String>,

    /// Minimum test duration in hours.
    #[arg(long, value_name = "HOURS")]
    pub min_test_duration: Option<f64>,

    /// Maximum corrosion current density in μA/cm².
    #[arg(long, value_name = "UA_CM2")]
    pub max_corrosion_current: Option<f64>,

    /// Maximum contact resistance in mΩ·cm².
    #[arg(long, value_name = "MOHM_CM2")]
    pub max_contact_resistance: Option<f64>,

    /// Minimum success rating (1-5).
    #[arg(long, value_name = "RATING")]
    pub min_success_rating: Option<u8>,

    // --- Reports ---
    /// Print the benchmark table against the industry performance targets.
    #[arg(long)]
    pub benchmark: bool,

    /// Print the research-gap analysis.
    #[arg(long)]
    pub gaps: bool,
}

/// Arguments for the `collect` subcommand.
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Materials Project API key; falls back to the MP_API_KEY environment variable.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Stability threshold in eV/atom above the hull.
    #[arg(
        short = 't',
        long,
        default_value_t = DEFAULT_STABILITY_THRESHOLD,
        value_name = "EV_PER_ATOM"
    )]
    pub threshold: f64,

    /// Skip the conductive oxide catalogue.
    #[arg(long)]
    pub no_oxides: bool,

    /// Skip the nitride catalogue.
    #[arg(long)]
    pub no_nitrides: bool,

    /// Skip the carbide catalogue.
    #[arg(long)]
    pub no_carbides: bool,

    /// Output CSV path for all collected candidates.
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Additional CSV path for stable candidates only.
    #[arg(long, value_name = "PATH")]
    pub stable_output: Option<PathBuf>,
}
