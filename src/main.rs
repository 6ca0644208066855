use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stdev_guide::cli;
use stdev_guide::config::GuideConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stdev-guide")]
#[command(about = "User guide for the Standard Deviation pricing-comparison menu.")]
#[command(long_about = "stdev-guide - User Guide: Standard Deviation
Standard Deviation measures the price variation across vendors to assess
pricing stability and the consistency of commercial offers.

COMMANDS:
  show          - Render the user guide
  dummy         - Download the dummy dataset (.xlsx)
  super-button  - Download the result tables as one multi-sheet .xlsx
  sheets        - List the sheets the super button can export
  format        - Format numbers the way the result tables do

EXAMPLES:
  stdev-guide show
  stdev-guide dummy --preview
  stdev-guide super-button -s \"Summary Deviation (%)\" -s \"Bidder's Rank\"
  stdev-guide format 10310 1234.5
  stdev-guide format --percent 27.35")]
#[command(version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "STDEV_GUIDE_CONFIG")]
    config: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the user guide
    Show {
        /// Disable colours
        #[arg(long)]
        plain: bool,

        /// Wrap paragraphs at this many columns
        #[arg(short, long)]
        width: Option<usize>,
    },

    #[command(long_about = "Download the dummy dataset.

Writes a single-sheet workbook you can feed to the Standard Deviation menu.
The built-in dataset holds three scopes (WP1-WP3) priced by three vendors,
laid out as a floating table starting at B2.

Set 'dummy_dataset.source' in the config file to ship an existing workbook
instead.")]
    /// Download the dummy dataset
    Dummy {
        /// Output directory (defaults to the configured output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the first sheet of the written workbook
        #[arg(long)]
        preview: bool,
    },

    #[command(long_about = "Download the result tables as a single Excel file.

Each selected table becomes its own sheet, in the order given. Without
--sheet, the config's super_button.default_sheets (or all sheets) are used.

FORMATS:
  Numeric columns      #,##0
  Columns with '%'     #,##0.0\"%\"
  Rank-1 Deviation     every number as a percentage, row minimum filled green

EXAMPLE:
  stdev-guide super-button -s \"Rank-1 Deviation (%)\" -s \"Bidder's Rank\"")]
    /// Download the result tables as one multi-sheet workbook
    SuperButton {
        /// Sheet to include (repeat to pick several, order is kept)
        #[arg(short, long = "sheet")]
        sheets: Vec<String>,

        /// Output directory (defaults to the configured output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the sheets the super button can export
    Sheets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format numbers in rupiah style
    Format {
        /// Values to format
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Append a percent sign
        #[arg(short, long)]
        percent: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "stdev_guide=debug"
    } else {
        "stdev_guide=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GuideConfig::load_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load config {}",
            cli.config.as_deref().unwrap_or(std::path::Path::new("")).display()
        )
    })?;

    match cli.command {
        Commands::Show { plain, width } => cli::show(&config, plain, width)?,

        Commands::Dummy { output, preview } => cli::dummy(&config, output, preview)?,

        Commands::SuperButton { sheets, output } => cli::super_button(&config, sheets, output)?,

        Commands::Sheets { json } => cli::sheets(json)?,

        Commands::Format { values, percent } => cli::format_values(values, percent)?,
    }

    Ok(())
}
