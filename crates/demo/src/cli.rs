// File: crates/demo/src/cli.rs
// Summary: Command line definition (clap derive).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use prettyplot_core::ImageFormat;

/// Which entry point a parameter file feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Line/scatter plot (`single_plot`)
    Plot,
    /// Histogram (`single_hist`)
    Hist,
    /// Colormapped image (`single_imshow`)
    Imshow,
}

#[derive(Parser, Debug)]
#[command(name = "prettyplot-demo")]
#[command(version, about = "Render publication-style figures from parameter files or CSV data")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a line plot, a histogram and an image into a directory
    Samples(SamplesArgs),

    /// Render a JSON parameter file
    Render(RenderArgs),

    /// Plot every numeric column of a CSV file against the first column
    Csv(CsvArgs),

    /// Print a JSON parameter template
    Template {
        #[arg(value_enum)]
        kind: Kind,
    },

    /// Print version information
    Info,
}

#[derive(Parser, Debug)]
pub struct SamplesArgs {
    /// Output directory
    #[arg(long, default_value = "target/prettyplot_samples")]
    pub out: PathBuf,

    /// Image format of the written files (png, svg or pdf)
    #[arg(long, default_value = "png")]
    pub format: ImageFormat,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Parameter file (JSON)
    pub params: PathBuf,

    /// Entry point the file is meant for
    #[arg(long, value_enum, default_value = "plot")]
    pub kind: Kind,

    /// Write here instead of the file's `filename`
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Never open a window
    #[arg(long)]
    pub no_show: bool,

    /// Print the renderer calls instead of drawing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV file with a header row
    pub file: PathBuf,

    /// Output file; defaults to the input name with an `.svg` extension
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Draw markers only
    #[arg(long)]
    pub scatter: bool,

    /// Logarithmic y-axis
    #[arg(long)]
    pub log_y: bool,
}
