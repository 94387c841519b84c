use clap::Parser;
use std::path::PathBuf;

/// Rank players by value minus wage and plot wage against value.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Player CSV with Name, Wage and Value columns
    #[arg(short, long, default_value = "data.csv")]
    pub input: PathBuf,

    /// Also save the static scatter plot as a PNG at this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Static figure width in pixels
    #[arg(long, default_value_t = 700)]
    pub width: u32,

    /// Static figure height in pixels
    #[arg(long, default_value_t = 700)]
    pub height: u32,

    /// Number of top players listed in the summary
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Skip the interactive window
    #[arg(long)]
    pub no_viewer: bool,

    /// Open the saved PNG with the system image viewer
    #[arg(long, requires = "output")]
    pub open: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
