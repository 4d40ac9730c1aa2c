use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Almanac calendar page generator.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Printable calendar pages with sun, moon and recurring events"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render one page per four-week window.
    Render(RenderArgs),
    /// Print the event occurrences of a date window.
    Agenda(AgendaArgs),
}

/// Output file format of the `render` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Scalable vector graphics in millimetre units.
    Svg,
    /// The positioned elements as JSON.
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    /// Path to the events file.
    pub events: PathBuf,

    /// First day of the first page (YYYY-MM-DD). Defaults to today.
    pub date: Option<NaiveDate>,

    /// Number of consecutive pages to render.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub pages: usize,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory; stale pages of the same format are removed.
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,
}

/// Arguments for the `agenda` subcommand.
#[derive(clap::Args)]
pub struct AgendaArgs {
    /// Path to the events file.
    pub events: PathBuf,

    /// First day of the window (YYYY-MM-DD). Defaults to today.
    pub date: Option<NaiveDate>,

    /// Window length in days.
    #[arg(long, default_value_t = 28)]
    pub days: u32,
}
