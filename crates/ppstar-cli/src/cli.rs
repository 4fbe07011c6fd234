//! CLI argument definitions for ppstar.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use ppstar::config::{api, plot};
use ppstar::score::GameMode;

#[derive(Parser)]
#[command(name = "ppstar")]
#[command(about = "Around what star ratings do you perform the best?", version)]
pub struct Args {
    /// OAuth client ID
    #[arg(long, env = "CLIENT_ID", global = true)]
    pub client_id: Option<String>,

    /// OAuth client secret (never share it)
    #[arg(long, env = "CLIENT_SECRET", hide_env_values = true, global = true)]
    pub client_secret: Option<String>,

    /// osu! user ID (prompted for when absent)
    #[arg(long, env = "USER_ID", global = true)]
    pub user_id: Option<u64>,

    /// Ruleset to fetch scores for (defaults to the user's main ruleset)
    #[arg(long, value_parser = parse_mode, global = true)]
    pub mode: Option<GameMode>,

    /// Number of scores to request from each list
    #[arg(
        long,
        default_value_t = api::DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..=api::MAX_LIMIT as i64),
        global = true
    )]
    pub limit: u32,

    /// Include failed plays in recent scores
    #[arg(long, global = true)]
    pub include_fails: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a scatter plot of pp against star rating (default)
    Plot(PlotArgs),
    /// Print or save the extracted points
    Export {
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(long, short, value_enum, default_value = "tsv")]
        format: ExportFormat,
    },
}

#[derive(clap::Args, Clone, Debug, PartialEq)]
pub struct PlotArgs {
    /// Output image path (.svg or .png)
    #[arg(long, short, default_value = plot::DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Image width in pixels
    #[arg(long, default_value_t = plot::WIDTH)]
    pub width: u32,
    /// Image height in pixels
    #[arg(long, default_value_t = plot::HEIGHT)]
    pub height: u32,
    /// Only write the image; don't open a viewer
    #[arg(long)]
    pub no_show: bool,
}

impl Default for PlotArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(plot::DEFAULT_OUTPUT),
            width: plot::WIDTH,
            height: plot::HEIGHT,
            no_show: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum ExportFormat {
    Tsv,
    Json,
}

impl From<ExportFormat> for ppstar::ExportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Tsv => ppstar::ExportFormat::Tsv,
            ExportFormat::Json => ppstar::ExportFormat::Json,
        }
    }
}

fn parse_mode(value: &str) -> Result<GameMode, String> {
    GameMode::from_str(value)
        .map_err(|_| format!("unknown mode '{}' (expected osu, taiko, fruits or mania)", value))
}
