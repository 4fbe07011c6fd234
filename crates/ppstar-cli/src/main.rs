mod cli;
mod commands;
mod prompter;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command, PlotArgs};
use ppstar::{ApiConfig, missing_credentials_message};
use prompter::ConsolePrompter;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "ppstar_cli=warn,ppstar=warn";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging (RUST_LOG overrides the warn default)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Credentials are checked before anything touches the network
    let config = match ApiConfig::from_credentials(args.client_id, args.client_secret) {
        Ok(config) => config
            .with_mode(args.mode)
            .with_limit(args.limit)
            .with_include_fails(args.include_fails),
        Err(e) => {
            tracing::debug!("{}", e);
            println!("{}", missing_credentials_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    let user_id = match args.user_id {
        Some(user_id) => user_id,
        None => prompter::prompt_user_id(&mut ConsolePrompter)?,
    };

    match args.command {
        Some(Command::Export { output, format }) => {
            commands::export::run(config, user_id, output.as_deref(), format).await?
        }
        Some(Command::Plot(plot_args)) => commands::plot::run(config, user_id, &plot_args).await?,
        None => commands::plot::run(config, user_id, &PlotArgs::default()).await?,
    }

    Ok(ExitCode::SUCCESS)
}
