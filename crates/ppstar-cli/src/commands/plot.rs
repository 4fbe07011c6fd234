//! Plot command: render pp against star rating and show it.

use anyhow::{Context, Result};
use ppstar::{ApiConfig, PlotOptions, render_scatter};

use super::fetch::fetch_scatter;
use crate::cli::PlotArgs;
use crate::prompter::{ConsolePrompter, Prompter};

pub async fn run(config: ApiConfig, user_id: u64, args: &PlotArgs) -> Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");
    eprintln!("ppstar {} - Plot Mode", current_version);

    let data = fetch_scatter(config, user_id).await?;

    if data.is_empty() {
        println!("No scores with pp found for user {}; nothing to plot.", user_id);
        return Ok(());
    }

    if let Some(peak) = data.peak() {
        println!(
            "Best play: {:.2}pp on a {:.2}* map ({} scores plotted)",
            peak.pp,
            peak.difficulty,
            data.len()
        );
    }

    let options = PlotOptions {
        output: args.output.clone(),
        width: args.width,
        height: args.height,
        title: format!("pp by star rating (user {})", user_id),
    };
    render_scatter(&data, &options).context("Failed to render plot")?;
    println!("Saved plot to {}", options.output.display());

    if !args.no_show {
        open::that(&options.output).context("Failed to open plot viewer")?;
        ConsolePrompter.prompt_continue("Press ENTER to exit")?;
    }

    Ok(())
}
