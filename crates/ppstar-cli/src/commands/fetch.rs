//! Fetching and extracting points, shared by every command.

use anyhow::{Context, Result};
use ppstar::{ApiConfig, OsuClient, ScatterData, extract_scatter, fetch_and_close};
use tracing::info;

/// Connect, fetch recents then bests, release the client, and extract points.
pub async fn fetch_scatter(config: ApiConfig, user_id: u64) -> Result<ScatterData> {
    let client = OsuClient::connect(config)
        .await
        .context("Failed to authenticate with the osu! API")?;

    let scores = fetch_and_close(client, user_id)
        .await
        .with_context(|| format!("Failed to fetch scores for user {}", user_id))?;
    let total = scores.len();

    let data = extract_scatter(scores).context("Failed to extract score points")?;
    info!("{} of {} fetched scores have pp", data.len(), total);

    Ok(data)
}
