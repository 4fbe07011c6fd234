//! Export command for printing or saving extracted points.

use std::path::Path;

use anyhow::Result;
use ppstar::{ApiConfig, export};

use super::fetch::fetch_scatter;
use crate::cli::ExportFormat;

pub async fn run(
    config: ApiConfig,
    user_id: u64,
    output: Option<&Path>,
    format: ExportFormat,
) -> Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");
    eprintln!("ppstar {} - Export Mode", current_version);

    let data = fetch_scatter(config, user_id).await?;
    eprintln!("Extracted {} points", data.len());

    if let Some(output_path) = output {
        export::export_points(&data, format.into(), output_path)?;
        eprintln!("Exported to: {}", output_path.display());
    } else {
        print!("{}", export::generate(&data, format.into())?);
    }

    Ok(())
}
