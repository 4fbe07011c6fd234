//! Export formats for extracted score points.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::extract::{ScatterData, ScorePoint};

/// Output format for exported points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Tsv,
    Json,
}

pub fn format_tsv_header() -> String {
    ["StarRating", "PP"].join("\t")
}

pub fn format_tsv_row(point: &ScorePoint) -> String {
    format!("{}\t{}", point.difficulty, point.pp)
}

/// Header plus one row per point, in input order.
pub fn generate_tsv(data: &ScatterData) -> String {
    let mut output = format_tsv_header();
    output.push('\n');

    for point in data.points() {
        let _ = writeln!(output, "{}", format_tsv_row(&point));
    }

    output
}

/// Pretty-printed JSON array of `{ "pp", "starRating" }` objects.
pub fn generate_json(data: &ScatterData) -> Result<String> {
    let points: Vec<ScorePoint> = data.points().collect();
    Ok(serde_json::to_string_pretty(&points)?)
}

pub fn generate(data: &ScatterData, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Tsv => Ok(generate_tsv(data)),
        ExportFormat::Json => generate_json(data),
    }
}

pub fn export_points<P: AsRef<Path>>(data: &ScatterData, format: ExportFormat, path: P) -> Result<()> {
    fs::write(path, generate(data, format)?)?;
    Ok(())
}
