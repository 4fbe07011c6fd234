//! # ppstar
//!
//! Core library for plotting osu! performance against beatmap star rating.
//!
//! This crate provides:
//! - Score records as served by the osu! API v2
//! - An authenticated API client and a `ScoreSource` abstraction
//! - Deduplication and extraction of `(pp, star rating)` points
//! - Scatter plot rendering and TSV/JSON export

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod network;
pub mod plot;
pub mod score;

// Re-export from config module
pub use config::{ApiConfig, Secret, missing_credentials_message, parse_user_id};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from export module
pub use export::{ExportFormat, export_points, generate_json, generate_tsv};

// Re-export from extract module
pub use extract::{
    Deduplicator, ScatterData, ScorePoint, deduplicate, extract_points, extract_scatter,
};

// Re-export from network module
pub use network::{OsuClient, ScoreSource, fetch_all_scores, fetch_and_close};

// Re-export from plot module
pub use plot::{ImageFormat, PlotOptions, render_scatter};

// Re-export from score module
pub use score::{Beatmap, Beatmapset, GameMode, Score, ScoreKind, Statistics, Weight};
