//! Fetching scores from the osu! API.

mod client;
mod source;

pub use client::OsuClient;
pub use source::{ScoreSource, fetch_all_scores, fetch_and_close};
