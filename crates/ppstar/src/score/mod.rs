//! Score records as served by the osu! API.
//!
//! This module contains:
//! - `Score` - one play, with its beatmap and optional pp
//! - `Beatmap`, `Beatmapset`, `Statistics`, `Weight` - nested records
//! - `GameMode` - the four rulesets
//! - `ScoreKind` - recent or best plays

mod mode;
mod model;

pub use mode::*;
pub use model::*;
