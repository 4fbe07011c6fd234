use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::score::GameMode;

/// Fields the model does not name, kept in key order.
pub type ExtraFields = BTreeMap<String, JsonValue>;

/// A single play as returned by `/users/{id}/scores/{kind}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub best_id: Option<u64>,
    #[serde(default)]
    pub user_id: u64,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub mods: Vec<String>,
    #[serde(default)]
    pub score: u64,
    #[serde(default)]
    pub max_combo: u32,
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub perfect: bool,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub mode: GameMode,
    /// Performance points. `None` for unranked maps and failed plays.
    #[serde(default)]
    pub pp: Option<f64>,
    /// Weighting applied to this play in the user's total; only on best plays.
    #[serde(default)]
    pub weight: Option<Weight>,
    pub beatmap: Beatmap,
    #[serde(default)]
    pub beatmapset: Option<Beatmapset>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Score {
    /// Compact JSON used to detect duplicate records.
    ///
    /// Named fields serialize in declaration order and unknown fields in key
    /// order, so equal records always yield equal text.
    pub fn canonical_text(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_canonical_text(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Star rating of the played beatmap.
    pub fn difficulty(&self) -> f64 {
        self.beatmap.difficulty_rating
    }

    /// pp, treating an absent value and exactly zero alike as "no pp".
    pub fn nonzero_pp(&self) -> Option<f64> {
        self.pp.filter(|pp| *pp != 0.0)
    }
}

/// Judgement counts for a play.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub count_300: Option<u32>,
    #[serde(default)]
    pub count_100: Option<u32>,
    #[serde(default)]
    pub count_50: Option<u32>,
    #[serde(default)]
    pub count_geki: Option<u32>,
    #[serde(default)]
    pub count_katu: Option<u32>,
    #[serde(default)]
    pub count_miss: Option<u32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub percentage: f64,
    pub pp: f64,
}

/// The difficulty a score was set on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Beatmap {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub beatmapset_id: u64,
    /// Star rating.
    pub difficulty_rating: f64,
    #[serde(default)]
    pub mode: GameMode,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_length: u32,
    #[serde(default)]
    pub version: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Beatmapset {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub creator: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
