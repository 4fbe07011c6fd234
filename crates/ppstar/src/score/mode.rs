use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// osu! ruleset, named the way the API names it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    #[default]
    Osu,
    Taiko,
    Fruits,
    Mania,
}

impl GameMode {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Which list of a user's scores to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ScoreKind {
    Recent,
    Best,
}

impl ScoreKind {
    /// Path segment of `/users/{id}/scores/{kind}`.
    pub fn path_segment(&self) -> &'static str {
        self.into()
    }
}
