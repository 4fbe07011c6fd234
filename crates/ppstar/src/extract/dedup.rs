use std::collections::HashSet;

use crate::error::Result;
use crate::score::Score;

/// Order-sensitive duplicate filter over canonical record text.
///
/// The first record with a given text is admitted; later ones are rejected.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `text` is seen.
    pub fn admit(&mut self, text: &str) -> bool {
        if self.seen.contains(text) {
            return false;
        }
        self.seen.insert(text.to_string());
        true
    }

    /// Number of distinct texts admitted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Drop records whose canonical text was already seen, keeping input order.
///
/// Survivors are rebuilt from their canonical text.
pub fn deduplicate<I>(scores: I) -> Result<Vec<Score>>
where
    I: IntoIterator<Item = Score>,
{
    let mut dedup = Deduplicator::new();
    let mut unique = Vec::new();
    let mut total = 0;

    for score in scores {
        total += 1;
        let text = score.canonical_text()?;
        if dedup.admit(&text) {
            unique.push(Score::from_canonical_text(&text)?);
        }
    }

    tracing::debug!("{} distinct records out of {}", dedup.len(), total);
    Ok(unique)
}
