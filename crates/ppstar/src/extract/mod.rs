//! Turning raw score lists into plottable points.
//!
//! The pipeline runs in four explicit steps:
//! 1. deduplicate by canonical text, first occurrence wins
//! 2. drop scores without pp (absent or zero)
//! 3. project each survivor to `(pp, star rating)`
//! 4. transpose the pairs into two index-aligned columns

mod dedup;

pub use dedup::{Deduplicator, deduplicate};

use serde::Serialize;

use crate::error::Result;
use crate::score::Score;

/// One plotted score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScorePoint {
    pub pp: f64,
    #[serde(rename = "starRating")]
    pub difficulty: f64,
}

impl ScorePoint {
    /// Project a score, or `None` when it has no pp worth plotting.
    pub fn from_score(score: &Score) -> Option<Self> {
        score.nonzero_pp().map(|pp| Self {
            pp,
            difficulty: score.difficulty(),
        })
    }
}

/// Two parallel columns ready for a scatter plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterData {
    pub pps: Vec<f64>,
    pub difficulties: Vec<f64>,
}

impl ScatterData {
    /// Transpose `[(pp, diff), ...]` into `(pps, diffs)`. Empty in, empty out.
    pub fn from_points(points: &[ScorePoint]) -> Self {
        let (pps, difficulties) = points.iter().map(|p| (p.pp, p.difficulty)).unzip();
        Self { pps, difficulties }
    }

    pub fn len(&self) -> usize {
        self.pps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pps.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = ScorePoint> + '_ {
        self.pps
            .iter()
            .zip(&self.difficulties)
            .map(|(&pp, &difficulty)| ScorePoint { pp, difficulty })
    }

    /// The highest-pp point; the earliest one wins a tie.
    pub fn peak(&self) -> Option<ScorePoint> {
        self.points().fold(None, |best, point| match best {
            Some(b) if b.pp >= point.pp => Some(b),
            _ => Some(point),
        })
    }
}

/// Deduplicate, filter and project scores into points, preserving order.
pub fn extract_points<I>(scores: I) -> Result<Vec<ScorePoint>>
where
    I: IntoIterator<Item = Score>,
{
    let unique = deduplicate(scores)?;
    let points: Vec<ScorePoint> = unique.iter().filter_map(ScorePoint::from_score).collect();

    tracing::debug!(
        "Extracted {} points from {} unique scores",
        points.len(),
        unique.len()
    );

    Ok(points)
}

/// Full pipeline: scores in, scatter columns out.
pub fn extract_scatter<I>(scores: I) -> Result<ScatterData>
where
    I: IntoIterator<Item = Score>,
{
    Ok(ScatterData::from_points(&extract_points(scores)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Beatmap;

    fn score(id: u64, pp: Option<f64>, difficulty: f64) -> Score {
        Score {
            id: Some(id),
            pp,
            beatmap: Beatmap {
                difficulty_rating: difficulty,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_from_points_empty() {
        let data = ScatterData::from_points(&[]);
        assert!(data.is_empty());
        assert!(data.difficulties.is_empty());
    }

    #[test]
    fn test_from_points_transposes() {
        let points = [
            ScorePoint { pp: 1.0, difficulty: 2.0 },
            ScorePoint { pp: 3.0, difficulty: 4.0 },
        ];
        let data = ScatterData::from_points(&points);
        assert_eq!(data.pps, vec![1.0, 3.0]);
        assert_eq!(data.difficulties, vec![2.0, 4.0]);
        assert_eq!(data.points().collect::<Vec<_>>(), points);
    }

    #[test]
    fn test_peak_first_wins_tie() {
        let data = ScatterData {
            pps: vec![100.0, 300.0, 300.0, 50.0],
            difficulties: vec![4.0, 6.0, 7.0, 3.0],
        };
        let peak = data.peak().unwrap();
        assert_eq!(peak.pp, 300.0);
        assert_eq!(peak.difficulty, 6.0);
        assert!(ScatterData::default().peak().is_none());
    }

    #[test]
    fn test_score_point_skips_zero_pp() {
        assert!(ScorePoint::from_score(&score(1, Some(0.0), 3.0)).is_none());
        assert!(ScorePoint::from_score(&score(1, None, 3.0)).is_none());
        assert_eq!(
            ScorePoint::from_score(&score(1, Some(88.0), 3.0)),
            Some(ScorePoint { pp: 88.0, difficulty: 3.0 })
        );
    }

    #[test]
    fn test_extract_scatter_scenario() {
        let a = score(1, Some(100.0), 5.0);
        let input = vec![
            a.clone(),
            a,
            score(2, None, 6.0),
            score(3, Some(250.0), 7.2),
        ];
        let data = extract_scatter(input).unwrap();
        assert_eq!(data.difficulties, vec![5.0, 7.2]);
        assert_eq!(data.pps, vec![100.0, 250.0]);
    }
}
