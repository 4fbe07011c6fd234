use crate::error::Result;
use crate::score::Score;

/// Anything that can list a user's recent and best plays.
#[allow(async_fn_in_trait)]
pub trait ScoreSource {
    async fn recent_scores(&self, user_id: u64) -> Result<Vec<Score>>;

    async fn best_scores(&self, user_id: u64) -> Result<Vec<Score>>;

    /// Release whatever the source holds. Must not fail.
    async fn close(self)
    where
        Self: Sized;
}

/// Fetch recents, then bests, one after the other, and concatenate them.
///
/// Recents come first so that a play present in both lists keeps its
/// recent-list copy when deduplicated.
pub async fn fetch_all_scores<S: ScoreSource>(source: &S, user_id: u64) -> Result<Vec<Score>> {
    let mut scores = source.recent_scores(user_id).await?;
    tracing::info!("Fetched {} recent scores for user {}", scores.len(), user_id);

    let bests = source.best_scores(user_id).await?;
    tracing::info!("Fetched {} best scores for user {}", bests.len(), user_id);

    scores.extend(bests);
    Ok(scores)
}

/// Like [`fetch_all_scores`], but consumes the source and closes it
/// afterwards, whether or not fetching succeeded.
pub async fn fetch_and_close<S: ScoreSource>(source: S, user_id: u64) -> Result<Vec<Score>> {
    let fetched = fetch_all_scores(&source, user_id).await;
    source.close().await;
    fetched
}
