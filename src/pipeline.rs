//! Search pipeline: fetch, extract, normalize, score and rank.

use tracing::debug;

use crate::catalog::{CatalogClient, RawCandidate, ResultExtractor};
use crate::error::Result;
use crate::matching::{normalize_genre, score_candidate};
use crate::metadata::TrackMetadata;

/// A search result with its canonical genre name and relevance score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub candidate: RawCandidate,
    pub genre_name: String,
    pub score: u32,
}

impl ScoredCandidate {
    /// Normalize the genre and score `candidate` against `track`.
    pub fn new(track: &TrackMetadata, candidate: RawCandidate) -> Self {
        let genre_name = normalize_genre(&candidate.original_genre_name);
        let score = score_candidate(track, &candidate);
        Self {
            candidate,
            genre_name,
            score,
        }
    }
}

/// Runs one catalog search per track and ranks the results.
pub struct SearchPipeline<C> {
    client: C,
    extractor: ResultExtractor,
}

impl<C: CatalogClient> SearchPipeline<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            extractor: ResultExtractor::new(),
        }
    }

    /// Search the catalog for `track` and return candidates, best first.
    pub async fn search(&self, track: &TrackMetadata) -> Result<Vec<ScoredCandidate>> {
        let query = build_query(track);
        let page = self.client.search_page(&query).await?;

        let candidates = self.extractor.extract(&page);
        let ranked = rank_candidates(track, candidates);
        debug!(
            "Ranked {} candidates for {:?} (top score {})",
            ranked.len(),
            query,
            ranked.first().map(|c| c.score).unwrap_or(0)
        );
        Ok(ranked)
    }
}

/// The free-text query sent to the catalog: `artist - title`.
pub fn build_query(track: &TrackMetadata) -> String {
    track.to_string()
}

/// Score every candidate and sort descending by score.
///
/// The sort is stable, so equal scores keep page order.
pub fn rank_candidates(
    track: &TrackMetadata,
    candidates: Vec<RawCandidate>,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| ScoredCandidate::new(track, candidate))
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
