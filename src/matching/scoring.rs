//! Heuristic relevance score between a track and a search result.
//!
//! Scoring algorithm (weights are additive, nothing subtracts):
//! - primary title matches the track title: +25
//! - secondary (mix) title matches the track title: +5
//! - each credited artist matching the track artist: +10, uncapped
//! - genre id in the preferred set: +5
//!
//! Matching is plain containment (see [`texts_match`]), which tolerates tag
//! conventions like "feat." ordering or extra punctuation on either side.
//! The result is a relevance heuristic, not a probability.

use crate::catalog::RawCandidate;
use crate::metadata::TrackMetadata;

use super::genre::is_preferred_genre;
use super::text::texts_match;

pub const PRIMARY_TITLE_WEIGHT: u32 = 25;
pub const SECONDARY_TITLE_WEIGHT: u32 = 5;
pub const ARTIST_WEIGHT: u32 = 10;
pub const PREFERRED_GENRE_WEIGHT: u32 = 5;

/// Score `candidate` against `track`.
pub fn score_candidate(track: &TrackMetadata, candidate: &RawCandidate) -> u32 {
    let mut score = 0;

    if texts_match(&candidate.primary_title, &track.title) {
        score += PRIMARY_TITLE_WEIGHT;
    }
    if texts_match(&candidate.secondary_title, &track.title) {
        score += SECONDARY_TITLE_WEIGHT;
    }

    let artist_hits = candidate
        .artists
        .iter()
        .filter(|artist| texts_match(artist, &track.artist))
        .count() as u32;
    score += artist_hits * ARTIST_WEIGHT;

    if is_preferred_genre(candidate.genre_id) {
        score += PREFERRED_GENRE_WEIGHT;
    }

    score
}
