//! Candidate matching: text containment, genre tables and scoring.

pub mod genre;
pub mod scoring;
pub mod text;

pub use genre::{is_preferred_genre, normalize_genre, PREFERRED_GENRE_IDS};
pub use scoring::score_candidate;
pub use text::texts_match;
