//! Turns a catalog search page into `RawCandidate`s.
//!
//! Only the track results bucket is read; release, artist and label buckets
//! on the same page are ignored. A page without that bucket has no results.

use tracing::debug;

use super::markup::{HtmlDocument, MarkupNode};
use super::RawCandidate;

const TRACK_RESULTS: &str = ".bucket.tracks.standard-interior-tracks .bucket-items .track";
const ARTISTS: &str = ".buk-track-artists";
const PRIMARY_TITLE: &str = ".buk-track-title .buk-track-primary-title";
const SECONDARY_TITLE: &str = ".buk-track-title .buk-track-remixed";
const GENRE: &str = ".buk-track-genre";
const GENRE_LINK: &str = ".buk-track-genre a";
const GENRE_ID_ATTR: &str = "data-genre";

/// Extracts track results from search page markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResultExtractor;

impl ResultExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse `markup` and return its track results in document order.
    pub fn extract(&self, markup: &str) -> Vec<RawCandidate> {
        let document = HtmlDocument::parse(markup);
        let candidates = self.extract_from(&document.root());
        debug!("Extracted {} track results", candidates.len());
        candidates
    }

    /// Extract from any markup tree exposing the selector capability.
    pub fn extract_from<N: MarkupNode>(&self, root: &N) -> Vec<RawCandidate> {
        root.find(TRACK_RESULTS)
            .iter()
            .map(candidate_from_block)
            .collect()
    }
}

fn candidate_from_block<N: MarkupNode>(block: &N) -> RawCandidate {
    RawCandidate {
        artists: split_artists(&find_text(block, ARTISTS)),
        primary_title: find_text(block, PRIMARY_TITLE),
        secondary_title: find_text(block, SECONDARY_TITLE),
        original_genre_name: find_text(block, GENRE),
        genre_id: find_attr(block, GENRE_LINK, GENRE_ID_ATTR)
            .and_then(|raw| raw.trim().parse::<i64>().ok()),
    }
}

/// Text of every node matching `selector`, joined and cleaned.
fn find_text<N: MarkupNode>(node: &N, selector: &str) -> String {
    let joined: String = node.find(selector).iter().map(MarkupNode::text).collect();
    clean_text(&joined)
}

/// Attribute of the first node matching `selector`.
fn find_attr<N: MarkupNode>(node: &N, selector: &str, name: &str) -> Option<String> {
    node.find(selector).first().and_then(|n| n.attr(name))
}

fn clean_text(raw: &str) -> String {
    raw.replace(['\n', '\r'], "").trim().to_string()
}

fn split_artists(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|artist| !artist.is_empty())
        .map(str::to_string)
        .collect()
}
