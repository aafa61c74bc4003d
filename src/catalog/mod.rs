//! Catalog search: HTTP client, markup access and result extraction.

pub mod client;
pub mod extractor;
pub mod markup;

pub use client::{CatalogClient, HttpCatalogClient};
pub use extractor::ResultExtractor;
pub use markup::{HtmlDocument, HtmlNode, MarkupNode};

/// One search result as it appears on the catalog page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCandidate {
    /// Credited artists, in page order.
    pub artists: Vec<String>,
    /// Track name without the mix suffix.
    pub primary_title: String,
    /// Mix/remix label ("Extended Mix", "Original Mix", ...).
    pub secondary_title: String,
    /// Genre label exactly as shown on the page.
    pub original_genre_name: String,
    /// Catalog genre id, when the genre link carries one.
    pub genre_id: Option<i64>,
}
