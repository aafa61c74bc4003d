//! Embedded track metadata.
//!
//! `LoftyMetadataSource` reads artist/title from whatever tag block a file
//! carries (ID3v2 > Vorbis > APE > ID3v1 as ranked by lofty).

use std::fmt;
use std::path::Path;

use lofty::config::ParseOptions;
use lofty::file::TaggedFileExt;
use lofty::prelude::Accessor;
use lofty::probe::Probe;
use tracing::{debug, warn};

use crate::error::{Result, ScoutError};

/// Artist and title read from a file's tags. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub artist: String,
    pub title: String,
}

impl TrackMetadata {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }
}

/// Renders `artist - title`, the line used for display and as the search query.
impl fmt::Display for TrackMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

/// Source of track metadata for a file path.
#[cfg_attr(test, mockall::automock)]
pub trait MetadataSource: Send + Sync {
    fn read(&self, path: &Path) -> Result<TrackMetadata>;
}

/// Tag reader backed by `lofty`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyMetadataSource;

impl LoftyMetadataSource {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataSource for LoftyMetadataSource {
    fn read(&self, path: &Path) -> Result<TrackMetadata> {
        debug!("Reading tags from: {}", path.display());

        let read_error = |reason: String| ScoutError::MetadataRead {
            path: path.to_path_buf(),
            reason,
        };

        let tagged_file = Probe::open(path)
            .map_err(|e| read_error(format!("failed to open file: {}", e)))?
            .options(ParseOptions::new().read_properties(false))
            .read()
            .map_err(|e| read_error(format!("failed to read tags: {}", e)))?;

        let Some(tag) = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
        else {
            warn!("No tags found in file: {}", path.display());
            return Ok(TrackMetadata::default());
        };

        let artist = tag.artist().map(|a| a.to_string()).unwrap_or_default();
        let title = tag.title().map(|t| t.to_string()).unwrap_or_default();

        if artist.is_empty() || title.is_empty() {
            warn!(
                "Incomplete tags in {}: artist={:?}, title={:?}",
                path.display(),
                artist,
                title
            );
        }

        Ok(TrackMetadata { artist, title })
    }
}
