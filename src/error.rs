//! Error types for TrackScout
//!
//! This module defines all error types used throughout the crate.
//! Uses `thiserror` for ergonomic error handling with automatic `Display` and
//! `Error` trait implementations.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for TrackScout operations.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Configuration-related errors (missing directory, invalid config values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Embedded tags could not be read from an audio file
    #[error("Metadata read error for {}: {}", .path.display(), .reason)]
    MetadataRead { path: PathBuf, reason: String },

    /// Catalog search failed (connection, timeout, bad status, unreadable body)
    #[error("Search fetch error: {0}")]
    SearchFetch(String),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for TrackScout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;
