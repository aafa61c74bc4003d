//! TrackScout - match local audio files against catalog search results

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod metadata;
pub mod pipeline;
pub mod report;
pub mod runner;

pub use config::Config;
pub use error::{Result, ScoutError};
