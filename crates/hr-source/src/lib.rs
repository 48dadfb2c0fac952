//! hr-source: time-series retrieval for zone analysis.

pub mod lookback;
pub mod memory;
pub mod source;
pub mod store;

pub use lookback::Lookback;
pub use memory::MemorySource;
pub use source::{SeriesQuery, SeriesSource};
pub use store::JsonlSeriesStore;

use std::path::PathBuf;

pub type SourceResult<T> = Result<T, SourceError>;

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed record at {}:{line}: {source}", .path.display())]
    Record {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    #[error("Zone not found: {zone}")]
    ZoneNotFound { zone: String },

    #[error("Invalid zone identifier: {zone:?}")]
    InvalidZone { zone: String },

    #[error("Invalid lookback {input:?}: {reason}")]
    InvalidLookback { input: String, reason: &'static str },
}
