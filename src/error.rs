//! Error types for the gazetteer store.

use std::path::PathBuf;

use thiserror::Error;

/// Failures on the dataset access path.
///
/// Neither variant is fatal to the process: [`crate::Gazetteer`] logs
/// them and degrades to empty result sets. Unresolvable timezones and
/// admin-name misses are not errors at all and never surface here.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The dataset file is missing or cannot be opened read-only.
    #[error("gazetteer dataset unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The backend rejected the search statement. This points at a
    /// malformed dataset (missing tables, truncated file), not at user
    /// input; the query text is always bound as an opaque literal.
    #[error("gazetteer query failed: {0}")]
    Query(#[from] rusqlite::Error),
}
