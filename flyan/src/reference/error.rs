//! Reference data error types.

use std::path::PathBuf;

/// Errors that can occur while loading reference tables.
///
/// All of these are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON object keyed by code
    #[error("failed to parse {table} table: {source}")]
    Json {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The table parsed but holds no codes
    #[error("{table} table is empty")]
    Empty { table: &'static str },
}
