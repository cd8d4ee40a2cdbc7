use async_trait::async_trait;
use axum::body::Bytes;
use std::path::Path;
use thiserror::Error;

/// URL prefix under which stored audio is served.
pub const TTS_URL_PREFIX: &str = "/tts";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("no unused file name after {0} attempts")]
    NamesExhausted(usize),

    #[error("invalid stored file name: {0}")]
    InvalidName(String),
}

/// Backing store for the "synthesized" audio handed back to clients.
#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Store `bytes` under a fresh name and return the URL path it is served at.
    ///
    /// Never overwrites an existing entry.
    async fn put(&self, bytes: Bytes) -> Result<String, StorageError>;

    /// Fetch a stored file by the name that follows `/tts/` in its URL.
    ///
    /// Returns `Ok(None)` when nothing is stored under `name`.
    async fn get(&self, name: &str) -> Result<Option<Bytes>, StorageError>;

    /// Directory holding the stored files as-is, when the backend has one.
    ///
    /// Such stores are served straight from disk, with range and
    /// conditional request support.
    fn local_dir(&self) -> Option<&Path> {
        None
    }
}

/// Build the public URL path for a stored file name.
pub fn tts_url(name: &str) -> String {
    format!("{}/{}", TTS_URL_PREFIX, name)
}

/// Reject anything that could escape a flat store: separators, dot segments, empty names.
pub fn validate_name(name: &str) -> Result<(), StorageError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    if invalid {
        Err(StorageError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}
