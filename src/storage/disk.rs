use async_trait::async_trait;
use axum::body::Bytes;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::interface::{tts_url, validate_name, AudioStore, StorageError};
use super::naming::{generate_name, MAX_NAME_ATTEMPTS};

/// Flat directory of uploaded audio files.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Open the store, creating `root` if it does not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        debug!("Audio store ready at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn write_new(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl AudioStore for DiskStore {
    async fn put(&self, bytes: Bytes) -> Result<String, StorageError> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = generate_name();
            let path = self.root.join(&name);

            match self.write_new(&path, &bytes).await {
                Ok(()) => {
                    debug!("Stored {} bytes at {}", bytes.len(), path.display());
                    return Ok(tts_url(&name));
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    warn!("Generated name {} already taken, retrying", name);
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(StorageError::NamesExhausted(MAX_NAME_ATTEMPTS))
    }

    async fn get(&self, name: &str) -> Result<Option<Bytes>, StorageError> {
        validate_name(name)?;

        match tokio::fs::read(self.root.join(name)).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn local_dir(&self) -> Option<&Path> {
        Some(self.root.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of(url: &str) -> &str {
        url.strip_prefix("/tts/").expect("tts url")
    }

    #[test]
    fn new_creates_missing_directory_and_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("uploads");

        DiskStore::new(&root).unwrap();
        assert!(root.is_dir());
        DiskStore::new(&root).unwrap();
    }

    #[tokio::test]
    async fn put_writes_exact_bytes_to_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DiskStore::new(tmp.path()).unwrap();

        let url = store.put(Bytes::from_static(b"RIFF....WAVE")).await.unwrap();
        let on_disk = std::fs::read(tmp.path().join(name_of(&url))).unwrap();
        assert_eq!(on_disk, b"RIFF....WAVE");

        let fetched = store.get(name_of(&url)).await.unwrap();
        assert_eq!(fetched.as_deref(), Some(&b"RIFF....WAVE"[..]));
    }

    #[tokio::test]
    async fn empty_upload_is_still_stored() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DiskStore::new(tmp.path()).unwrap();

        let url = store.put(Bytes::new()).await.unwrap();
        let fetched = store.get(name_of(&url)).await.unwrap().unwrap();
        assert!(fetched.is_empty());
    }

    #[test]
    fn exposes_its_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DiskStore::new(tmp.path()).unwrap();
        assert_eq!(store.local_dir(), Some(tmp.path()));
    }

    #[tokio::test]
    async fn missing_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DiskStore::new(tmp.path()).unwrap();

        assert!(store.get("tts-0-000000.wav").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_refuses_to_leave_the_directory() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("secret.txt"), b"nope").unwrap();
        let store = DiskStore::new(tmp.path().join("uploads")).unwrap();

        let err = store.get("../secret.txt").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidName(_)));
    }

    #[tokio::test]
    async fn put_fails_when_directory_disappears() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("uploads");
        let store = DiskStore::new(&root).unwrap();
        std::fs::remove_dir(&root).unwrap();

        let err = store.put(Bytes::from_static(b"abc")).await.unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
