use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io;
use std::path::{Path, PathBuf};

/// Name under which the bundled hiring list is served.
pub const HIRING_RESOURCE: &str = "hiring.json";

const HIRING_JSON: &[u8] = include_bytes!("../../assets/hiring.json");

/// Filesystem storage rooted at `base_path`. Absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.full_path(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tracing::debug!("Writing {} bytes to {}", data.len(), full_path.display());
        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    fn location(&self, path: &str) -> String {
        self.full_path(path).display().to_string()
    }
}

/// Read-only storage over the resources compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStorage;

impl BundledStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for BundledStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        match path {
            HIRING_RESOURCE => Ok(HIRING_JSON.to_vec()),
            other => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No bundled resource named {}", other),
            )
            .into()),
        }
    }

    async fn write_file(&self, path: &str, _data: &[u8]) -> Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("Bundled resources are read-only: {}", path),
        )
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_storage_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap());

        storage
            .write_file("nested/out.txt", b"List 1")
            .await
            .unwrap();
        let data = storage.read_file("nested/out.txt").await.unwrap();

        assert_eq!(data, b"List 1");
    }

    #[test]
    fn test_local_storage_location() {
        let storage = LocalStorage::new("/srv/hiring");
        assert_eq!(
            storage.location("hiring_items.txt"),
            Path::new("/srv/hiring").join("hiring_items.txt").display().to_string()
        );
    }

    #[tokio::test]
    async fn test_local_storage_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap());
        assert!(storage.read_file("missing.json").await.is_err());
    }

    #[tokio::test]
    async fn test_bundled_storage() {
        let storage = BundledStorage::new();
        let data = storage.read_file(HIRING_RESOURCE).await.unwrap();
        assert!(!data.is_empty());
        assert!(storage.read_file("other.json").await.is_err());
        assert!(storage.write_file(HIRING_RESOURCE, b"[]").await.is_err());
    }
}
