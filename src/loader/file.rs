//! Directory data source

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{DataSource, LoadError};

/// Reads documents from a local directory
pub struct FileDataSource {
    root: PathBuf,
}

impl FileDataSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch(&self, document: &str) -> Result<Vec<u8>, LoadError> {
        let path = self.root.join(document);
        tracing::debug!(path = ?path, "Reading document");

        tokio::fs::read(&path)
            .await
            .map_err(|source| LoadError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempdir().unwrap();
        let source = FileDataSource::new(dir.path());

        let result = source.fetch("courses.json").await;
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[tokio::test]
    async fn test_reads_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("courses.json"), "{}").unwrap();

        let source = FileDataSource::new(dir.path());
        assert_eq!(source.fetch("courses.json").await.unwrap(), b"{}".to_vec());
    }
}
