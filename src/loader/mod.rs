//! Data Loading
//!
//! Fetches the dashboard's JSON documents from a [`DataSource`]:
//! - [`HttpDataSource`]: `GET {base_url}{path}/{document}` with reqwest
//! - [`FileDataSource`]: reads `{dir}/{document}` from disk
//!
//! Sources only return raw bytes; decoding happens in [`fetch_document`]
//! so every source reports malformed JSON the same way.

mod file;
mod http;

pub use file::FileDataSource;
pub use http::HttpDataSource;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::config::DataConfig;
use crate::page::PageError;

/// Document holding stats and the course catalogue
pub const COURSES_DOCUMENT: &str = "courses.json";

/// Document holding recent enrollments
pub const STUDENTS_DOCUMENT: &str = "students.json";

/// A place the dashboard's JSON documents can be read from
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable location, for logs
    fn describe(&self) -> String;

    /// Raw body of the named document
    async fn fetch(&self, document: &str) -> Result<Vec<u8>, LoadError>;
}

/// Errors that can occur while loading a document
#[derive(Error, Debug)]
pub enum LoadError {
    /// Connection, DNS or transport failure
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Body was not the expected JSON shape
    #[error("Failed to parse {document}: {source}")]
    Parse {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    /// Local file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Render target missing from the page
    #[error("Render failed: {0}")]
    Page(#[from] PageError),

    /// Template rendering failed
    #[error("Template failed: {0}")]
    Template(#[from] askama::Error),
}

/// Fetch a document and decode it as `T`
pub async fn fetch_document<T: DeserializeOwned>(
    source: &dyn DataSource,
    document: &str,
) -> Result<T, LoadError> {
    let body = source.fetch(document).await?;

    serde_json::from_slice(&body).map_err(|source| LoadError::Parse {
        document: document.to_string(),
        source,
    })
}

/// Build the source named by the configuration
///
/// `http://` and `https://` sources are fetched over HTTP below
/// `data.path`; anything else is treated as a local directory.
pub fn source_from_config(config: &DataConfig) -> Result<Arc<dyn DataSource>, LoadError> {
    let source = config.source.trim();

    if source.starts_with("http://") || source.starts_with("https://") {
        let http = HttpDataSource::new(source, &config.path, config.request_timeout_ms)?;
        Ok(Arc::new(http))
    } else {
        Ok(Arc::new(FileDataSource::new(source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudentsDocument;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_fetch_document_parse_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(STUDENTS_DOCUMENT), "not json").unwrap();

        let source = FileDataSource::new(dir.path());
        let result = fetch_document::<StudentsDocument>(&source, STUDENTS_DOCUMENT).await;

        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_fetch_document_ok() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(STUDENTS_DOCUMENT),
            r#"{"recentEnrollments": []}"#,
        )
        .unwrap();

        let source = FileDataSource::new(dir.path());
        let doc: StudentsDocument = fetch_document(&source, STUDENTS_DOCUMENT).await.unwrap();

        assert!(doc.recent_enrollments.is_empty());
    }

    #[test]
    fn test_source_from_config() {
        let mut config = DataConfig::default();

        config.source = "http://localhost:9000".to_string();
        let source = source_from_config(&config).unwrap();
        assert!(source.describe().starts_with("http://localhost:9000/data"));

        config.source = "./data".to_string();
        let source = source_from_config(&config).unwrap();
        assert!(source.describe().contains("./data"));
    }
}
