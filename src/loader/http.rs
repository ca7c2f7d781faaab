//! HTTP data source

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{DataSource, LoadError};

/// Reads documents from `{base_url}{path}/{document}`
pub struct HttpDataSource {
    client: Client,
    base_url: String,
}

impl HttpDataSource {
    /// Create a source below `path` on `base_url`
    ///
    /// No timeout is applied unless `timeout_ms` is set.
    pub fn new(base_url: &str, path: &str, timeout_ms: Option<u64>) -> Result<Self, LoadError> {
        let mut builder = Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: join_url(base_url, path),
        })
    }

    /// Full URL of a document
    pub fn url_for(&self, document: &str) -> String {
        format!("{}/{}", self.base_url, document)
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_matches('/');

    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch(&self, document: &str) -> Result<Vec<u8>, LoadError> {
        let url = self.url_for(document);
        tracing::debug!(url = %url, "Fetching document");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};

    async fn spawn_server() -> String {
        let app = Router::new().route(
            "/data/students.json",
            get(|| async { r#"{"recentEnrollments": []}"# }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://host/", "/data"), "http://host/data");
        assert_eq!(join_url("http://host", "data/"), "http://host/data");
        assert_eq!(join_url("http://host", ""), "http://host");
    }

    #[tokio::test]
    async fn test_fetch_ok() {
        let base = spawn_server().await;
        let source = HttpDataSource::new(&base, "/data", None).unwrap();

        let body = source.fetch("students.json").await.unwrap();
        assert_eq!(body, br#"{"recentEnrollments": []}"#.to_vec());
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_status_error() {
        let base = spawn_server().await;
        let source = HttpDataSource::new(&base, "/data", None).unwrap();

        let result = source.fetch("courses.json").await;
        assert!(matches!(result, Err(LoadError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind then drop to get a port with nothing listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpDataSource::new(&format!("http://{}", addr), "/data", Some(2000)).unwrap();
        let result = source.fetch("courses.json").await;

        assert!(matches!(result, Err(LoadError::Network(_))));
    }
}
