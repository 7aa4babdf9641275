//! HTTP document retrieval via reqwest.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, trace, warn};

use super::{DocumentFetcher, FetchError};

const USER_AGENT: &str = concat!("sealayer/", env!("CARGO_PKG_VERSION"));

/// Fetches documents from `<base_url>/<name>` with a shared pooled
/// client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Build a fetcher for a base URL. A trailing slash on the base is
    /// tolerated. `timeout` bounds each whole request, connect included.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn document_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
        let url = self.document_url(name);
        let client = self.client.clone();
        async move {
            debug!(url = %url, "fetching catalogue document");

            let response = client.get(&url).send().await.map_err(|e| {
                warn!(url = %url, error = %e, "document request failed");
                FetchError::Transport {
                    url: url.clone(),
                    message: e.to_string(),
                }
            })?;

            let status = response.status();
            if !status.is_success() {
                warn!(url = %url, status = status.as_u16(), "document request rejected");
                return Err(FetchError::HttpStatus {
                    status: status.as_u16(),
                    url,
                });
            }

            let bytes = response.bytes().await.map_err(|e| FetchError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;
            trace!(url = %url, bytes = bytes.len(), "catalogue document fetched");
            Ok(bytes.to_vec())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_url_joins_cleanly() {
        let fetcher = HttpFetcher::new("http://localhost:8000/data/", Duration::from_secs(5))
            .expect("client builds");
        assert_eq!(fetcher.base_url(), "http://localhost:8000/data");
        assert_eq!(
            fetcher.document_url("layers.json"),
            "http://localhost:8000/data/layers.json"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        // Reserved TEST-NET-1 address; nothing listens there.
        let fetcher = HttpFetcher::new("http://192.0.2.1:9/data", Duration::from_millis(200))
            .expect("client builds");
        let error = fetcher.fetch("layers.json").await.unwrap_err();
        assert!(matches!(error, FetchError::Transport { .. }), "{error:?}");
    }
}
