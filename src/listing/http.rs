//! HTTP listing source backed by reqwest

use super::{ListingError, ListingPage, ListingSource};
use crate::config::ListingConfig;
use futures::future::BoxFuture;
use serde::Deserialize;

/// User-Agent sent with every listing request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Listing source for the real REST API
pub struct HttpListing {
    client: reqwest::Client,
}

impl HttpListing {
    /// Create a client honoring the configured timeout (none when 0)
    pub fn new(config: &ListingConfig) -> Result<Self, ListingError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            ListingError::Network(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<ListingPage, ListingError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ListingError::from_reqwest(e, url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ListingError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message: service_error_message(&body),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ListingError::from_reqwest(e, url))?;

        ListingPage::parse(&body)
    }
}

impl ListingSource for HttpListing {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch_page<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<ListingPage, ListingError>> {
        Box::pin(self.get(url))
    }
}

/// The service reports failures as `{"error": "There is nothing here"}`
fn service_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ServiceError {
        error: String,
    }

    serde_json::from_str::<ServiceError>(body)
        .ok()
        .map(|e| e.error)
}
