// Listing service boundary
//
// Everything the browser knows about the outside world goes through
// `ListingSource`. Two implementations exist:
// - HttpListing: the real paginated REST API (reqwest)
// - DemoListing: in-memory fixture pages for offline demo mode and tests
//
// Responses are decoded and validated here so the rest of the crate only
// ever sees a typed `ListingPage` or a `ListingError`.

pub mod demo;
pub mod error;
pub mod http;
pub mod models;

pub use demo::DemoListing;
pub use error::ListingError;
pub use http::HttpListing;
pub use models::{CharacterRecord, ListingPage, PageInfo, Place};

use crate::config::Config;
use futures::future::BoxFuture;
use std::sync::Arc;

/// A source of listing pages addressed by page link
pub trait ListingSource: Send + Sync {
    /// Name for logs and the title bar
    fn name(&self) -> &'static str;

    /// Fetch and validate the page behind `url`
    fn fetch_page<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<ListingPage, ListingError>>;
}

/// Build the listing source selected by configuration
pub fn create_source(config: &Config) -> Result<Arc<dyn ListingSource>, ListingError> {
    if config.demo_mode {
        tracing::info!("Running in DEMO MODE - serving fixture pages");
        return Ok(Arc::new(DemoListing::new(demo::DEMO_LATENCY)));
    }

    let source = HttpListing::new(&config.listing)?;
    tracing::debug!("Listing source: {} ({})", source.name(), config.listing.api_url);
    Ok(Arc::new(source))
}
