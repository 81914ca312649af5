//! Executes fetch effects on the tokio runtime
//!
//! Each read runs as its own task and reports back to the event loop through
//! the command channel. Starting a read aborts the one before it, so at most
//! one read is ever in flight.

use super::{Command, Effect};
use crate::listing::ListingSource;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Fetcher {
    source: Arc<dyn ListingSource>,
    tx: mpsc::Sender<Command>,
    in_flight: Option<JoinHandle<()>>,
}

impl Fetcher {
    pub fn new(source: Arc<dyn ListingSource>, tx: mpsc::Sender<Command>) -> Self {
        Self {
            source,
            tx,
            in_flight: None,
        }
    }

    /// Name of the underlying listing source
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Run an effect returned by `Browser::apply`
    pub fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::Fetch { generation, url } => self.spawn_fetch(generation, url),
        }
    }

    fn spawn_fetch(&mut self, generation: u64, url: String) {
        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                tracing::debug!("Aborting superseded read");
                previous.abort();
            }
        }

        let source = self.source.clone();
        let tx = self.tx.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let command = match source.fetch_page(&url).await {
                Ok(page) => Command::PageLoaded { generation, page },
                Err(error) => Command::FetchFailed { generation, error },
            };

            // Receiver gone means the UI is shutting down
            if tx.send(command).await.is_err() {
                tracing::debug!("Fetch result dropped: event loop closed");
            }
        }));
    }
}

impl Drop for Fetcher {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{Browser, FetchStatus, LocationSource};
    use crate::listing::demo::page_link;
    use crate::listing::{DemoListing, ListingError};
    use std::time::Duration;

    const START: &str = "https://rickandmortyapi.com/api/character";

    fn demo_fetcher(latency: Duration) -> (Fetcher, mpsc::Receiver<Command>) {
        let (tx, rx) = mpsc::channel(8);
        let source: Arc<dyn ListingSource> = Arc::new(DemoListing::new(latency));
        (Fetcher::new(source, tx), rx)
    }

    #[tokio::test]
    async fn test_fetch_reports_page_loaded() {
        let (mut fetcher, mut rx) = demo_fetcher(Duration::ZERO);
        fetcher.execute(Effect::Fetch {
            generation: 7,
            url: START.to_string(),
        });

        match rx.recv().await {
            Some(Command::PageLoaded { generation, page }) => {
                assert_eq!(generation, 7);
                assert_eq!(page.results[0].name, "Rick Sanchez");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_reports_failure() {
        let (mut fetcher, mut rx) = demo_fetcher(Duration::ZERO);
        fetcher.execute(Effect::Fetch {
            generation: 1,
            url: page_link(40),
        });

        match rx.recv().await {
            Some(Command::FetchFailed { error, .. }) => {
                assert!(matches!(error, ListingError::Status { status: 404, .. }))
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_new_fetch_aborts_previous() {
        let (mut fetcher, mut rx) = demo_fetcher(Duration::from_millis(50));
        fetcher.execute(Effect::Fetch {
            generation: 1,
            url: page_link(1),
        });
        fetcher.execute(Effect::Fetch {
            generation: 2,
            url: page_link(2),
        });

        match rx.recv().await {
            Some(Command::PageLoaded { generation, .. }) => assert_eq!(generation, 2),
            other => panic!("unexpected command {:?}", other),
        }

        // The aborted read never reports
        let late = tokio::time::timeout(Duration::from_millis(150), rx.recv()).await;
        assert!(late.is_err(), "aborted read still reported");
    }

    #[tokio::test]
    async fn test_browser_round_trip_through_fetcher() {
        let (mut fetcher, mut rx) = demo_fetcher(Duration::ZERO);
        let mut browser = Browser::new(START, LocationSource::Location);

        if let Some(effect) = browser.apply(Command::Start) {
            fetcher.execute(effect);
        }
        let loaded = rx.recv().await.unwrap();
        browser.apply(loaded);

        if let Some(effect) = browser.apply(Command::GoToNextPage) {
            fetcher.execute(effect);
        }
        let loaded = rx.recv().await.unwrap();
        browser.apply(loaded);

        assert_eq!(browser.status(), &FetchStatus::Loaded);
        assert_eq!(browser.page().page_number, 2);
        assert_eq!(browser.page().current_link, page_link(2));
    }
}
