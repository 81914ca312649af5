//! Page state and fetch status

use crate::listing::{CharacterRecord, ListingError, ListingPage};

/// The page currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Link of the page being shown (or being fetched)
    pub current_link: String,
    pub prev_link: Option<String>,
    pub next_link: Option<String>,
    /// 1-based, maintained locally; the service does not echo it
    pub page_number: u32,
    pub records: Vec<CharacterRecord>,
    /// Total records across all pages, when the service reports it
    pub total_count: Option<u64>,
    /// Total pages, when the service reports it
    pub total_pages: Option<u32>,
}

impl PageState {
    pub fn new(start_link: impl Into<String>) -> Self {
        Self {
            current_link: start_link.into(),
            prev_link: None,
            next_link: None,
            page_number: 1,
            records: Vec::new(),
            total_count: None,
            total_pages: None,
        }
    }

    /// Replace links and records with a freshly loaded page
    pub fn replace_with(&mut self, page: ListingPage) {
        self.prev_link = page.info.prev;
        self.next_link = page.info.next;
        self.total_count = page.info.count;
        self.total_pages = page.info.pages;
        self.records = page.results;
    }

    /// "Page 3" or "Page 3 / 42"
    pub fn label(&self) -> String {
        match self.total_pages {
            Some(total) => format!("Page {} / {}", self.page_number, total),
            None => format!("Page {}", self.page_number),
        }
    }
}

/// Where the page link and counter point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePosition {
    pub link: String,
    pub number: u32,
}

/// Lifecycle of the most recent read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Loaded,
    FetchFailed(ListingError),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&ListingError> {
        match self {
            FetchStatus::FetchFailed(err) => Some(err),
            _ => None,
        }
    }
}
