//! Commands accepted by the browser and the effects it asks the runtime to run

use crate::listing::{ListingError, ListingPage};

/// Everything that can change browser state
///
/// User intents and fetch completions share one enum so the event loop has
/// a single entry point into [`super::Browser::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Issue the initial read for the start link
    Start,

    // Filter
    SetQuery(String),
    PushQueryChar(char),
    PopQueryChar,
    ClearQuery,

    // Pagination
    GoToPreviousPage,
    GoToNextPage,
    /// Re-read the current link, or retry the navigation that just failed
    Reload,

    // Detail overlay
    /// Open the overlay for the record at this position of the filtered view
    Select(usize),
    /// Move the overlay to the next record of the filtered view
    SelectNext,
    /// Move the overlay to the previous record of the filtered view
    SelectPrevious,
    CloseDetail,

    // Fetch completions
    PageLoaded {
        generation: u64,
        page: ListingPage,
    },
    FetchFailed {
        generation: u64,
        error: ListingError,
    },
}

impl Command {
    /// Short name for debug logs (completions carry whole pages)
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "Start",
            Command::SetQuery(_) => "SetQuery",
            Command::PushQueryChar(_) => "PushQueryChar",
            Command::PopQueryChar => "PopQueryChar",
            Command::ClearQuery => "ClearQuery",
            Command::GoToPreviousPage => "GoToPreviousPage",
            Command::GoToNextPage => "GoToNextPage",
            Command::Reload => "Reload",
            Command::Select(_) => "Select",
            Command::SelectNext => "SelectNext",
            Command::SelectPrevious => "SelectPrevious",
            Command::CloseDetail => "CloseDetail",
            Command::PageLoaded { .. } => "PageLoaded",
            Command::FetchFailed { .. } => "FetchFailed",
        }
    }
}

/// Side effect requested by the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read `url`; report back tagged with `generation`
    Fetch { generation: u64, url: String },
}
