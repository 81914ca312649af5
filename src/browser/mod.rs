// Character browser state container
//
// `Browser` owns all view state: the loaded page, the fetch status, the filter
// query and its derived view, and the detail selection. It changes only
// through `apply(Command)`, which may return an `Effect` for the runtime.
//
// Fetch lifecycle:
//   navigation moves link + counter optimistically and returns Effect::Fetch
//   PageLoaded with the current generation commits the page
//   FetchFailed with the current generation rolls link + counter back
//   any completion with an older generation is dropped
//
// Navigation is refused while a read is in flight; Reload supersedes it
// instead (the fetcher aborts the old task).

pub mod command;
pub mod detail;
pub mod fetcher;
pub mod filter;
pub mod page;

pub use command::{Command, Effect};
pub use detail::{DetailField, DetailState, LocationSource};
pub use fetcher::Fetcher;
pub use page::{FetchStatus, PagePosition, PageState};

use crate::listing::{CharacterRecord, ListingError, ListingPage};

/// A read that has been issued and not yet completed
#[derive(Debug, Clone)]
struct PendingFetch {
    generation: u64,
    /// Link and counter the read is for
    target: PagePosition,
    /// Link and counter to restore on failure
    previous: PagePosition,
}

pub struct Browser {
    page: PageState,
    status: FetchStatus,
    query: String,
    /// Indices into `page.records` matching `query`
    filtered: Vec<usize>,
    detail: DetailState,
    location_source: LocationSource,
    generation: u64,
    pending: Option<PendingFetch>,
    /// The last navigation that failed, replayed by Reload
    failed: Option<PendingFetch>,
}

impl Browser {
    pub fn new(start_link: impl Into<String>, location_source: LocationSource) -> Self {
        Self {
            page: PageState::new(start_link),
            status: FetchStatus::Loading,
            query: String::new(),
            filtered: Vec::new(),
            detail: DetailState::Hidden,
            location_source,
            generation: 0,
            pending: None,
            failed: None,
        }
    }

    /// Apply a command, returning the side effect it requires (if any)
    pub fn apply(&mut self, command: Command) -> Option<Effect> {
        tracing::debug!("Browser command: {}", command.name());

        match command {
            Command::Start => {
                let here = self.position();
                self.issue(here.clone(), here)
            }

            Command::SetQuery(query) => {
                self.query = query;
                self.refilter();
                None
            }
            Command::PushQueryChar(c) => {
                self.query.push(c);
                self.refilter();
                None
            }
            Command::PopQueryChar => {
                self.query.pop();
                self.refilter();
                None
            }
            Command::ClearQuery => {
                self.query.clear();
                self.refilter();
                None
            }

            Command::GoToNextPage => {
                if !self.can_go_next() {
                    return None;
                }
                let link = self.page.next_link.clone()?;
                let target = PagePosition {
                    link,
                    number: self.page.page_number.saturating_add(1),
                };
                self.navigate(target)
            }
            Command::GoToPreviousPage => {
                if !self.can_go_previous() {
                    return None;
                }
                let link = self.page.prev_link.clone()?;
                let target = PagePosition {
                    link,
                    number: self.page.page_number.saturating_sub(1).max(1),
                };
                self.navigate(target)
            }
            Command::Reload => self.reload(),

            Command::Select(idx) => {
                let record = self.filtered_record(idx)?.clone();
                self.detail = DetailState::Shown(Box::new(record));
                None
            }
            Command::SelectNext => {
                self.step_selection(1);
                None
            }
            Command::SelectPrevious => {
                self.step_selection(-1);
                None
            }
            Command::CloseDetail => {
                self.detail = DetailState::Hidden;
                None
            }

            Command::PageLoaded { generation, page } => {
                self.on_loaded(generation, page);
                None
            }
            Command::FetchFailed { generation, error } => {
                self.on_failed(generation, error);
                None
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn location_source(&self) -> LocationSource {
        self.location_source
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_loading() && self.page.prev_link.is_some()
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading() && self.page.next_link.is_some()
    }

    /// Number of records in the filtered view
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Record at `idx` of the filtered view
    pub fn filtered_record(&self, idx: usize) -> Option<&CharacterRecord> {
        self.filtered
            .get(idx)
            .and_then(|&record_idx| self.page.records.get(record_idx))
    }

    /// The filtered view, in page order
    pub fn filtered_records(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.filtered
            .iter()
            .filter_map(|&idx| self.page.records.get(idx))
    }

    /// Position of the shown record within the filtered view
    pub fn selected_position(&self) -> Option<usize> {
        let shown = self.detail.record()?;
        self.filtered_records().position(|r| r.id == shown.id)
    }

    /// Overlay fields for the shown record
    pub fn detail_fields(&self) -> Option<Vec<DetailField>> {
        self.detail
            .record()
            .map(|record| detail::detail_fields(record, self.location_source))
    }

    // ─────────────────────────────────────────────────────────────
    // Fetch lifecycle
    // ─────────────────────────────────────────────────────────────

    fn position(&self) -> PagePosition {
        PagePosition {
            link: self.page.current_link.clone(),
            number: self.page.page_number,
        }
    }

    fn navigate(&mut self, target: PagePosition) -> Option<Effect> {
        let previous = self.position();
        self.issue(target, previous)
    }

    fn reload(&mut self) -> Option<Effect> {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(
                "Reload supersedes in-flight read (generation {})",
                pending.generation
            );
            return self.issue(pending.target, pending.previous);
        }

        if let Some(failed) = self.failed.take() {
            tracing::info!("Retrying {}", failed.target.link);
            return self.issue(failed.target, failed.previous);
        }

        let here = self.position();
        self.issue(here.clone(), here)
    }

    /// Point link + counter at `target` and request a read for it
    fn issue(&mut self, target: PagePosition, previous: PagePosition) -> Option<Effect> {
        self.generation += 1;
        self.page.current_link = target.link.clone();
        self.page.page_number = target.number;
        self.status = FetchStatus::Loading;
        self.failed = None;

        let effect = Effect::Fetch {
            generation: self.generation,
            url: target.link.clone(),
        };
        self.pending = Some(PendingFetch {
            generation: self.generation,
            target,
            previous,
        });
        Some(effect)
    }

    /// Take the pending fetch if `generation` is current
    fn take_current(&mut self, generation: u64) -> Option<PendingFetch> {
        match &self.pending {
            Some(pending) if pending.generation == generation => self.pending.take(),
            _ => {
                tracing::debug!(
                    "Discarding stale fetch result (generation {}, current {})",
                    generation,
                    self.generation
                );
                None
            }
        }
    }

    fn on_loaded(&mut self, generation: u64, page: ListingPage) {
        let Some(pending) = self.take_current(generation) else {
            return;
        };

        tracing::info!(
            "Loaded page {} ({} records) from {}",
            pending.target.number,
            page.results.len(),
            pending.target.link
        );

        self.page.replace_with(page);
        self.status = FetchStatus::Loaded;
        self.refilter();
    }

    fn on_failed(&mut self, generation: u64, error: ListingError) {
        let Some(pending) = self.take_current(generation) else {
            return;
        };

        tracing::warn!(
            "Failed to load page {} ({}): {}",
            pending.target.number,
            pending.target.link,
            error
        );

        // Records stay; link and counter go back to the page on screen
        self.page.current_link = pending.previous.link.clone();
        self.page.page_number = pending.previous.number;
        self.status = FetchStatus::FetchFailed(error);
        self.failed = Some(pending);
    }

    // ─────────────────────────────────────────────────────────────
    // Derived state
    // ─────────────────────────────────────────────────────────────

    fn refilter(&mut self) {
        self.filtered = filter::matching_indices(&self.query, &self.page.records);
    }

    fn step_selection(&mut self, delta: isize) {
        let Some(pos) = self.selected_position() else {
            return;
        };
        let Some(next) = pos.checked_add_signed(delta) else {
            return;
        };
        if let Some(record) = self.filtered_record(next).cloned() {
            self.detail = DetailState::Shown(Box::new(record));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::demo::{demo_pages, page_link};

    const START: &str = "https://rickandmortyapi.com/api/character";

    fn fetch_generation(effect: Option<Effect>) -> u64 {
        match effect {
            Some(Effect::Fetch { generation, .. }) => generation,
            None => panic!("expected a fetch effect"),
        }
    }

    /// Browser with page 1 of the fixture loaded
    fn loaded_browser() -> Browser {
        let mut browser = Browser::new(START, LocationSource::Location);
        let generation = fetch_generation(browser.apply(Command::Start));
        browser.apply(Command::PageLoaded {
            generation,
            page: demo_pages().remove(0),
        });
        browser
    }

    /// Run a navigation command and complete it with fixture page `n`
    fn navigate_ok(browser: &mut Browser, command: Command, n: usize) {
        let generation = fetch_generation(browser.apply(command));
        browser.apply(Command::PageLoaded {
            generation,
            page: demo_pages().remove(n - 1),
        });
    }

    fn visible_names(browser: &Browser) -> Vec<String> {
        browser.filtered_records().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_start_issues_one_fetch_for_start_link() {
        let mut browser = Browser::new(START, LocationSource::Location);
        assert_eq!(
            browser.apply(Command::Start),
            Some(Effect::Fetch {
                generation: 1,
                url: START.to_string()
            })
        );
        assert!(browser.is_loading());
    }

    #[test]
    fn test_first_page_has_previous_disabled() {
        let browser = loaded_browser();
        assert_eq!(browser.status(), &FetchStatus::Loaded);
        assert_eq!(browser.page().page_number, 1);
        assert!(!browser.can_go_previous());
        assert!(browser.can_go_next());
    }

    #[test]
    fn test_disabled_navigation_is_a_no_op() {
        let mut browser = loaded_browser();
        assert_eq!(browser.apply(Command::GoToPreviousPage), None);
        assert_eq!(browser.page().page_number, 1);
    }

    #[test]
    fn test_counter_never_drops_below_one() {
        // Starting mid-listing: a previous link exists but the counter is 1
        let mut browser = Browser::new(&page_link(2), LocationSource::Location);
        let generation = fetch_generation(browser.apply(Command::Start));
        browser.apply(Command::PageLoaded {
            generation,
            page: demo_pages().remove(1),
        });
        assert!(browser.can_go_previous());

        navigate_ok(&mut browser, Command::GoToPreviousPage, 1);
        assert_eq!(browser.page().page_number, 1);
    }

    #[test]
    fn test_next_then_previous_counter() {
        let mut browser = loaded_browser();

        navigate_ok(&mut browser, Command::GoToNextPage, 2);
        navigate_ok(&mut browser, Command::GoToNextPage, 3);
        assert_eq!(browser.page().page_number, 3);
        assert!(!browser.can_go_next());

        navigate_ok(&mut browser, Command::GoToPreviousPage, 2);
        // 1 + 2 - 1
        assert_eq!(browser.page().page_number, 2);
        assert_eq!(browser.page().current_link, page_link(2));
    }

    #[test]
    fn test_navigation_targets_server_link() {
        let mut browser = loaded_browser();
        match browser.apply(Command::GoToNextPage) {
            Some(Effect::Fetch { url, .. }) => assert_eq!(url, page_link(2)),
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_navigation_disabled_while_loading() {
        let mut browser = loaded_browser();
        assert!(browser.apply(Command::GoToNextPage).is_some());
        assert!(!browser.can_go_next());
        assert_eq!(browser.apply(Command::GoToNextPage), None);
        assert_eq!(browser.page().page_number, 2);
    }

    #[test]
    fn test_filter_rick() {
        let mut browser = loaded_browser();
        let template = browser.page().records[0].clone();
        let records = ["Rick Sanchez", "Morty Smith", "Toxic Rick"]
            .iter()
            .enumerate()
            .map(|(idx, name)| CharacterRecord {
                id: idx as u64 + 1,
                name: name.to_string(),
                ..template.clone()
            })
            .collect();

        let generation = fetch_generation(browser.apply(Command::Reload));
        browser.apply(Command::PageLoaded {
            generation,
            page: ListingPage {
                info: Default::default(),
                results: records,
            },
        });

        browser.apply(Command::SetQuery("Rick".to_string()));
        assert_eq!(visible_names(&browser), vec!["Rick Sanchez", "Toxic Rick"]);

        browser.apply(Command::PopQueryChar);
        browser.apply(Command::PushQueryChar('K'));
        assert_eq!(visible_names(&browser), vec!["Rick Sanchez", "Toxic Rick"]);

        browser.apply(Command::ClearQuery);
        assert_eq!(browser.filtered_len(), 3);
    }

    #[test]
    fn test_filter_survives_page_change() {
        let mut browser = loaded_browser();
        browser.apply(Command::SetQuery("rick".to_string()));
        navigate_ok(&mut browser, Command::GoToNextPage, 2);

        assert_eq!(browser.query(), "rick");
        assert_eq!(
            visible_names(&browser),
            vec!["Adjudicator Rick", "Alien Rick", "Pickle Rick"]
        );
    }

    #[test]
    fn test_select_and_close() {
        let mut browser = loaded_browser();
        browser.apply(Command::Select(1));
        assert_eq!(browser.detail().record().unwrap().name, "Morty Smith");

        browser.apply(Command::Select(0));
        assert_eq!(browser.detail().record().unwrap().name, "Rick Sanchez");

        browser.apply(Command::CloseDetail);
        assert_eq!(browser.detail(), &DetailState::Hidden);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut browser = loaded_browser();
        browser.apply(Command::Select(99));
        assert_eq!(browser.detail(), &DetailState::Hidden);
    }

    #[test]
    fn test_select_toxic_rick_shows_its_fields() {
        let mut browser = loaded_browser();
        navigate_ok(&mut browser, Command::GoToNextPage, 2);
        navigate_ok(&mut browser, Command::GoToNextPage, 3);
        browser.apply(Command::SetQuery("toxic rick".to_string()));
        browser.apply(Command::Select(0));

        let fields = browser.detail_fields().unwrap();
        let get = |label: &str| {
            fields
                .iter()
                .find(|f| f.label == label)
                .map(|f| f.value.clone())
                .unwrap()
        };
        assert_eq!(get("Name"), "Toxic Rick");
        assert_eq!(get("Status"), "Dead");
        assert_eq!(get("Species"), "Humanoid");
        assert_eq!(get("Gender"), "Male");
        assert_eq!(get("Origin"), "Alien Spa");
    }

    #[test]
    fn test_select_next_and_previous_walk_filtered_view() {
        let mut browser = loaded_browser();
        browser.apply(Command::SetQuery("smith".to_string()));
        browser.apply(Command::Select(0));
        assert_eq!(browser.detail().record().unwrap().name, "Morty Smith");

        browser.apply(Command::SelectNext);
        assert_eq!(browser.detail().record().unwrap().name, "Summer Smith");

        browser.apply(Command::SelectPrevious);
        browser.apply(Command::SelectPrevious);
        assert_eq!(browser.detail().record().unwrap().name, "Morty Smith");
        assert_eq!(browser.selected_position(), Some(0));
    }

    #[test]
    fn test_failure_keeps_records_and_rolls_back() {
        let mut browser = loaded_browser();
        let before = browser.page().records.clone();

        let generation = fetch_generation(browser.apply(Command::GoToNextPage));
        assert_eq!(browser.page().page_number, 2);

        browser.apply(Command::FetchFailed {
            generation,
            error: ListingError::Network("connection reset".to_string()),
        });

        assert!(matches!(browser.status(), FetchStatus::FetchFailed(_)));
        assert_eq!(browser.page().records, before);
        assert_eq!(browser.page().page_number, 1);
        assert_eq!(browser.page().current_link, START);
        assert!(browser.can_go_next());
    }

    #[test]
    fn test_reload_after_failure_retries_navigation() {
        let mut browser = loaded_browser();
        let generation = fetch_generation(browser.apply(Command::GoToNextPage));
        browser.apply(Command::FetchFailed {
            generation,
            error: ListingError::Timeout {
                url: page_link(2),
            },
        });

        match browser.apply(Command::Reload) {
            Some(Effect::Fetch { url, .. }) => assert_eq!(url, page_link(2)),
            other => panic!("unexpected effect {:?}", other),
        }
        assert_eq!(browser.page().page_number, 2);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut browser = loaded_browser();
        let stale = fetch_generation(browser.apply(Command::GoToNextPage));
        let current = fetch_generation(browser.apply(Command::Reload));
        assert!(current > stale);

        // The superseded read completes first with the wrong page
        browser.apply(Command::PageLoaded {
            generation: stale,
            page: demo_pages().remove(2),
        });
        assert!(browser.is_loading());
        assert_eq!(browser.page().records[0].name, "Rick Sanchez");

        browser.apply(Command::PageLoaded {
            generation: current,
            page: demo_pages().remove(1),
        });
        assert_eq!(browser.status(), &FetchStatus::Loaded);
        assert_eq!(browser.page().records[0].name, "Adjudicator Rick");
        assert_eq!(browser.page().page_number, 2);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut browser = loaded_browser();
        browser.apply(Command::FetchFailed {
            generation: 0,
            error: ListingError::Invalid("late".to_string()),
        });
        assert_eq!(browser.status(), &FetchStatus::Loaded);
    }

    #[test]
    fn test_location_source_flows_into_detail() {
        let mut browser = Browser::new(START, LocationSource::Origin);
        let generation = fetch_generation(browser.apply(Command::Start));
        browser.apply(Command::PageLoaded {
            generation,
            page: demo_pages().remove(0),
        });
        browser.apply(Command::Select(0));

        let fields = browser.detail_fields().unwrap();
        let location = fields.iter().find(|f| f.label == "Location").unwrap();
        assert_eq!(location.value, "Earth (C-137)");
    }
}
