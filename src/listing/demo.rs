//! Demo listing source
//!
//! Serves three linked fixture pages from memory so the browser can be
//! explored without network access (`CARDEX_DEMO=1`). Links point at the real
//! service URLs; only the `page` query parameter is consulted.

use super::{CharacterRecord, ListingError, ListingPage, ListingSource, PageInfo, Place};
use futures::future::BoxFuture;
use std::time::Duration;

/// Simulated round trip so the Loading state is visible in the TUI
pub const DEMO_LATENCY: Duration = Duration::from_millis(400);

const BASE: &str = "https://rickandmortyapi.com/api";

/// In-memory listing with a fixed set of pages
pub struct DemoListing {
    pages: Vec<ListingPage>,
    latency: Duration,
}

impl DemoListing {
    pub fn new(latency: Duration) -> Self {
        Self {
            pages: demo_pages(),
            latency,
        }
    }

    /// Resolve a link to a page index (1-based page number)
    fn lookup(&self, url: &str) -> Result<&ListingPage, ListingError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| ListingError::Network(format!("invalid URL {}: {}", url, e)))?;

        let number = parsed
            .query_pairs()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.parse::<usize>().unwrap_or(0))
            .unwrap_or(1);

        number
            .checked_sub(1)
            .and_then(|idx| self.pages.get(idx))
            .ok_or_else(|| ListingError::Status {
                status: 404,
                url: url.to_string(),
                message: Some("There is nothing here".to_string()),
            })
    }
}

impl ListingSource for DemoListing {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn fetch_page<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<ListingPage, ListingError>> {
        Box::pin(async move {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            let page = self.lookup(url)?.clone();
            tracing::debug!("Demo page served: {} ({} records)", url, page.results.len());
            Ok(page)
        })
    }
}

/// Link for page `n` of the character listing
pub fn page_link(n: u32) -> String {
    format!("{}/character?page={}", BASE, n)
}

fn place(name: &str, location_id: Option<u32>) -> Place {
    Place {
        name: name.to_string(),
        url: location_id
            .map(|id| format!("{}/location/{}", BASE, id))
            .unwrap_or_default(),
    }
}

#[allow(clippy::too_many_arguments)]
fn character(
    id: u64,
    name: &str,
    status: &str,
    species: &str,
    subtype: &str,
    gender: &str,
    origin: Place,
    location: Place,
    episodes: &[u32],
    created: &str,
) -> CharacterRecord {
    CharacterRecord {
        id,
        name: name.to_string(),
        status: status.to_string(),
        species: species.to_string(),
        subtype: subtype.to_string(),
        gender: gender.to_string(),
        origin,
        location,
        image: format!("{}/character/avatar/{}.jpeg", BASE, id),
        episode: episodes
            .iter()
            .map(|ep| format!("{}/episode/{}", BASE, ep))
            .collect(),
        url: format!("{}/character/{}", BASE, id),
        created: created.to_string(),
    }
}

/// The fixture: three pages, linked both ways
pub fn demo_pages() -> Vec<ListingPage> {
    let earth_c137 = || place("Earth (C-137)", Some(1));
    let citadel = || place("Citadel of Ricks", Some(3));
    let replacement = || place("Earth (Replacement Dimension)", Some(20));

    let page_one = vec![
        character(1, "Rick Sanchez", "Alive", "Human", "", "Male", earth_c137(), citadel(), &[1, 2, 3, 4, 5], "2017-11-04T18:48:46.250Z"),
        character(2, "Morty Smith", "Alive", "Human", "", "Male", place("unknown", None), citadel(), &[1, 2, 3, 4], "2017-11-04T18:50:21.651Z"),
        character(3, "Summer Smith", "Alive", "Human", "", "Female", replacement(), replacement(), &[6, 7, 8], "2017-11-04T19:09:56.428Z"),
        character(4, "Beth Smith", "Alive", "Human", "", "Female", replacement(), replacement(), &[6, 7], "2017-11-04T19:22:43.665Z"),
        character(5, "Jerry Smith", "Alive", "Human", "", "Male", replacement(), replacement(), &[6, 7, 8, 9], "2017-11-04T19:26:56.301Z"),
        character(6, "Abadango Cluster Princess", "Alive", "Alien", "", "Female", place("Abadango", Some(2)), place("Abadango", Some(2)), &[27], "2017-11-04T19:50:28.250Z"),
    ];

    let page_two = vec![
        character(8, "Adjudicator Rick", "Dead", "Human", "", "Male", place("unknown", None), citadel(), &[28], "2017-11-04T20:03:34.737Z"),
        character(15, "Alien Rick", "unknown", "Alien", "", "Male", place("unknown", None), place("Earth (Replacement Dimension)", Some(20)), &[10], "2017-11-04T20:56:13.215Z"),
        character(47, "Birdperson", "Dead", "Alien", "Bird-Person", "Male", place("Bird World", Some(15)), place("Planet Squanch", Some(35)), &[11, 22], "2017-11-05T11:13:36.842Z"),
        character(242, "Mr. Meeseeks", "Alive", "Humanoid", "Meeseeks", "Male", place("Mr. Meeseeks Box", Some(55)), place("Earth (Replacement Dimension)", Some(20)), &[5, 10], "2017-12-31T13:58:58.580Z"),
        character(265, "Pickle Rick", "Alive", "Pickle", "", "Male", earth_c137(), earth_c137(), &[24], "2017-12-31T18:51:09.097Z"),
    ];

    let page_three = vec![
        character(331, "Squanchy", "Alive", "Alien", "Cat-Person", "Male", place("Planet Squanch", Some(35)), place("Planet Squanch", Some(35)), &[11, 21], "2017-12-31T20:09:10.101Z"),
        character(361, "Toxic Rick", "Dead", "Humanoid", "Rick's Toxic Side", "Male", place("Alien Spa", Some(64)), place("Earth", Some(20)), &[27], "2018-01-10T18:20:41.703Z"),
        character(362, "Toxic Morty", "Dead", "Humanoid", "Morty's Toxic Side", "Male", place("Alien Spa", Some(64)), place("Alien Spa", Some(64)), &[27], "2018-01-10T18:21:14.587Z"),
        character(372, "Unity", "Alive", "Alien", "Hivemind", "Female", place("unknown", None), place("unknown", None), &[14, 23], "2018-01-10T18:45:22.104Z"),
    ];

    let total: u64 = (page_one.len() + page_two.len() + page_three.len()) as u64;
    let pages = [page_one, page_two, page_three];
    let count = pages.len() as u32;

    pages
        .into_iter()
        .enumerate()
        .map(|(idx, results)| {
            let n = idx as u32 + 1;
            ListingPage {
                info: PageInfo {
                    count: Some(total),
                    pages: Some(count),
                    next: (n < count).then(|| page_link(n + 1)),
                    prev: (n > 1).then(|| page_link(n - 1)),
                },
                results,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_pages_validate() {
        for page in demo_pages() {
            page.validate().unwrap();
        }
    }

    #[test]
    fn test_fixture_links_chain() {
        let pages = demo_pages();
        assert!(pages[0].info.prev.is_none());
        assert_eq!(pages[0].info.next.as_deref(), Some(page_link(2).as_str()));
        assert_eq!(pages[2].info.prev.as_deref(), Some(page_link(2).as_str()));
        assert!(pages[2].info.next.is_none());
    }

    #[tokio::test]
    async fn test_start_url_serves_first_page() {
        let demo = DemoListing::new(Duration::ZERO);
        let page = demo
            .fetch_page("https://rickandmortyapi.com/api/character")
            .await
            .unwrap();
        assert_eq!(page.results[0].name, "Rick Sanchez");
    }

    #[tokio::test]
    async fn test_toxic_rick_on_last_page() {
        let demo = DemoListing::new(Duration::ZERO);
        let page = demo.fetch_page(&page_link(3)).await.unwrap();
        let rick = page.results.iter().find(|r| r.id == 361).unwrap();
        assert_eq!(rick.name, "Toxic Rick");
        assert_eq!(rick.origin.name, "Alien Spa");
    }

    #[tokio::test]
    async fn test_unknown_page_is_not_found() {
        let demo = DemoListing::new(Duration::ZERO);
        let result = demo.fetch_page(&page_link(9)).await;
        assert!(matches!(result, Err(ListingError::Status { status: 404, .. })));
    }
}
