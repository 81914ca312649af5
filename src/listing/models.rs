//! Wire models for the character listing service
//!
//! Shapes returned by `GET /api/character`. Unknown fields are ignored so the
//! service can grow new keys without breaking the browser.

use super::error::ListingError;
use serde::{Deserialize, Serialize};

/// A named reference to another resource (origin planet, current location)
///
/// The service uses `{"name": "unknown", "url": ""}` when the place is not known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub url: String,
}

/// One character as delivered by the listing service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub species: String,
    /// Subtype ("Rick's Toxic Side"), frequently empty
    #[serde(rename = "type", default)]
    pub subtype: String,
    pub gender: String,
    pub origin: Place,
    pub location: Place,
    /// Avatar image URL
    pub image: String,
    /// Episode URLs the character appears in
    #[serde(default)]
    pub episode: Vec<String>,
    /// Canonical resource URL
    pub url: String,
    /// Creation timestamp (ISO 8601)
    pub created: String,
}

/// Pagination descriptor (`info` object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of records across all pages
    #[serde(default)]
    pub count: Option<u64>,
    /// Total number of pages
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    pub info: PageInfo,
    pub results: Vec<CharacterRecord>,
}

impl ListingPage {
    /// Decode and validate a response body
    ///
    /// Schema violations report the JSON path of the offending value
    /// (e.g. `results[3].origin.name`). Well-formed payloads then go through
    /// [`ListingPage::validate`].
    pub fn parse(body: &[u8]) -> Result<Self, ListingError> {
        let de = &mut serde_json::Deserializer::from_slice(body);
        let page: ListingPage =
            serde_path_to_error::deserialize(de).map_err(|e| ListingError::Decode {
                path: e.path().to_string(),
                message: e.inner().to_string(),
            })?;

        let page = page.normalized();
        page.validate()?;
        Ok(page)
    }

    /// Treat empty pagination links the same as absent ones
    fn normalized(mut self) -> Self {
        self.info.next = self.info.next.filter(|link| !link.trim().is_empty());
        self.info.prev = self.info.prev.filter(|link| !link.trim().is_empty());
        self
    }

    /// Semantic checks the JSON schema cannot express
    pub fn validate(&self) -> Result<(), ListingError> {
        for (field, link) in [("info.next", &self.info.next), ("info.prev", &self.info.prev)] {
            if let Some(link) = link {
                validate_page_link(field, link)?;
            }
        }

        for (idx, record) in self.results.iter().enumerate() {
            if record.id == 0 {
                return Err(ListingError::Invalid(format!(
                    "results[{}].id must be positive",
                    idx
                )));
            }
        }

        Ok(())
    }
}

/// Page links are followed verbatim, so they must be absolute http(s) URLs
fn validate_page_link(field: &str, link: &str) -> Result<(), ListingError> {
    let url = reqwest::Url::parse(link)
        .map_err(|e| ListingError::Invalid(format!("{} is not a URL ({}): {}", field, e, link)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ListingError::Invalid(format!(
            "{} has unsupported scheme '{}': {}",
            field, other, link
        ))),
    }
}
