//! Detail overlay model
//!
//! What the overlay shows for a record, independent of how it is drawn.

use crate::listing::{CharacterRecord, Place};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Which place feeds the overlay's location block
///
/// `Origin` repeats the origin place in the location block, matching older
/// builds of this view. `Location` shows the record's current location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationSource {
    Origin,
    #[default]
    Location,
}

impl LocationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationSource::Origin => "origin",
            LocationSource::Location => "location",
        }
    }

    /// The place shown under "Location" for `record`
    pub fn place<'a>(&self, record: &'a CharacterRecord) -> &'a Place {
        match self {
            LocationSource::Origin => &record.origin,
            LocationSource::Location => &record.location,
        }
    }
}

impl FromStr for LocationSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "origin" => Ok(LocationSource::Origin),
            "location" => Ok(LocationSource::Location),
            other => Err(format!(
                "unknown location source '{}' (expected origin or location)",
                other
            )),
        }
    }
}

impl fmt::Display for LocationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overlay visibility; the record is owned so page changes cannot invalidate it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Hidden,
    Shown(Box<CharacterRecord>),
}

impl DetailState {
    pub fn record(&self) -> Option<&CharacterRecord> {
        match self {
            DetailState::Hidden => None,
            DetailState::Shown(record) => Some(record),
        }
    }
}

/// One labelled line of the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Labelled fields for the overlay, in display order
pub fn detail_fields(record: &CharacterRecord, source: LocationSource) -> Vec<DetailField> {
    let location = source.place(record);
    let created = match humanize_created(&record.created) {
        Some(human) => format!("{} ({})", record.created, human),
        None => record.created.clone(),
    };

    vec![
        DetailField::new("Image", record.image.as_str()),
        DetailField::new("Name", record.name.as_str()),
        DetailField::new("Gender", record.gender.as_str()),
        DetailField::new("Species", record.species.as_str()),
        DetailField::new("Type", or_dash(&record.subtype)),
        DetailField::new("Status", record.status.as_str()),
        DetailField::new("Origin", record.origin.name.as_str()),
        DetailField::new("Origin URL", or_dash(&record.origin.url)),
        DetailField::new("Location", location.name.as_str()),
        DetailField::new("Location URL", or_dash(&location.url)),
        DetailField::new("Episodes", record.episode.len().to_string()),
        DetailField::new("URL", record.url.as_str()),
        DetailField::new("Created", created),
    ]
}

/// Plain-text rendering used for the clipboard
pub fn format_detail_text(record: &CharacterRecord, source: LocationSource) -> String {
    let fields = detail_fields(record, source);
    let width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);

    fields
        .iter()
        .map(|f| format!("{:<width$}  {}", f.label, f.value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// "Jan 10, 2018" from an RFC 3339 timestamp
pub fn humanize_created(created: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(created)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).format("%b %-d, %Y").to_string())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::demo::demo_pages;

    fn toxic_rick() -> CharacterRecord {
        demo_pages()
            .into_iter()
            .flat_map(|p| p.results)
            .find(|r| r.id == 361)
            .unwrap()
    }

    fn value<'a>(fields: &'a [DetailField], label: &str) -> &'a str {
        fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
            .unwrap()
    }

    #[test]
    fn test_toxic_rick_fields() {
        let fields = detail_fields(&toxic_rick(), LocationSource::Location);
        assert_eq!(value(&fields, "Name"), "Toxic Rick");
        assert_eq!(value(&fields, "Status"), "Dead");
        assert_eq!(value(&fields, "Species"), "Humanoid");
        assert_eq!(value(&fields, "Gender"), "Male");
        assert_eq!(value(&fields, "Type"), "Rick's Toxic Side");
        assert_eq!(value(&fields, "Origin"), "Alien Spa");
        assert_eq!(
            value(&fields, "Origin URL"),
            "https://rickandmortyapi.com/api/location/64"
        );
        assert_eq!(value(&fields, "Episodes"), "1");
    }

    #[test]
    fn test_location_mapping_uses_location() {
        let fields = detail_fields(&toxic_rick(), LocationSource::Location);
        assert_eq!(value(&fields, "Location"), "Earth");
        assert_eq!(
            value(&fields, "Location URL"),
            "https://rickandmortyapi.com/api/location/20"
        );
    }

    #[test]
    fn test_location_mapping_compat_uses_origin() {
        let fields = detail_fields(&toxic_rick(), LocationSource::Origin);
        assert_eq!(value(&fields, "Location"), "Alien Spa");
        assert_eq!(
            value(&fields, "Location URL"),
            "https://rickandmortyapi.com/api/location/64"
        );
    }

    #[test]
    fn test_empty_subtype_shows_dash() {
        let rick = demo_pages().remove(0).results.remove(0);
        let fields = detail_fields(&rick, LocationSource::Location);
        assert_eq!(value(&fields, "Type"), "-");
    }

    #[test]
    fn test_humanize_created() {
        assert_eq!(
            humanize_created("2018-01-10T18:20:41.703Z").as_deref(),
            Some("Jan 10, 2018")
        );
        assert_eq!(humanize_created("yesterday"), None);
    }

    #[test]
    fn test_location_source_from_str() {
        assert_eq!("ORIGIN".parse::<LocationSource>(), Ok(LocationSource::Origin));
        assert_eq!(
            "location".parse::<LocationSource>(),
            Ok(LocationSource::Location)
        );
        assert!("planet".parse::<LocationSource>().is_err());
    }

    #[test]
    fn test_detail_text_lists_every_field() {
        let text = format_detail_text(&toxic_rick(), LocationSource::Location);
        assert!(text.contains("Toxic Rick"));
        assert!(text.contains("Jan 10, 2018"));
        assert_eq!(text.lines().count(), 13);
    }
}
