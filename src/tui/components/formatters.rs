// Text formatters
//
// Shared formatting utilities for cards, bars and overlays.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a large number with commas for readability
///
/// # Examples
/// ```ignore
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, ch) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, ch);
    }

    result
}

/// Truncate to at most `max` display columns, ending in "…" when cut
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Up to two initials standing in for the avatar ("Rick Sanchez" → "RS")
pub fn monogram(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();

    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

/// Last path segment of the avatar URL ("…/avatar/361.jpeg" → "361.jpeg")
pub fn avatar_file(image_url: &str) -> &str {
    image_url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(826), "826");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Rick Sanchez", 20), "Rick Sanchez");
        assert_eq!(truncate_to_width("Abadango Cluster Princess", 10), "Abadango …");
        assert_eq!(truncate_to_width("Rick", 0), "");
        // Wide glyphs count double
        assert_eq!(truncate_to_width("漢字漢字", 4), "漢…");
    }

    #[test]
    fn test_monogram() {
        assert_eq!(monogram("Rick Sanchez"), "RS");
        assert_eq!(monogram("Abadango Cluster Princess"), "AC");
        assert_eq!(monogram("Unity"), "U");
        assert_eq!(monogram("  "), "?");
        assert_eq!(monogram("Mr. Meeseeks"), "MM");
    }

    #[test]
    fn test_avatar_file() {
        assert_eq!(
            avatar_file("https://rickandmortyapi.com/api/character/avatar/361.jpeg"),
            "361.jpeg"
        );
        assert_eq!(avatar_file(""), "-");
    }
}
