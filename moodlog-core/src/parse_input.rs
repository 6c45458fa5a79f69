//! Parsing of inline entry input like `"yesterday: Title. Body"`.

use crate::dates::{DEFAULT_FORMATS, DateFilter, parse_date_token};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Configuration options for parsing functions.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions<'a> {
    /// The date to use as "today" for relative words.
    pub reference_date: Option<NaiveDate>,
    /// A slice of `chrono` format strings to try for parsing dates.
    pub formats: Option<&'a [&'a str]>,
}

/// Parsed result of inline text.
pub struct ParsedInline {
    pub date: NaiveDate,
    pub title: String,
    pub body: String,
    /// Whether a date was explicitly provided in the prefix.
    pub explicit_date: bool,
}

/// Splits inline input into date, title, and body.
///
/// An optional `<date>:` prefix (a relative word like `yesterday`, a weekday
/// name, or a formatted date) sets the entry date; without one the date is
/// the reference date. The title runs up to the first newline or sentence
/// end; everything after is the body.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use moodlog_core::parse_input::{ParseOptions, parse_entry};
/// let opts = ParseOptions {
///     reference_date: Some(NaiveDate::from_ymd_opt(2025, 8, 17).unwrap()),
///     ..Default::default()
/// };
///
/// let parsed = parse_entry("yesterday: Quiet morning. Slept in late.", opts);
///
/// assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2025, 8, 16).unwrap());
/// assert_eq!(parsed.title, "Quiet morning");
/// assert_eq!(parsed.body, "Slept in late.");
/// assert!(parsed.explicit_date);
/// ```
pub fn parse_entry(input: &str, options: ParseOptions) -> ParsedInline {
    let reference = options
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let formats = options.formats.unwrap_or(DEFAULT_FORMATS);

    let (date_opt, rest) = parse_prefix(input, reference, formats);
    let (title_raw, body) = split_title_body(rest.trim());
    let title = normalize_title(&title_raw);

    let (date, explicit_date) = match date_opt {
        Some(DateFilter::Single(d)) => (d, true),
        // A range prefix pins the entry to the range start.
        Some(DateFilter::Range(start, _)) => (start, true),
        None => (reference, false),
    };

    ParsedInline {
        date,
        title,
        body,
        explicit_date,
    }
}

/// Collects distinct `@tag` markers from text, alphabetically.
pub fn extract_tags(text: &str) -> Vec<String> {
    static TAG_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?m)(?:^|\s)@([A-Za-z0-9_][\w-]*)").unwrap());
    let mut tags: Vec<String> = TAG_RE
        .captures_iter(text)
        .map(|c| c[1].to_lowercase())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Try to parse a `<date>:` prefix. Returns the date (if any) and the
/// remainder after the colon.
fn parse_prefix<'a>(
    input: &'a str,
    reference: NaiveDate,
    formats: &[&str],
) -> (Option<DateFilter>, &'a str) {
    if let Some(idx) = input.find(": ") {
        let (prefix, rest_with_colon) = input.split_at(idx);
        let rest = &rest_with_colon[1..]; // skip ':'
        if let Some(date) = parse_date_token(prefix.trim(), reference, formats) {
            return (Some(date), rest);
        }
    }
    // Not recognized: treat the entire input as text.
    (None, input)
}

fn split_title_body(text: &str) -> (String, String) {
    if let Some((i, ch)) = text
        .char_indices()
        .find(|&(_, ch)| ch == '\n' || ch == '\r')
    {
        let title = text[..i].trim().to_string();
        let body = text[i + ch.len_utf8()..].trim().to_string();
        return (title, body);
    }
    for (i, ch) in text.char_indices() {
        if ch == '.' || ch == '?' || ch == '!' {
            let title = text[..i].trim().to_string();
            let body = text[i + ch.len_utf8()..].trim().to_string();
            return (title, body);
        }
    }
    (text.trim().to_string(), String::new())
}

/// Remove leading/trailing Markdown `#` and surrounding spaces from the title.
fn normalize_title(s: &str) -> String {
    s.trim()
        .trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .trim_end_matches(|c: char| c == '#' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(anchor: NaiveDate) -> ParseOptions<'static> {
        ParseOptions {
            reference_date: Some(anchor),
            ..Default::default()
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn iso_date_prefix() {
        let p = parse_entry("2025-08-01: Title. Body", opts(day("2025-08-15")));
        assert_eq!(p.date, day("2025-08-01"));
        assert_eq!(p.title, "Title");
        assert_eq!(p.body, "Body");
        assert!(p.explicit_date);
    }

    #[test]
    fn relative_word_prefix() {
        let p = parse_entry("yesterday: Note 1", opts(day("2025-08-15")));
        assert_eq!(p.date, day("2025-08-14"));
        assert_eq!(p.title, "Note 1");
        assert!(p.body.is_empty());
    }

    #[test]
    fn no_prefix_defaults_to_reference_date() {
        let p = parse_entry("My title\nAnd the body.", opts(day("2025-08-15")));
        assert_eq!(p.date, day("2025-08-15"));
        assert_eq!(p.title, "My title");
        assert_eq!(p.body, "And the body.");
        assert!(!p.explicit_date);
    }

    #[test]
    fn sentence_end_splits_title_from_body() {
        let p = parse_entry("Long walk! It cleared my head.", opts(day("2025-08-15")));
        assert_eq!(p.title, "Long walk");
        assert_eq!(p.body, "It cleared my head.");
    }

    #[test]
    fn hashes_stripped_from_title() {
        let p = parse_entry("today: # My Title ##\n### Body", opts(day("2025-08-15")));
        assert_eq!(p.title, "My Title");
        assert_eq!(p.body, "### Body");
    }

    #[test]
    fn unrecognized_prefix_is_kept_as_text() {
        let p = parse_entry("note to self: buy plants", opts(day("2025-08-15")));
        assert!(!p.explicit_date);
        assert_eq!(p.title, "note to self: buy plants");
    }

    #[test]
    fn tags_are_extracted_lowercased_and_deduped() {
        let tags = extract_tags("Walked @Park with @anna, then @park again");
        assert_eq!(tags, ["anna", "park"]);
        assert!(extract_tags("no tags here").is_empty());
        assert!(extract_tags("mail me@example.com").is_empty());
    }
}
