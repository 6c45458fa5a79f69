//! Calendar helpers and date-token parsing.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use strum_macros::EnumString;

/// Default accepted input date formats (parsing only).
pub const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// The result of parsing a date token: a single day or an inclusive range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DateFilter {
    Single(NaiveDate),
    Range(NaiveDate, NaiveDate),
}

/// Relative date words accepted in tokens and entry prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case")]
enum DateWord {
    Today,
    Yesterday,
    Tomorrow,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    #[strum(serialize = "last week")]
    LastWeek,
    #[strum(serialize = "last month")]
    LastMonth,
    #[strum(serialize = "this week")]
    ThisWeek,
    #[strum(serialize = "this month")]
    ThisMonth,
}

/// Parses a token into a date filter.
///
/// Understood forms, in order: relative words (`today`, `yesterday`,
/// `tomorrow`), weekday names (the most recent such day, today included),
/// ranges (`last week`, `last month`, `this week`, `this month`), then any
/// of the `formats` strings. Weeks run Monday through Sunday.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use moodlog_core::dates::{DateFilter, parse_date_token};
/// let anchor = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
///
/// let yesterday = parse_date_token("yesterday", anchor, &["%Y-%m-%d"]).unwrap();
/// assert_eq!(yesterday, DateFilter::Single(NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()));
///
/// let formatted = parse_date_token("2025-01-20", anchor, &["%Y-%m-%d"]).unwrap();
/// assert_eq!(formatted, DateFilter::Single(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()));
/// ```
pub fn parse_date_token(s: &str, reference: NaiveDate, formats: &[&str]) -> Option<DateFilter> {
    let token = s.trim().to_lowercase();
    if let Ok(word) = token.parse::<DateWord>() {
        return Some(resolve_word(word, reference));
    }
    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(s.trim(), fmt).ok())
        .map(DateFilter::Single)
        .next()
}

fn resolve_word(word: DateWord, reference: NaiveDate) -> DateFilter {
    match word {
        DateWord::Today => DateFilter::Single(reference),
        DateWord::Yesterday => DateFilter::Single(reference - Duration::days(1)),
        DateWord::Tomorrow => DateFilter::Single(reference + Duration::days(1)),
        DateWord::Monday => most_recent(reference, Weekday::Mon),
        DateWord::Tuesday => most_recent(reference, Weekday::Tue),
        DateWord::Wednesday => most_recent(reference, Weekday::Wed),
        DateWord::Thursday => most_recent(reference, Weekday::Thu),
        DateWord::Friday => most_recent(reference, Weekday::Fri),
        DateWord::Saturday => most_recent(reference, Weekday::Sat),
        DateWord::Sunday => most_recent(reference, Weekday::Sun),
        DateWord::LastWeek => {
            let monday = start_of_week(reference) - Duration::days(7);
            DateFilter::Range(monday, monday + Duration::days(6))
        }
        DateWord::ThisWeek => DateFilter::Range(start_of_week(reference), reference),
        DateWord::LastMonth => {
            let first_of_this = reference.with_day(1).expect("day 1 exists");
            let end = first_of_this - Duration::days(1);
            let start = end.with_day(1).expect("day 1 exists");
            DateFilter::Range(start, end)
        }
        DateWord::ThisMonth => {
            DateFilter::Range(reference.with_day(1).expect("day 1 exists"), reference)
        }
    }
}

fn most_recent(reference: NaiveDate, weekday: Weekday) -> DateFilter {
    let days_ago = (reference.weekday().num_days_from_monday() + 7
        - weekday.num_days_from_monday())
        % 7;
    DateFilter::Single(reference - Duration::days(days_ago as i64))
}

fn start_of_week(reference: NaiveDate) -> NaiveDate {
    reference - Duration::days(reference.weekday().num_days_from_monday() as i64)
}

/// All `(year, month)` pairs touched by the inclusive date range.
pub fn months_in_range(start: NaiveDate, end: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::new();
    let (mut year, mut month) = (start.year(), start.month());
    while (year, month) <= (end.year(), end.month()) {
        months.push((year, month));
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    if start > end { Vec::new() } else { months }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn relative_words_resolve_against_the_anchor() {
        let anchor = day("2025-08-20"); // Wednesday
        assert_eq!(
            parse_date_token("today", anchor, DEFAULT_FORMATS),
            Some(DateFilter::Single(anchor))
        );
        assert_eq!(
            parse_date_token("Yesterday", anchor, DEFAULT_FORMATS),
            Some(DateFilter::Single(day("2025-08-19")))
        );
        assert_eq!(
            parse_date_token("tomorrow", anchor, DEFAULT_FORMATS),
            Some(DateFilter::Single(day("2025-08-21")))
        );
    }

    #[test]
    fn weekday_words_pick_the_most_recent_day() {
        let anchor = day("2025-08-20"); // Wednesday
        assert_eq!(
            parse_date_token("monday", anchor, DEFAULT_FORMATS),
            Some(DateFilter::Single(day("2025-08-18")))
        );
        // The anchor's own weekday resolves to the anchor.
        assert_eq!(
            parse_date_token("wednesday", anchor, DEFAULT_FORMATS),
            Some(DateFilter::Single(anchor))
        );
        // Later weekdays reach back into the previous week.
        assert_eq!(
            parse_date_token("thursday", anchor, DEFAULT_FORMATS),
            Some(DateFilter::Single(day("2025-08-14")))
        );
    }

    #[test]
    fn week_and_month_ranges() {
        let anchor = day("2025-08-20"); // Wednesday
        assert_eq!(
            parse_date_token("last week", anchor, DEFAULT_FORMATS),
            Some(DateFilter::Range(day("2025-08-11"), day("2025-08-17")))
        );
        assert_eq!(
            parse_date_token("this week", anchor, DEFAULT_FORMATS),
            Some(DateFilter::Range(day("2025-08-18"), anchor))
        );
        assert_eq!(
            parse_date_token("last month", anchor, DEFAULT_FORMATS),
            Some(DateFilter::Range(day("2025-07-01"), day("2025-07-31")))
        );
        assert_eq!(
            parse_date_token("this month", anchor, DEFAULT_FORMATS),
            Some(DateFilter::Range(day("2025-08-01"), anchor))
        );
    }

    #[test]
    fn formats_are_tried_in_order() {
        let anchor = day("2025-08-20");
        let formats = &["%d/%m/%Y", "%Y-%m-%d"];
        assert_eq!(
            parse_date_token("01/08/2025", anchor, formats),
            Some(DateFilter::Single(day("2025-08-01")))
        );
        assert_eq!(
            parse_date_token("2025-08-01", anchor, formats),
            Some(DateFilter::Single(day("2025-08-01")))
        );
        assert_eq!(parse_date_token("not-a-date", anchor, formats), None);
    }

    #[test]
    fn months_cover_the_range_inclusive() {
        let months = months_in_range(day("2024-11-20"), day("2025-02-03"));
        assert_eq!(months, [(2024, 11), (2024, 12), (2025, 1), (2025, 2)]);
        assert_eq!(
            months_in_range(day("2025-08-01"), day("2025-08-31")),
            [(2025, 8)]
        );
        assert!(months_in_range(day("2025-08-02"), day("2025-08-01")).is_empty());
    }
}
