//! Consecutive-day streaks and gaps over entry dates.

use crate::entry::Entry;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// The longest run of consecutive calendar days that each have at least one
/// entry. Multiple entries on one day count once. 0 for no entries, 1 for a
/// single entry.
pub fn longest_streak(entries: &[Entry]) -> u32 {
    let days = distinct_days(entries);
    let mut best = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for &day in &days {
        run = match previous {
            Some(prev) if day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(day);
    }
    best
}

/// The streak ending at `today`, counting backwards.
///
/// A missing entry for `today` itself does not break an otherwise
/// continuous streak ending yesterday; a missing entry for any earlier day
/// does.
pub fn current_streak(entries: &[Entry], today: NaiveDate) -> u32 {
    let days = distinct_days(entries);
    let mut day = if days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };
    let mut streak = 0u32;
    while days.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

/// The largest number of days between two consecutive distinct entry dates.
/// 0 when there are fewer than two distinct dates.
pub fn longest_gap(entries: &[Entry]) -> i64 {
    let days = distinct_days(entries);
    days.iter()
        .zip(days.iter().skip(1))
        .map(|(a, b)| (*b - *a).num_days())
        .max()
        .unwrap_or(0)
}

fn distinct_days(entries: &[Entry]) -> BTreeSet<NaiveDate> {
    entries.iter().map(|e| e.date).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::tests::mk_entry;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn empty_input_has_no_streak() {
        assert_eq!(longest_streak(&[]), 0);
        assert_eq!(current_streak(&[], day("2025-08-15")), 0);
        assert_eq!(longest_gap(&[]), 0);
    }

    #[test]
    fn single_entry_is_a_streak_of_one() {
        let entries = [mk_entry(1, "2025-08-15", "happy")];
        assert_eq!(longest_streak(&entries), 1);
    }

    #[test]
    fn gap_splits_the_run() {
        // Days 1, 2, 3, 5: the gap at day 4 caps the streak at 3.
        let entries = [
            mk_entry(1, "2025-08-01", "happy"),
            mk_entry(2, "2025-08-02", "tired"),
            mk_entry(3, "2025-08-03", "happy"),
            mk_entry(4, "2025-08-05", "peaceful"),
        ];
        assert_eq!(longest_streak(&entries), 3);
        assert_eq!(longest_gap(&entries), 2);
    }

    #[test]
    fn same_day_entries_count_once() {
        let entries = [
            mk_entry(1, "2025-08-01", "happy"),
            mk_entry(2, "2025-08-01", "anxious"),
            mk_entry(3, "2025-08-02", "happy"),
        ];
        assert_eq!(longest_streak(&entries), 2);
    }

    #[test]
    fn unsorted_input_is_handled() {
        let entries = [
            mk_entry(1, "2025-08-03", "happy"),
            mk_entry(2, "2025-08-01", "happy"),
            mk_entry(3, "2025-08-02", "happy"),
        ];
        assert_eq!(longest_streak(&entries), 3);
    }

    #[test]
    fn current_streak_counts_back_from_today() {
        let entries = [
            mk_entry(1, "2025-08-13", "happy"),
            mk_entry(2, "2025-08-14", "happy"),
            mk_entry(3, "2025-08-15", "happy"),
        ];
        assert_eq!(current_streak(&entries, day("2025-08-15")), 3);
    }

    #[test]
    fn missing_today_does_not_break_the_current_streak() {
        let entries = [
            mk_entry(1, "2025-08-13", "happy"),
            mk_entry(2, "2025-08-14", "happy"),
        ];
        assert_eq!(current_streak(&entries, day("2025-08-15")), 2);
    }

    #[test]
    fn missing_yesterday_ends_the_current_streak() {
        let entries = [mk_entry(1, "2025-08-13", "happy")];
        assert_eq!(current_streak(&entries, day("2025-08-15")), 0);
    }
}
