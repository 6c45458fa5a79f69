//! Overview statistics across a set of entries.

use crate::analytics::score::mood_score;
use crate::analytics::streaks::{current_streak, longest_gap, longest_streak};
use crate::entry::Entry;
use crate::mood::{Moods, Quadrant};
use chrono::NaiveDate;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::AsRefStr;

/// First-half vs second-half movement of the mood score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodStats {
    pub total_entries: usize,
    pub total_words: usize,
    /// Mean mood score, two decimals. 0 when there are no entries.
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    /// Most common mood label (lowercased); ties break alphabetically.
    pub most_frequent_mood: Option<String>,
    /// Number of distinct mood labels used.
    pub mood_diversity: usize,
    /// Entries scoring at least 7.0, as a count and a whole percentage.
    pub positive_count: usize,
    pub positive_pct: u8,
    /// Entries per valence/energy quadrant, empty quadrants omitted.
    pub quadrants: Vec<(Quadrant, usize)>,
    pub trend: Trend,
    pub longest_streak: u32,
    pub current_streak: u32,
    pub longest_gap: i64,
}

/// Computes the overview for `entries`, with `today` anchoring the current
/// streak. Total over any input; an empty slice yields the zero overview.
pub fn stats(entries: &[Entry], today: NaiveDate) -> MoodStats {
    if entries.is_empty() {
        return MoodStats {
            total_entries: 0,
            total_words: 0,
            average_score: 0.0,
            min_score: 0.0,
            max_score: 0.0,
            most_frequent_mood: None,
            mood_diversity: 0,
            positive_count: 0,
            positive_pct: 0,
            quadrants: Vec::new(),
            trend: Trend::Stable,
            longest_streak: 0,
            current_streak: 0,
            longest_gap: 0,
        };
    }

    let mut ordered: Vec<&Entry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.timestamp);
    let scores: Vec<f64> = ordered.iter().map(|e| mood_score(&e.mood)).collect();

    let total = scores.len();
    let sum: f64 = scores.iter().sum();
    let min_score = scores.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_score = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut label_counts: HashMap<String, usize> = HashMap::new();
    for entry in &ordered {
        *label_counts
            .entry(entry.mood.trim().to_lowercase())
            .or_insert(0) += 1;
    }
    let mood_diversity = label_counts.len();
    let most_frequent_mood = label_counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(label, _)| label.clone());

    let positive_count = scores.iter().filter(|&&s| s >= 7.0).count();
    let positive_pct = ((positive_count as f64 / total as f64) * 100.0).round() as u8;
    let quadrants = quadrant_counts(&ordered);

    MoodStats {
        total_entries: total,
        total_words: ordered.iter().map(|e| e.word_count).sum(),
        average_score: round2(sum / total as f64),
        min_score,
        max_score,
        most_frequent_mood,
        mood_diversity,
        positive_count,
        positive_pct,
        quadrants,
        trend: trend_of(&scores),
        longest_streak: longest_streak(entries),
        current_streak: current_streak(entries, today),
        longest_gap: longest_gap(entries),
    }
}

/// Counts entries per quadrant, in the declaration order of [`Quadrant`],
/// dropping quadrants no entry falls into.
fn quadrant_counts(entries: &[&Entry]) -> Vec<(Quadrant, usize)> {
    Quadrant::iter()
        .map(|quadrant| {
            let count = entries
                .iter()
                .filter(|e| Quadrant::classify(Moods::resolve(&e.mood).coordinate()) == quadrant)
                .count();
            (quadrant, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Splits the chronological score series in half and compares the means;
/// movement beyond ±0.5 counts as a trend.
fn trend_of(scores: &[f64]) -> Trend {
    if scores.len() < 2 {
        return Trend::Stable;
    }
    let mid = scores.len() / 2;
    let first = scores[..mid].iter().sum::<f64>() / mid as f64;
    let second = scores[mid..].iter().sum::<f64>() / (scores.len() - mid) as f64;
    if second > first + 0.5 {
        Trend::Improving
    } else if second < first - 0.5 {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::tests::mk_entry;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn empty_input_yields_zero_overview() {
        let s = stats(&[], day("2025-08-15"));
        assert_eq!(s.total_entries, 0);
        assert_eq!(s.average_score, 0.0);
        assert_eq!(s.most_frequent_mood, None);
        assert_eq!(s.trend, Trend::Stable);
        assert_eq!(s.longest_streak, 0);
    }

    #[test]
    fn three_day_scenario() {
        // Happy (9.1), Happy (9.1), Anxious (1.9) on consecutive days.
        let entries = [
            mk_entry(1, "2025-08-13", "happy"),
            mk_entry(2, "2025-08-14", "happy"),
            mk_entry(3, "2025-08-15", "anxious"),
        ];
        let s = stats(&entries, day("2025-08-15"));
        assert_eq!(s.total_entries, 3);
        assert_eq!(s.average_score, 6.7);
        assert_eq!(s.min_score, 1.9);
        assert_eq!(s.max_score, 9.1);
        assert_eq!(s.most_frequent_mood.as_deref(), Some("happy"));
        assert_eq!(s.mood_diversity, 2);
        assert_eq!(s.positive_count, 2);
        assert_eq!(s.positive_pct, 67);
        assert_eq!(
            s.quadrants,
            [
                (Quadrant::HighEnergyPositive, 2),
                (Quadrant::HighEnergyNegative, 1)
            ]
        );
        assert_eq!(s.longest_streak, 3);
        assert_eq!(s.current_streak, 3);
        // [9.1] vs [9.1, 1.9]: the second half falls well below the band.
        assert_eq!(s.trend, Trend::Declining);
    }

    #[test]
    fn most_frequent_mood_tie_breaks_alphabetically() {
        let entries = [
            mk_entry(1, "2025-08-13", "tired"),
            mk_entry(2, "2025-08-14", "happy"),
        ];
        let s = stats(&entries, day("2025-08-14"));
        assert_eq!(s.most_frequent_mood.as_deref(), Some("happy"));
    }

    #[test]
    fn improving_trend_is_detected() {
        let entries = [
            mk_entry(1, "2025-08-11", "melancholic"),
            mk_entry(2, "2025-08-12", "tired"),
            mk_entry(3, "2025-08-13", "happy"),
            mk_entry(4, "2025-08-14", "excited"),
        ];
        let s = stats(&entries, day("2025-08-14"));
        assert_eq!(s.trend, Trend::Improving);
    }

    #[test]
    fn small_movement_stays_stable() {
        let entries = [
            mk_entry(1, "2025-08-13", "happy"),
            mk_entry(2, "2025-08-14", "inspired"),
        ];
        let s = stats(&entries, day("2025-08-14"));
        assert_eq!(s.trend, Trend::Stable);
    }

    #[test]
    fn unknown_moods_count_as_neutral() {
        let entries = [mk_entry(1, "2025-08-13", "mysterious")];
        let s = stats(&entries, day("2025-08-13"));
        assert_eq!(s.average_score, 5.0);
        assert_eq!(s.positive_count, 0);
    }

    #[test]
    fn word_totals_sum_stored_counts() {
        let mut a = mk_entry(1, "2025-08-13", "happy");
        a.word_count = 120;
        let mut b = mk_entry(2, "2025-08-14", "happy");
        b.word_count = 80;
        let s = stats(&[a, b], day("2025-08-14"));
        assert_eq!(s.total_words, 200);
    }
}
