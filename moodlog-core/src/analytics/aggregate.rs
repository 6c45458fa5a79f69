//! Grouping entries along a dimension into per-group count and average score.

use crate::analytics::score::mood_score;
use crate::entry::Entry;
use chrono::{Datelike, Timelike};
use std::collections::BTreeMap;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// A grouping axis for [`breakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Dimension {
    DayOfWeek,
    HourOfDay,
    Location,
    Month,
    IsoWeek,
}

/// One group of the breakdown: how many entries landed in it and their mean
/// mood score (two decimals).
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub label: String,
    pub count: usize,
    pub average_score: f64,
}

/// Sort key per group. Only one variant is ever in play per call, so the
/// derived ordering never compares across variants.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum GroupKey {
    Index(u32),
    YearPart(i32, u32),
    Name(String),
}

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Groups `entries` along `dimension`.
///
/// Groups with zero entries are never emitted. Entries without a location
/// (or with a blank one) are excluded from the location dimension rather
/// than bucketed under a placeholder. Output order: Sun…Sat for
/// day-of-week, ascending hour for hour-of-day, chronological for month and
/// ISO week, descending count then alphabetical for location.
///
/// ISO week numbering follows ISO-8601: the week containing the year's
/// first Thursday is week 1, and both the week number and the year in the
/// label are the ISO ones.
pub fn breakdown(entries: &[Entry], dimension: Dimension) -> Vec<GroupSummary> {
    let mut groups: BTreeMap<GroupKey, (String, usize, f64)> = BTreeMap::new();
    for entry in entries {
        let Some((key, label)) = group_key(entry, dimension) else {
            continue;
        };
        let slot = groups.entry(key).or_insert((label, 0, 0.0));
        slot.1 += 1;
        slot.2 += mood_score(&entry.mood);
    }

    let mut out: Vec<GroupSummary> = groups
        .into_values()
        .map(|(label, count, sum)| GroupSummary {
            label,
            count,
            average_score: round2(sum / count as f64),
        })
        .collect();

    if dimension == Dimension::Location {
        out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    }
    out
}

fn group_key(entry: &Entry, dimension: Dimension) -> Option<(GroupKey, String)> {
    match dimension {
        Dimension::DayOfWeek => {
            let idx = entry.date.weekday().num_days_from_sunday();
            Some((GroupKey::Index(idx), DAY_LABELS[idx as usize].to_string()))
        }
        Dimension::HourOfDay => {
            let hour = entry.timestamp.hour();
            Some((GroupKey::Index(hour), format!("{hour:02}:00")))
        }
        Dimension::Location => {
            let location = entry.location.as_deref()?.trim();
            if location.is_empty() {
                return None;
            }
            Some((GroupKey::Name(location.to_string()), location.to_string()))
        }
        Dimension::Month => {
            let label = entry.date.format("%B %Y").to_string();
            Some((
                GroupKey::YearPart(entry.date.year(), entry.date.month()),
                label,
            ))
        }
        Dimension::IsoWeek => {
            let week = entry.date.iso_week();
            let label = format!("Week {}, {}", week.week(), week.year());
            Some((GroupKey::YearPart(week.year(), week.week()), label))
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
