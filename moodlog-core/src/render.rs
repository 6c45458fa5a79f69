//! Pure Markdown formatting of analytics results.
//!
//! Overview:    bullet list of the headline numbers.
//! Breakdown:   one table row per group:
//!   | Cafe | 3 | 8.40 |

use crate::analytics::aggregate::{Dimension, GroupSummary};
use crate::analytics::stats::MoodStats;
use crate::analytics::topics::TopicCount;

/// Human title of a grouping dimension.
pub fn dimension_title(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::DayOfWeek => "Day of week",
        Dimension::HourOfDay => "Hour of day",
        Dimension::Location => "Location",
        Dimension::Month => "Month",
        Dimension::IsoWeek => "Week",
    }
}

/// Renders the overview as a Markdown block.
pub fn format_stats(stats: &MoodStats) -> String {
    if stats.total_entries == 0 {
        return "No entries yet.\n".to_string();
    }
    let mut out = String::new();
    out.push_str("# Overview\n");
    out.push_str(&format!("* Entries: **{}**\n", stats.total_entries));
    out.push_str(&format!("* Words written: **{}**\n", stats.total_words));
    out.push_str(&format!(
        "* Average mood: **{:.1}** (range {:.1} – {:.1})\n",
        stats.average_score, stats.min_score, stats.max_score
    ));
    if let Some(mood) = &stats.most_frequent_mood {
        out.push_str(&format!("* Most frequent mood: **{mood}**\n"));
    }
    out.push_str(&format!("* Moods used: **{}**\n", stats.mood_diversity));
    out.push_str(&format!(
        "* Positive entries: **{}** ({}%)\n",
        stats.positive_count, stats.positive_pct
    ));
    if !stats.quadrants.is_empty() {
        let landscape: Vec<String> = stats
            .quadrants
            .iter()
            .map(|(quadrant, count)| format!("{} × {}", quadrant.as_ref(), count))
            .collect();
        out.push_str(&format!("* Landscape: {}\n", landscape.join(", ")));
    }
    out.push_str(&format!("* Trend: **{}**\n", stats.trend.as_ref()));
    out.push_str(&format!(
        "* Streak: **{}** current, **{}** best, longest gap **{}** days\n",
        stats.current_streak, stats.longest_streak, stats.longest_gap
    ));
    out
}

/// Renders a breakdown as a Markdown table.
pub fn format_breakdown(dimension: Dimension, groups: &[GroupSummary]) -> String {
    let title = dimension_title(dimension);
    if groups.is_empty() {
        return format!("No data for {}.\n", title.to_lowercase());
    }
    let mut out = format!("# Mood by {}\n", title.to_lowercase());
    out.push_str("|:-|:-:|:-:|\n");
    out.push_str(&format!("|{title}|Entries|Avg mood|\n"));
    out.push_str("|:-|:-:|:-:|\n");
    for group in groups {
        out.push_str(&format!(
            "|{}|{}|{:.2}|\n",
            group.label, group.count, group.average_score
        ));
    }
    out.push_str("|-\n");
    out
}

/// Renders topic counts as a Markdown list.
pub fn format_topics(topics: &[TopicCount]) -> String {
    if topics.is_empty() {
        return "No topics found.\n".to_string();
    }
    let mut out = String::from("# Topics\n");
    for topic in topics {
        out.push_str(&format!("* **{}** × {}\n", topic.word, topic.count));
    }
    out
}
