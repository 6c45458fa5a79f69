use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single journal entry.
///
/// `mood` is stored as plain text and resolved against the mood model on
/// read, so entries written under an older model keep loading. `word_count`
/// is recomputed from the markup-stripped body on every create and edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub mood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_goals: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_todos: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_entries: Vec<u64>,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub featured: bool,
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Test helper to build an entry on a given day with a given mood.
    ///
    /// This is the single source of truth for test entries. If you add a
    /// field to `Entry`, you only need to update it here; tests that care
    /// about other fields override them with struct-update syntax.
    pub(crate) fn mk_entry(id: u64, date: &str, mood: &str) -> Entry {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
        let timestamp = date.and_hms_opt(12, 0, 0).expect("valid time");
        Entry {
            id,
            title: format!("Entry {id}"),
            body: String::new(),
            mood: mood.to_string(),
            location: None,
            tags: Vec::new(),
            date,
            timestamp,
            linked_goals: Vec::new(),
            linked_todos: Vec::new(),
            linked_entries: Vec::new(),
            word_count: 0,
            featured: false,
        }
    }
}
