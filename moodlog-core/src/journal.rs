//! The core `Journal` struct and its associated types, providing the primary API for interaction.

use crate::analytics::topics::word_count;
use crate::config::Config;
use crate::dates::{DateFilter, months_in_range, parse_date_token};
use crate::entry::Entry;
use crate::goal::{Goal, GoalKind};
use crate::mood::{MoodLookup, Moods};
use crate::parse_input::{ParseOptions, extract_tags, parse_entry};
use crate::paths::month_path;
use crate::store::Store;
use crate::todo::{Priority, Todo};
use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local, NaiveDate};
use std::fs;
use std::path::PathBuf;

/// The central struct for all journal operations.
///
/// An instance of `Journal` holds the configuration and provides methods for
/// reading from and writing to the journal files.
#[derive(Debug)]
pub struct Journal {
    pub config: Config,
    store: Store,
}

/// Represents a non-critical issue that occurred during a query.
///
/// This is used to report problems (e.g., malformed files, invalid input)
/// without stopping a larger query operation.
#[derive(Debug)]
pub enum QueryError {
    InvalidDate { input: String, error: String },
    FileError { path: PathBuf, error: anyhow::Error },
}

/// The complete result of a query, containing successfully loaded entries and any warnings.
#[derive(Debug)]
pub struct QueryResult {
    pub entries: Vec<Entry>,
    pub errors: Vec<QueryError>,
}

/// Fields for a new entry, alongside the inline text.
#[derive(Debug, Default)]
pub struct NewEntry {
    pub mood: String,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
}

/// Optional per-field changes applied by [`Journal::edit_entry`].
///
/// A `None` field is left untouched. Changing the body recomputes the
/// entry's word count; changing the date keeps the time of day and moves
/// the entry between month files when needed.
#[derive(Debug, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub mood: Option<String>,
    pub location: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub date: Option<NaiveDate>,
    pub featured: Option<bool>,
    pub linked_goals: Option<Vec<u64>>,
    pub linked_todos: Option<Vec<u64>>,
    pub linked_entries: Option<Vec<u64>>,
}

/// Filters applied on top of a date query.
#[derive(Debug, Default)]
pub struct ReadFilter {
    /// Keep only entries whose mood resolves like this label.
    pub mood: Option<String>,
    /// Keep only entries carrying all of these tags.
    pub tags: Vec<String>,
}

impl Journal {
    /// Creates a new `Journal` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Journal` instance with a specific `Config`.
    ///
    /// This also ensures that the journal's root directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.journal_dir)
            .with_context(|| format!("creating {}", config.journal_dir.display()))?;
        let store = Store::new(&config.journal_dir);
        Ok(Self { config, store })
    }

    /// Parses and saves a new entry from a single input string.
    ///
    /// - Parses `<date>:` (optional) and title/body from the input string.
    /// - Stamps the write time; an explicit date takes the configured
    ///   `default_time` instead.
    /// - Merges `@tag` markers found in the body with the supplied tags.
    ///
    /// # Arguments
    ///
    /// * `input` - the user's inline text (eg 'yesterday: Rough start. Slept badly.').
    /// * `new` - mood, location, tags, and the featured flag.
    /// * `reference_date` - optional override of "today" for relative dates.
    pub fn create_entry(
        &self,
        input: &str,
        new: NewEntry,
        reference_date: Option<NaiveDate>,
    ) -> Result<Entry> {
        let format_strs: Vec<&str> = self
            .config
            .input_date_formats
            .iter()
            .map(AsRef::as_ref)
            .collect();
        let opts = ParseOptions {
            reference_date,
            formats: Some(&format_strs),
        };
        let parsed = parse_entry(input, opts);
        if parsed.title.is_empty() {
            bail!("entry has no title");
        }

        let time = if parsed.explicit_date {
            self.config.default_time
        } else {
            Local::now().time()
        };

        let mood = match Moods::resolve(&new.mood) {
            MoodLookup::Known(mood) => mood.as_ref().to_string(),
            MoodLookup::Unknown => new.mood.trim().to_string(),
        };

        let mut tags = extract_tags(&parsed.body);
        for tag in &new.tags {
            tags.push(tag.to_lowercase());
        }
        tags.sort();
        tags.dedup();

        let entry = Entry {
            id: self.next_entry_id()?,
            title: parsed.title,
            word_count: word_count(&parsed.body),
            body: parsed.body,
            mood,
            location: new.location.filter(|l| !l.trim().is_empty()),
            tags,
            date: parsed.date,
            timestamp: parsed.date.and_time(time),
            linked_goals: Vec::new(),
            linked_todos: Vec::new(),
            linked_entries: Vec::new(),
            featured: new.featured,
        };

        let (year, month) = (entry.date.year(), entry.date.month());
        let mut entries = self.store.load_month(year, month)?;
        entries.push(entry.clone());
        self.store.save_month(year, month, entries)?;
        Ok(entry)
    }

    /// Reads entries for a date or date range, newest file errors included.
    ///
    /// This is the primary query function. It is designed to be resilient,
    /// returning a [`QueryResult`] that contains both loaded entries and
    /// any warnings that occurred.
    ///
    /// # Arguments
    ///
    /// * `start` - a date token (e.g., "yesterday", "2025-08-15", "last week").
    /// * `end` - optional end token; together with `start` it spans a range.
    /// * `filter` - mood/tag filters applied to the hits.
    /// * `reference_date` - optional override of "today" for relative dates.
    pub fn read_entries(
        &self,
        start: &str,
        end: Option<&str>,
        filter: &ReadFilter,
        reference_date: Option<NaiveDate>,
    ) -> QueryResult {
        let reference = reference_date.unwrap_or_else(|| Local::now().date_naive());
        let format_strs: Vec<&str> = self
            .config
            .input_date_formats
            .iter()
            .map(AsRef::as_ref)
            .collect();

        let mut errors = Vec::new();
        let Some(span) = self.resolve_span(start, end, reference, &format_strs, &mut errors)
        else {
            return QueryResult {
                entries: Vec::new(),
                errors,
            };
        };

        let (from, to) = span;
        let mut entries = Vec::new();
        for (year, month) in months_in_range(from, to) {
            match self.store.load_month(year, month) {
                Ok(month_entries) => {
                    entries.extend(
                        month_entries
                            .into_iter()
                            .filter(|e| e.date >= from && e.date <= to)
                            .filter(|e| matches_filter(e, filter)),
                    );
                }
                Err(error) => errors.push(QueryError::FileError {
                    path: month_path(&self.config.journal_dir, year, month),
                    error,
                }),
            }
        }
        entries.sort_by_key(|e| e.timestamp);
        QueryResult { entries, errors }
    }

    /// Every entry on record, oldest first, with per-file errors collected.
    pub fn all_entries(&self) -> QueryResult {
        let mut entries = Vec::new();
        let mut errors = Vec::new();
        let months = match self.store.months_on_disk() {
            Ok(months) => months,
            Err(error) => {
                errors.push(QueryError::FileError {
                    path: self.config.journal_dir.clone(),
                    error,
                });
                return QueryResult { entries, errors };
            }
        };
        for (year, month) in months {
            match self.store.load_month(year, month) {
                Ok(month_entries) => entries.extend(month_entries),
                Err(error) => errors.push(QueryError::FileError {
                    path: month_path(&self.config.journal_dir, year, month),
                    error,
                }),
            }
        }
        entries.sort_by_key(|e| e.timestamp);
        QueryResult { entries, errors }
    }

    /// Applies `patch` to the entry with `id`, moving it between month
    /// files when the date changes. Returns the updated entry.
    pub fn edit_entry(&self, id: u64, patch: EntryPatch) -> Result<Entry> {
        let (year, month, mut entries, idx) = self.locate_entry(id)?;
        let mut entry = entries.remove(idx);

        if let Some(title) = patch.title {
            entry.title = title;
        }
        if let Some(body) = patch.body {
            entry.word_count = word_count(&body);
            entry.body = body;
        }
        if let Some(mood) = patch.mood {
            entry.mood = match Moods::resolve(&mood) {
                MoodLookup::Known(known) => known.as_ref().to_string(),
                MoodLookup::Unknown => mood.trim().to_string(),
            };
        }
        if let Some(location) = patch.location {
            entry.location = location.filter(|l| !l.trim().is_empty());
        }
        if let Some(tags) = patch.tags {
            entry.tags = tags;
        }
        if let Some(featured) = patch.featured {
            entry.featured = featured;
        }
        if let Some(linked_goals) = patch.linked_goals {
            entry.linked_goals = linked_goals;
        }
        if let Some(linked_todos) = patch.linked_todos {
            entry.linked_todos = linked_todos;
        }
        if let Some(linked_entries) = patch.linked_entries {
            entry.linked_entries = linked_entries;
        }
        if let Some(date) = patch.date {
            entry.date = date;
            entry.timestamp = date.and_time(entry.timestamp.time());
        }

        let (new_year, new_month) = (entry.date.year(), entry.date.month());
        if (new_year, new_month) == (year, month) {
            entries.push(entry.clone());
            self.store.save_month(year, month, entries)?;
        } else {
            self.store.save_month(year, month, entries)?;
            let mut target = self.store.load_month(new_year, new_month)?;
            target.push(entry.clone());
            self.store.save_month(new_year, new_month, target)?;
        }
        Ok(entry)
    }

    /// Removes the entry with `id` and returns it.
    pub fn delete_entry(&self, id: u64) -> Result<Entry> {
        let (year, month, mut entries, idx) = self.locate_entry(id)?;
        let removed = entries.remove(idx);
        self.store.save_month(year, month, entries)?;
        Ok(removed)
    }

    fn locate_entry(&self, id: u64) -> Result<(i32, u32, Vec<Entry>, usize)> {
        for (year, month) in self.store.months_on_disk()? {
            let entries = self.store.load_month(year, month)?;
            if let Some(idx) = entries.iter().position(|e| e.id == id) {
                return Ok((year, month, entries, idx));
            }
        }
        bail!("no entry with id {id}");
    }

    fn next_entry_id(&self) -> Result<u64> {
        let mut max = 0;
        for (year, month) in self.store.months_on_disk()? {
            for entry in self.store.load_month(year, month)? {
                max = max.max(entry.id);
            }
        }
        Ok(max + 1)
    }

    // --- Todos ---

    pub fn todos(&self) -> Result<Vec<Todo>> {
        self.store.load_todos()
    }

    pub fn add_todo(
        &self,
        text: &str,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Result<Todo> {
        let text = text.trim();
        if text.is_empty() {
            bail!("todo has no text");
        }
        let mut todos = self.store.load_todos()?;
        let todo = Todo {
            id: todos.iter().map(|t| t.id).max().unwrap_or(0) + 1,
            text: text.to_string(),
            completed: false,
            priority,
            due_date,
            completed_at: None,
        };
        todos.push(todo.clone());
        self.store.save_todos(todos)?;
        Ok(todo)
    }

    pub fn complete_todo(&self, id: u64) -> Result<Todo> {
        self.update_todo(id, |todo| {
            if !todo.completed {
                todo.completed = true;
                todo.completed_at = Some(Local::now().naive_local());
            }
        })
    }

    pub fn reopen_todo(&self, id: u64) -> Result<Todo> {
        self.update_todo(id, |todo| {
            todo.completed = false;
            todo.completed_at = None;
        })
    }

    pub fn delete_todo(&self, id: u64) -> Result<Todo> {
        let mut todos = self.store.load_todos()?;
        let Some(idx) = todos.iter().position(|t| t.id == id) else {
            bail!("no todo with id {id}");
        };
        let removed = todos.remove(idx);
        self.store.save_todos(todos)?;
        Ok(removed)
    }

    fn update_todo(&self, id: u64, apply: impl FnOnce(&mut Todo)) -> Result<Todo> {
        let mut todos = self.store.load_todos()?;
        let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
            bail!("no todo with id {id}");
        };
        apply(todo);
        let updated = todo.clone();
        self.store.save_todos(todos)?;
        Ok(updated)
    }

    // --- Goals ---

    pub fn goals(&self) -> Result<Vec<Goal>> {
        self.store.load_goals()
    }

    pub fn add_goal(&self, title: &str, kind: GoalKind, target: u32) -> Result<Goal> {
        let title = title.trim();
        if title.is_empty() {
            bail!("goal has no title");
        }
        let mut goals = self.store.load_goals()?;
        let goal = Goal {
            id: goals.iter().map(|g| g.id).max().unwrap_or(0) + 1,
            title: title.to_string(),
            kind,
            current: 0,
            target,
        };
        goals.push(goal.clone());
        self.store.save_goals(goals)?;
        Ok(goal)
    }

    pub fn advance_goal(&self, id: u64, by: u32) -> Result<Goal> {
        let mut goals = self.store.load_goals()?;
        let Some(goal) = goals.iter_mut().find(|g| g.id == id) else {
            bail!("no goal with id {id}");
        };
        goal.current = goal.current.saturating_add(by);
        let updated = goal.clone();
        self.store.save_goals(goals)?;
        Ok(updated)
    }

    fn resolve_span(
        &self,
        start: &str,
        end: Option<&str>,
        reference: NaiveDate,
        formats: &[&str],
        errors: &mut Vec<QueryError>,
    ) -> Option<(NaiveDate, NaiveDate)> {
        let Some(start_filter) = parse_date_token(start, reference, formats) else {
            errors.push(QueryError::InvalidDate {
                input: start.to_string(),
                error: "Not a valid date or keyword.".to_string(),
            });
            return None;
        };
        let (from, mut to) = match start_filter {
            DateFilter::Single(d) => (d, d),
            DateFilter::Range(a, b) => (a, b),
        };
        if let Some(end_token) = end {
            let Some(end_filter) = parse_date_token(end_token, reference, formats) else {
                errors.push(QueryError::InvalidDate {
                    input: end_token.to_string(),
                    error: "Not a valid date or keyword.".to_string(),
                });
                return None;
            };
            to = match end_filter {
                DateFilter::Single(d) => d,
                DateFilter::Range(_, b) => b,
            };
        }
        Some((from, to))
    }
}

fn matches_filter(entry: &Entry, filter: &ReadFilter) -> bool {
    if let Some(wanted) = &filter.mood {
        let same = match (Moods::resolve(wanted), Moods::resolve(&entry.mood)) {
            (MoodLookup::Known(a), MoodLookup::Known(b)) => a == b,
            _ => entry.mood.eq_ignore_ascii_case(wanted.trim()),
        };
        if !same {
            return false;
        }
    }
    filter
        .tags
        .iter()
        .all(|tag| entry.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
}
