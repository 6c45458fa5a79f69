//! TOML-file persistence for entries, todos, and goals.
//!
//! Entries live in per-month documents (`{root}/YYYY/MM.toml`), todos and
//! goals in single documents at the root. A missing file reads as empty;
//! writing an empty month removes its file.

use crate::entry::Entry;
use crate::goal::Goal;
use crate::paths::{goals_path, month_path, todos_path};
use crate::todo::Todo;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct MonthFile {
    #[serde(default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TodoFile {
    #[serde(default)]
    todos: Vec<Todo>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GoalFile {
    #[serde(default)]
    goals: Vec<Goal>,
}

#[derive(Debug)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// All entries of one month. A missing file is an empty month.
    pub fn load_month(&self, year: i32, month: u32) -> Result<Vec<Entry>> {
        let path = month_path(&self.root, year, month);
        Ok(read_document::<MonthFile>(&path)?.entries)
    }

    /// Writes a month back, sorted by timestamp. An empty month removes the
    /// file instead of leaving a stub behind.
    pub fn save_month(&self, year: i32, month: u32, mut entries: Vec<Entry>) -> Result<()> {
        let path = month_path(&self.root, year, month);
        if entries.is_empty() {
            if path.exists() {
                fs::remove_file(&path)
                    .with_context(|| format!("removing {}", path.display()))?;
            }
            return Ok(());
        }
        entries.sort_by_key(|e| e.timestamp);
        write_document(&path, &MonthFile { entries })
    }

    /// Every `(year, month)` that has a month file on disk, ascending.
    pub fn months_on_disk(&self) -> Result<Vec<(i32, u32)>> {
        let mut months = Vec::new();
        if !self.root.exists() {
            return Ok(months);
        }
        for year_entry in fs::read_dir(&self.root)
            .with_context(|| format!("reading {}", self.root.display()))?
        {
            let year_entry = year_entry?;
            let Some(year) = file_stem_number::<i32>(&year_entry.path()) else {
                continue;
            };
            if !year_entry.path().is_dir() {
                continue;
            }
            for month_entry in fs::read_dir(year_entry.path())
                .with_context(|| format!("reading {}", year_entry.path().display()))?
            {
                let path = month_entry?.path();
                if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                    continue;
                }
                if let Some(month) = file_stem_number::<u32>(&path) {
                    months.push((year, month));
                }
            }
        }
        months.sort_unstable();
        Ok(months)
    }

    pub fn load_todos(&self) -> Result<Vec<Todo>> {
        Ok(read_document::<TodoFile>(&todos_path(&self.root))?.todos)
    }

    pub fn save_todos(&self, todos: Vec<Todo>) -> Result<()> {
        write_document(&todos_path(&self.root), &TodoFile { todos })
    }

    pub fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(read_document::<GoalFile>(&goals_path(&self.root))?.goals)
    }

    pub fn save_goals(&self, goals: Vec<Goal>) -> Result<()> {
        write_document(&goals_path(&self.root), &GoalFile { goals })
    }
}

fn read_document<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(document).context("serializing document")?;
    fs::write(path, raw).with_context(|| format!("writing {}", path.display()))
}

fn file_stem_number<T: std::str::FromStr>(path: &Path) -> Option<T> {
    path.file_stem()?.to_str()?.parse().ok()
}
