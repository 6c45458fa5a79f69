use anyhow::{Context, Result};
use chrono::NaiveTime;
use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};

use crate::analytics::topics::DEFAULT_TOP_N;
use crate::mood::Moods;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where the journal's TOML files live.
    pub journal_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Entries get this time when you supply a date but write later (e.g. `yesterday:`).
    /// Valid format is "%H:%M" (e.g. 08:40 or 16:33). Default is 21:00.
    pub default_time: NaiveTime,
    /// Display format for dates in CLI output.
    pub date_format: String,
    /// Accepted input date formats for entry prefixes and query flags.
    pub input_date_formats: Vec<String>,
    /// How many topic words analytics report.
    pub top_topics: usize,
    /// Stopwords on top of the built-in set.
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_dir: Option<PathBuf>,
    editor: Option<String>,
    default_time: Option<String>,
    date_format: Option<String>,
    input_date_formats: Option<Vec<String>>,
    top_topics: Option<usize>,
    stopwords: Option<Vec<String>>,
    /// Optional table:
    /// [moods]
    /// content = "peaceful"
    /// stoked = "excited"
    moods: Option<HashMap<String, String>>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native), apply defaults,
    /// and extend the global mood registry with user-defined aliases if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_default();

        let default_time = file_config
            .default_time
            .as_deref()
            .and_then(Self::parse_default_time)
            .unwrap_or_else(Self::default_fallback_time);

        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%A, %d %b %Y".to_string());

        let input_date_formats = file_config
            .input_date_formats
            .unwrap_or_else(|| vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()]);

        let journal_dir = file_config
            .journal_dir
            .unwrap_or_else(Self::default_journal_dir);

        // Extend the global mood registry once at startup.
        Self::load_mood_aliases(&file_config.moods);

        Ok(Self {
            journal_dir,
            editor: file_config.editor,
            default_time,
            date_format,
            input_date_formats,
            top_topics: file_config.top_topics.unwrap_or(DEFAULT_TOP_N),
            extra_stopwords: file_config.stopwords.unwrap_or_default(),
        })
    }

    fn default_fallback_time() -> NaiveTime {
        NaiveTime::from_hms_opt(21, 0, 0).expect("valid time")
    }

    /// Parse a "%H:%M" string into NaiveTime.
    fn parse_default_time(time: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(time, "%H:%M").ok()
    }

    /// Default journal root: `{data_dir}/moodlog`
    /// - macOS:   `~/Library/Application Support/moodlog`
    /// - Linux:   `$XDG_DATA_HOME/moodlog` or `~/.local/share/moodlog`
    /// - Windows: `%APPDATA%\moodlog`
    fn default_journal_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("moodlog");
            p
        } else {
            PathBuf::from("./moodlog")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("moodlog")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("moodlog").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[moods]` into the global mood registry.
    /// Omits aliases that collide with a canonical label (eg. "happy").
    fn load_mood_aliases(moods: &Option<HashMap<String, String>>) {
        match moods {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> = map
                    .iter()
                    .filter(|(alias, _)| !Moods::is_canonical(alias))
                    .map(|(a, t)| (a.clone(), t.clone()))
                    .collect();

                if !pairs.is_empty() {
                    Moods::extend(&pairs);
                }
            }
            _ => {}
        }
    }
}
