mod render;

use anyhow::{Result, anyhow, bail};
use chrono::{Local, NaiveDate};
use clap::{ArgGroup, Parser};
use moodlog_core::{
    GoalKind, Journal, NewEntry, Priority, QueryError, ReadFilter,
    analytics::{self, Dimension, TopicOptions},
    dates::{DateFilter, parse_date_token},
    render as report,
};
use render::{ColorMode, RenderOptions, Renderer};
use std::io::{self, IsTerminal};
use std::{
    fs,
    process::{Command, ExitCode},
};

/// moodlog — mood-tracking journal with analytics
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("read_mode").args(["on", "from", "to"]).multiple(true)),
    group(ArgGroup::new("insight_mode").args(["stats", "by", "topics", "streak"]).conflicts_with("read_mode")),
    group(ArgGroup::new("todo_mode").args(["todo", "todos", "done"]).conflicts_with_all(["read_mode", "insight_mode"])),
    group(ArgGroup::new("goal_mode").args(["goal", "goals", "bump"]).conflicts_with_all(["read_mode", "insight_mode", "todo_mode"])),
    group(ArgGroup::new("write_mode").args(["text"]).conflicts_with_all(["read_mode", "insight_mode", "todo_mode", "goal_mode"])),
)]
struct Cli {
    /// Prints the journal root directory
    #[arg(long, short, exclusive = true)]
    path: bool,

    /// View entries on a specific date (e.g., `moodlog --on yesterday`)
    #[arg(long, conflicts_with_all = ["from", "to"])]
    on: Option<String>,
    /// View entries from, or on, this date (e.g., `moodlog --from "last week"`)
    #[arg(long)]
    from: Option<String>,
    /// View entries up to this date (e.g., `yesterday`, `2025-08-15`)
    #[arg(long, requires = "from")]
    to: Option<String>,
    /// Only shows the date, title, mood and tags of entries.
    #[arg(long, short)]
    short: bool,

    /// Mood of a new entry, or a mood filter when reading
    #[arg(long, short)]
    mood: Option<String>,
    /// Tags for a new entry, or a tag filter when reading (e.g., `--tags work travel`)
    #[arg(long, short, num_args(1..))]
    tags: Option<Vec<String>>,
    /// Location of a new entry (e.g., `--location "Cafe"`)
    #[arg(long, short)]
    location: Option<String>,
    /// Marks a new entry as featured
    #[arg(long)]
    featured: bool,

    /// Prints overview statistics over the whole journal
    #[arg(long)]
    stats: bool,
    /// Mood breakdown along a dimension: day-of-week, hour-of-day, location, month, iso-week
    #[arg(long)]
    by: Option<String>,
    /// Prints the most frequent topic words
    #[arg(long)]
    topics: bool,
    /// Prints the current and best writing streaks
    #[arg(long)]
    streak: bool,

    /// Adds a todo (e.g., `moodlog --todo "Water the plants" --priority high`)
    #[arg(long)]
    todo: Option<String>,
    /// Priority for --todo: low, medium, high
    #[arg(long, requires = "todo")]
    priority: Option<String>,
    /// Due date for --todo (e.g., `tomorrow`, `2025-08-20`)
    #[arg(long, requires = "todo")]
    due: Option<String>,
    /// Lists todos
    #[arg(long)]
    todos: bool,
    /// Completes a todo by id
    #[arg(long)]
    done: Option<u64>,

    /// Adds a goal (e.g., `moodlog --goal "Journal daily" --target 30`)
    #[arg(long)]
    goal: Option<String>,
    /// Goal kind for --goal: habit, milestone, project
    #[arg(long, requires = "goal")]
    kind: Option<String>,
    /// Goal target for --goal
    #[arg(long, requires = "goal", default_value_t = 1)]
    target: u32,
    /// Lists goals with progress
    #[arg(long)]
    goals: bool,
    /// Advances a goal by one step
    #[arg(long)]
    bump: Option<u64>,

    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    /// Free text for insert mode (e.g., `moodlog yesterday: Title. Body`).
    #[arg()]
    text: Vec<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("moodlog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let journal = Journal::new()?;

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: journal.config.date_format.clone(),
        use_color,
        short_mode: cli.short,
    }));

    if cli.path {
        renderer.print_info(&format!("{}", journal.config.journal_dir.display()));
        return Ok(());
    }

    if cli.stats || cli.by.is_some() || cli.topics || cli.streak {
        return insight_mode(&cli, &renderer, &journal);
    }
    if cli.todo.is_some() || cli.todos || cli.done.is_some() {
        return todo_mode(&cli, &renderer, &journal);
    }
    if cli.goal.is_some() || cli.goals || cli.bump.is_some() {
        return goal_mode(&cli, &renderer, &journal);
    }
    if cli.on.is_some() || cli.from.is_some() {
        return read_mode(&cli, &renderer, &journal);
    }
    write_mode(&cli, &renderer, &journal)
}

fn insight_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<()> {
    let result = journal.all_entries();
    let today = Local::now().date_naive();

    if cli.stats {
        let stats = analytics::stats(&result.entries, today);
        renderer.print_md(&report::format_stats(&stats));
    } else if let Some(by) = &cli.by {
        let dimension: Dimension = by.parse().map_err(|_| {
            anyhow!("unknown dimension '{by}'; try day-of-week, hour-of-day, location, month or iso-week")
        })?;
        let groups = analytics::breakdown(&result.entries, dimension);
        renderer.print_md(&report::format_breakdown(dimension, &groups));
    } else if cli.topics {
        let options = TopicOptions {
            top_n: journal.config.top_topics,
            extra_stopwords: journal.config.extra_stopwords.clone(),
        };
        let topics = analytics::top_topics(&result.entries, &options);
        renderer.print_md(&report::format_topics(&topics));
    } else {
        let current = analytics::current_streak(&result.entries, today);
        let best = analytics::longest_streak(&result.entries);
        renderer.print_info(&format!("{current} day streak (best: {best})"));
    }

    print_errors(renderer, &result.errors);
    Ok(())
}

fn read_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<()> {
    let (start, end) = match (&cli.on, &cli.from, &cli.to) {
        (Some(on), _, _) => (on.as_str(), None),
        (None, Some(from), Some(to)) => (from.as_str(), Some(to.as_str())),
        (None, Some(from), None) => (from.as_str(), Some("today")),
        _ => unreachable!("read mode requires --on or --from"),
    };
    let filter = ReadFilter {
        mood: cli.mood.clone(),
        tags: cli.tags.clone().unwrap_or_default(),
    };

    let result = journal.read_entries(start, end, &filter, None);
    if result.entries.is_empty() {
        renderer.print_info(&format!("No entries found for {start}."));
    } else {
        renderer.print_info(&format!("{} entries found.", result.entries.len()));
        renderer.print_entries(&result);
    }
    print_errors(renderer, &result.errors);
    Ok(())
}

fn write_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<()> {
    let Some(mood) = cli.mood.clone() else {
        bail!("a mood is required when writing (e.g. --mood happy)");
    };
    let input = if !cli.text.is_empty() {
        cli.text.join(" ")
    } else {
        let editor = resolve_editor(journal)?;
        create_editor_buffer(&editor)?
    };
    let trimmed = input.trim();
    if trimmed.is_empty() {
        renderer.print_info("No entry to save, because no text was received.");
        return Ok(());
    }

    let entry = journal.create_entry(
        trimmed,
        NewEntry {
            mood,
            location: cli.location.clone(),
            tags: cli.tags.clone().unwrap_or_default(),
            featured: cli.featured,
        },
        None,
    )?;

    let date = entry.date.format(&journal.config.date_format).to_string();
    renderer.print_info(&format!("Added entry {} for {date}", entry.id));
    renderer.print_entry_line(&entry);
    Ok(())
}

fn todo_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<()> {
    if let Some(text) = &cli.todo {
        let priority = match &cli.priority {
            Some(p) => p
                .parse::<Priority>()
                .map_err(|_| anyhow!("unknown priority '{p}'; try low, medium or high"))?,
            None => Priority::default(),
        };
        let due = match &cli.due {
            Some(token) => Some(parse_single_date(token, journal)?),
            None => None,
        };
        let todo = journal.add_todo(text, priority, due)?;
        renderer.print_info(&format!("Added todo {}", todo.id));
    } else if let Some(id) = cli.done {
        let todo = journal.complete_todo(id)?;
        renderer.print_info(&format!("Completed '{}'", todo.text));
    } else {
        renderer.print_todos(&journal.todos()?);
    }
    Ok(())
}

fn goal_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<()> {
    if let Some(title) = &cli.goal {
        let kind = match &cli.kind {
            Some(k) => k
                .parse::<GoalKind>()
                .map_err(|_| anyhow!("unknown goal kind '{k}'; try habit, milestone or project"))?,
            None => GoalKind::default(),
        };
        let goal = journal.add_goal(title, kind, cli.target)?;
        renderer.print_info(&format!("Added goal {}", goal.id));
    } else if let Some(id) = cli.bump {
        let goal = journal.advance_goal(id, 1)?;
        renderer.print_info(&format!(
            "'{}' is at {}/{} ({}%)",
            goal.title,
            goal.current,
            goal.target,
            goal.progress()
        ));
    } else {
        renderer.print_goals(&journal.goals()?);
    }
    Ok(())
}

fn print_errors(renderer: &Renderer, errors: &[QueryError]) {
    if errors.is_empty() {
        return;
    }
    renderer.print_md("\n# Errors:");
    for error in errors {
        match error {
            QueryError::FileError { path, error } => {
                renderer.print_md(&format!("* Could not process '{}': {}", path.display(), error));
            }
            QueryError::InvalidDate { input, error } => {
                renderer.print_md(&format!("* Could not process '{input}': {error}"));
            }
        }
    }
}

fn parse_single_date(token: &str, journal: &Journal) -> Result<NaiveDate> {
    let formats: Vec<&str> = journal
        .config
        .input_date_formats
        .iter()
        .map(AsRef::as_ref)
        .collect();
    match parse_date_token(token, Local::now().date_naive(), &formats) {
        Some(DateFilter::Single(date)) => Ok(date),
        Some(DateFilter::Range(_, end)) => Ok(end),
        None => bail!("'{token}' is not a valid date"),
    }
}

fn resolve_editor(journal: &Journal) -> Result<String> {
    let editor = journal
        .config
        .editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into());
    Ok(editor)
}

fn create_editor_buffer(editor_cmd: &str) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("moodlog")
        .suffix(".md")
        .tempfile()?;

    let path = file.path().to_path_buf();
    let status = Command::new(editor_cmd).arg(&path).status()?;
    if !status.success() {
        anyhow::bail!("Editor exited with status {}", status);
    }
    Ok(fs::read_to_string(&path)?)
}
