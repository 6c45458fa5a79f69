use super::theme::Theme;
use moodlog_core::{Entry, Goal, Moods, QueryResult, Todo};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Theme::skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%a, %d %b %Y".to_string(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
            if !md.ends_with('\n') {
                println!();
            }
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// `😊 happy`, tinted with the mood's model color when known.
    fn mood_span(&self, label: &str) -> String {
        match Moods::resolve(label).known() {
            Some(mood) => {
                let text = format!("{} {}", mood.glyph(), mood.as_ref());
                if self.opts.use_color {
                    let (r, g, b) = mood.color();
                    text.with(Color::Rgb { r, g, b }).to_string()
                } else {
                    text
                }
            }
            None => label.to_string(),
        }
    }

    pub fn print_entry_line(&self, entry: &Entry) {
        let mut date = entry.date.to_string();
        let mut time = entry.timestamp.format("%H:%M").to_string();
        let mut title = entry.title.to_string();
        let mut tags = String::new();
        if !entry.tags.is_empty() {
            tags = format!("[{}]", entry.tags.join(", "));
        }
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            time = time.with(Color::Blue).to_string();
            title = title.with(Color::Yellow).to_string();
            tags = tags.with(Color::Green).to_string();
        }
        let mood = self.mood_span(&entry.mood);
        println!("{date} {time} - {title} {mood} {tags}");
    }

    pub fn print_entries(&self, result: &QueryResult) {
        if result.entries.is_empty() {
            self.print_info("No entries found.");
            return;
        }

        for (i, entry) in result.entries.iter().enumerate() {
            if self.opts.short_mode {
                self.print_entry_line(entry);
                continue;
            }
            let date = entry.date.format(&self.opts.date_format).to_string();
            let time = entry.timestamp.format("%H:%M").to_string();
            let title = entry.title.trim();
            self.print_md(&format!("## {date} {time}: {title}\n"));

            let mut context = self.mood_span(&entry.mood);
            if let Some(location) = &entry.location {
                context.push_str(&format!(" · {location}"));
            }
            if entry.featured {
                context.push_str(" · featured");
            }
            println!("{context}");

            if !entry.body.trim().is_empty() {
                let body = highlight_tags(entry.body.trim_end());
                self.print_md(&format!("{body}\n"));
            }

            if i + 1 < result.entries.len() {
                println!();
            }
            self.print_md("---");
        }
    }

    pub fn print_todos(&self, todos: &[Todo]) {
        if todos.is_empty() {
            self.print_info("No todos.");
            return;
        }
        let mut md = String::from("# Todos\n");
        for todo in todos {
            let mark = if todo.completed { "x" } else { " " };
            let mut line = format!("* `{}` [{}] {} *({})*", todo.id, mark, todo.text, todo.priority.as_ref());
            if let Some(due) = todo.due_date {
                line.push_str(&format!(" due {due}"));
            }
            md.push_str(&line);
            md.push('\n');
        }
        self.print_md(&md);
    }

    pub fn print_goals(&self, goals: &[Goal]) {
        if goals.is_empty() {
            self.print_info("No goals.");
            return;
        }
        let mut md = String::from("# Goals\n");
        for goal in goals {
            md.push_str(&format!(
                "* `{}` {} *({})* — {}/{} (**{}%**)\n",
                goal.id,
                goal.title,
                goal.kind.as_ref(),
                goal.current,
                goal.target,
                goal.progress()
            ));
        }
        self.print_md(&md);
    }
}

fn highlight_tags(body: &str) -> String {
    let re = regex::Regex::new(r"(?m)(^|\s)@([A-Za-z0-9_][\w-]*)").unwrap();
    re.replace_all(body, "$1`@$2`").to_string()
}
