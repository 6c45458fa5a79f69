use std::path::{Path, PathBuf};

pub fn month_file_name(month: u32) -> String {
    format!("{month:02}.toml")
}

pub fn month_dir(root: &Path, year: i32) -> PathBuf {
    root.join(format!("{year:04}"))
}

pub fn month_path(root: &Path, year: i32, month: u32) -> PathBuf {
    month_dir(root, year).join(month_file_name(month))
}

pub fn todos_path(root: &Path) -> PathBuf {
    root.join("todos.toml")
}

pub fn goals_path(root: &Path) -> PathBuf {
    root.join("goals.toml")
}
