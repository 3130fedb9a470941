use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local, SecondsFormat};

pub fn resolve_desktop_log_path(packaged_root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    match packaged_root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => env::temp_dir()
            .join("sunshine-control-panel")
            .join("logs")
            .join(file_name),
    }
}

pub fn format_log_line(timestamp: DateTime<Local>, category: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, false),
        category,
        message.trim_end()
    )
}

pub fn append_log_line(log_path: &Path, line: &str) -> Result<(), String> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| format!("Failed to open log {}: {}", log_path.display(), error))?;
    file.write_all(line.as_bytes())
        .map_err(|error| format!("Failed to write log {}: {}", log_path.display(), error))
}

pub fn append_categorized_log(log_path: &Path, category: &str, message: &str) {
    let line = format_log_line(Local::now(), category, message);
    if let Err(error) = append_log_line(log_path, &line) {
        eprintln!("{error}");
        eprint!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn resolve_desktop_log_path_places_log_under_root_logs_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/tmp/panel")), "desktop.log");
        assert_eq!(path, PathBuf::from("/tmp/panel/logs/desktop.log"));
    }

    #[test]
    fn resolve_desktop_log_path_falls_back_to_temp_dir() {
        let path = resolve_desktop_log_path(None, "desktop.log");
        assert!(path.starts_with(env::temp_dir()));
        assert!(path.ends_with("logs/desktop.log"));
    }

    #[test]
    fn format_log_line_includes_category_and_trims_trailing_newline() {
        let timestamp = Local
            .with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
            .single()
            .expect("valid local timestamp");
        let line = format_log_line(timestamp, "menu", "opened window\n");
        assert!(line.starts_with("[2024-05-01T12:30:00.000"));
        assert!(line.ends_with("] [menu] opened window\n"));
    }

    #[test]
    fn append_log_line_creates_parent_dirs_and_appends() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let log_path = temp.path().join("logs").join("desktop.log");

        append_log_line(&log_path, "first\n").expect("first append");
        append_log_line(&log_path, "second\n").expect("second append");

        let contents = fs::read_to_string(&log_path).expect("read log");
        assert_eq!(contents, "first\nsecond\n");
    }
}
