//! Logging Infrastructure
//!
//! Console logging (pretty or JSON) plus an optional daily rotating file under
//! `<log_dir>/app`. Rotated files older than 14 days are removed at startup.

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Days a rotated application log is kept
const LOG_RETENTION_DAYS: i64 = 14;

/// Remove `app.YYYY-MM-DD` log files older than the retention window
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(());
    }

    let cutoff = chrono::Local::now().date_naive() - chrono::Duration::days(LOG_RETENTION_DAYS);

    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        // tracing-appender daily files are named `app.YYYY-MM-DD`
        if let Some(date_part) = name.strip_prefix("app.")
            && let Ok(date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(())
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level or filter directive (e.g. "info", "quote_engine=debug");
///   `RUST_LOG` takes precedence when set
/// * `json_format` - JSON output for production, pretty output otherwise
/// * `log_dir` - Optional directory for the daily rotating log file
pub fn init_logger_with_file(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            let app_log_dir = log_dir.join("app");
            fs::create_dir_all(&app_log_dir)?;
            cleanup_old_logs(log_dir)?;

            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(app_log))
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_removes_only_expired_app_logs() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("app");
        fs::create_dir_all(&app_dir).unwrap();

        let today = chrono::Local::now().date_naive();
        let old = today - chrono::Duration::days(30);
        let old_file = app_dir.join(format!("app.{}", old.format("%Y-%m-%d")));
        let fresh_file = app_dir.join(format!("app.{}", today.format("%Y-%m-%d")));
        let other_file = app_dir.join("notes.txt");
        for file in [&old_file, &fresh_file, &other_file] {
            fs::write(file, b"log").unwrap();
        }

        cleanup_old_logs(dir.path()).unwrap();

        assert!(!old_file.exists());
        assert!(fresh_file.exists());
        assert!(other_file.exists());
    }

    #[test]
    fn test_cleanup_without_app_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(cleanup_old_logs(dir.path()).is_ok());
    }
}
