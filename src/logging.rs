use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize tracing from the logging config.
///
/// `RUST_LOG` overrides the configured level. With `file` set, logs are
/// appended there without ANSI colors so the terminal front end stays
/// readable; otherwise they go to stderr.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    if let Some(path) = &config.file {
        match open_log_file(path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .with_timer(UtcTime::rfc_3339());
                let _ = registry.with(file_layer).try_init();
                return;
            }
            Err(err) => {
                eprintln!(
                    "Warning: Failed to open log file '{}': {}",
                    path.display(),
                    err
                );
            }
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());
    let _ = registry.with(stderr_layer).try_init();
}

/// Open `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn log_file_creates_missing_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("logs").join("haepari.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unusable_parent_is_reported() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("haepari.log");
        assert!(open_log_file(&path).is_err());
    }
}
