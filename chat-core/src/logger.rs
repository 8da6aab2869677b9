//! Tracing initialization for the chat API: colored console output plus a plain-text log file.

use anyhow::Context;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset: service logs at info, sqlx statement logging only on warnings.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber: one console layer and one file layer (no ANSI escapes) appending
/// to `log_file_path`. The log directory is created if missing.
///
/// Load `.env` before calling this so `RUST_LOG` from the file is honored.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let file = open_log_file(log_file_path)?;

    let console_layer = fmt::layer().with_target(true);
    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Install tracing subscriber")
}

fn open_log_file(log_file_path: &str) -> anyhow::Result<File> {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Create log directory {}", parent.display()))?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("Open log file {}", log_file_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_open_log_file_creates_directory_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("nested").join("chat-api.log");
        let log_path = log_path.to_str().unwrap();

        {
            use std::io::Write;
            let mut file = open_log_file(log_path).unwrap();
            writeln!(file, "first").unwrap();
        }
        {
            use std::io::Write;
            let mut file = open_log_file(log_path).unwrap();
            writeln!(file, "second").unwrap();
        }

        assert_eq!(fs::read_to_string(log_path).unwrap(), "first\nsecond\n");
    }
}
