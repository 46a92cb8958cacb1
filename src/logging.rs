use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use std::fs;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where and how verbosely to log.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Directory for the daily-rotated log files
    pub dir: Utf8PathBuf,
    /// File name prefix, e.g. `umap-config`
    pub prefix: String,
    /// Use debug level instead of info
    pub debug: bool,
    /// Also log to stderr
    pub console: bool,
}

impl LogSettings {
    pub fn new(dir: impl Into<Utf8PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            debug: false,
            console: false,
        }
    }

    fn filter(&self) -> EnvFilter {
        if self.debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    }
}

/// Create the log directory if it doesn't exist.
fn ensure_log_dir(settings: &LogSettings) -> Result<()> {
    if !settings.dir.exists() {
        fs::create_dir_all(&settings.dir)
            .with_context(|| format!("Failed to create log directory: {}", settings.dir))?;
    }
    Ok(())
}

/// Setup logging with a rotating file appender and optional console output.
///
/// # Returns
/// A guard that must be held for the duration of the program to keep logging active
pub fn setup_logging(settings: &LogSettings) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    ensure_log_dir(settings)?;

    let file_appender = rolling::daily(&settings.dir, &settings.prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log files
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    // stdout is reserved for command output (e.g. `show`)
    let console_layer = settings.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(settings.filter())
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(
        "Logging initialized: dir={}, prefix={}, debug={}, console={}",
        settings.dir,
        settings.prefix,
        settings.debug,
        settings.console
    );

    Ok(guard)
}
