//! Global `tracing` subscriber setup
//!
//! One registry with:
//! - an `EnvFilter` from `RUST_LOG`, falling back to `LoggingConfig::level`
//! - stderr output, human-readable or JSON lines
//! - optionally a daily-rolled file under `LoggingConfig::directory`

use anyhow::Context;
use stepcast_domain::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

const LOG_FILE_PREFIX: &str = "stepcast.log";

/// Keeps the background file writer alive; flushes on drop.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug)]
pub struct LoggingGuard {
    file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    /// Whether a file writer is attached.
    #[must_use]
    pub fn has_file_writer(&self) -> bool {
        self.file_guard.is_some()
    }
}

/// Filter from `RUST_LOG`, or `fallback_level` when unset or unparsable.
///
/// # Errors
/// `fallback_level` itself is not a valid filter directive.
pub fn build_filter(fallback_level: &str) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback_level)
            .with_context(|| format!("invalid log level directive: {fallback_level}")),
    }
}

/// Install the global subscriber.
///
/// # Errors
/// Invalid level directive, an unwritable log directory, or a subscriber
/// that was already installed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let filter = build_filter(&config.level)?;

    let (json_layer, text_layer) = if config.json {
        let layer = fmt::layer().json().with_writer(std::io::stderr).with_target(true);
        (Some(layer), None)
    } else {
        (None, Some(fmt::layer().with_writer(std::io::stderr).with_target(true)))
    };

    let (file_layer, file_guard) = match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)
                .with_context(|| format!("failed to create log directory {directory}"))?;
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer).with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber =
        Registry::default().with(filter).with(json_layer).with(text_layer).with(file_layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("a global tracing subscriber is already installed")?;

    tracing::info!(
        level = %config.level,
        json = config.json,
        directory = ?config.directory,
        "Logging initialised"
    );

    Ok(LoggingGuard { file_guard })
}
