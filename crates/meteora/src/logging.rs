//! File-based tracing setup.
//!
//! The terminal belongs to the UI, so logs go to
//! `<data dir>/meteora/logs/meteora.log`. `METEORA_LOG` takes an
//! `EnvFilter` directive, e.g. `METEORA_LOG=meteora=debug`.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "METEORA_LOG";
const DEFAULT_FILTER: &str = "meteora=info,meteora_shower=info,meteora_config=info";

fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "meteora").map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered records on drop and must live until
/// the app exits. Logging is skipped with a warning if no log directory is
/// available.
pub fn init() -> Option<WorkerGuard> {
    let Some(dir) = log_dir() else {
        eprintln!("Warning: no data directory, logging disabled");
        return None;
    };
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Warning: failed to create log directory {}: {e}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, "meteora.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false);

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: failed to install logger: {e}");
        return None;
    }

    tracing::info!(log_dir = %dir.display(), "logging initialized");
    Some(guard)
}
