//! File-based logging
//!
//! The TUI owns the terminal, so tracing output goes to a rolling log file
//! instead of stdout.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "appue";

/// Initialize the logging system.
///
/// Logs are written to `.logs/appue.YYYY-MM-DD.log` with daily rotation.
/// `RUST_LOG` overrides the default filter:
///
/// - `appue` modules: DEBUG
/// - `rodio`: INFO
/// - `symphonia`: WARN (its probe logging is noisy)
/// - Other crates: WARN
pub fn init_logging() -> anyhow::Result<()> {
    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard flushes on drop; it has to outlive every log call.
    Box::leak(Box::new(guard));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("appue=debug,rodio=info,symphonia=warn,warn")
    });

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Logging initialized - logs written to {}/", LOG_DIR);

    Ok(())
}

/// Log the outcome of an audio handle acquisition
#[macro_export]
macro_rules! log_audio_result {
    ($track_id:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::info!(track_id = %$track_id, "Audio handle acquired"),
            Err(e) => tracing::warn!(track_id = %$track_id, error = %e, "Audio handle acquisition failed"),
        }
    };
}
