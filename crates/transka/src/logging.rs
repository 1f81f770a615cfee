//! Tracing setup: console output plus a daily rolling log file.

use crate::config::Config;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "transka=debug,transka_core=debug";

/// Install the global subscriber.
///
/// Returns the file writer's guard, which must live as long as logging is
/// needed. File logging is skipped (console only) when the log directory
/// cannot be created.
pub fn init() -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let (file_layer, guard) = match Config::logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "transka.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {e}");
            (None, None)
        }
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()
    {
        eprintln!("Failed to install tracing subscriber: {e}");
    }

    guard
}
