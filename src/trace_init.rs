//! Optional JSON trace output (feature `trace`).

use std::path::Path;

/// Environment variable holding the trace filter directives.
pub const LOG_ENV: &str = "GEEZ_TRANSLIT_LOG";

/// Flushes buffered trace output when dropped.
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: tracing_appender::non_blocking::WorkerGuard,
}

/// Install a JSON subscriber writing to `log_dir/geez-translit-trace.jsonl`.
///
/// Returns `None` when a global subscriber is already set or the `trace`
/// feature is off. Keep the guard alive until the process is done logging.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<TraceGuard> {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let file_appender = tracing_appender::rolling::never(log_dir, "geez-translit-trace.jsonl");
    let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new("geez_translit=debug")),
        )
        .try_init()
        .ok()?;

    Some(TraceGuard { _worker: worker })
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Option<TraceGuard> {
    None
}
