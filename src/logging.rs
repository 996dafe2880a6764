use std::path::Path;

use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
}

fn file_layer<S>(log_dir: &Path, file_name: &str, level: LevelFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(tracing_appender::rolling::daily(log_dir, file_name))
        .with_ansi(false)
        .with_filter(level)
}

/// Console output plus daily rotating files per level
///
/// Log files will be created as: logs/info.log.2026-10-19, logs/error.log.2026-10-19, etc.
pub fn init_server_logging(log_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(console_layer)
        .with(file_layer(log_dir, "info.log", LevelFilter::INFO))
        .with(file_layer(log_dir, "warn.log", LevelFilter::WARN))
        .with(file_layer(log_dir, "error.log", LevelFilter::ERROR))
        .with(file_layer(log_dir, "debug.log", LevelFilter::DEBUG))
        .init();

    Ok(())
}

/// Stderr only, so one-shot commands keep stdout for their JSON output
pub fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
