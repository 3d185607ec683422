use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

pub const LOG_FILE: &str = "genomelab.log";

/// Pick the filter directive: `RUST_LOG`, then the command line, then config.
fn filter_directive(env: Option<String>, cli: Option<&str>, config: &str) -> String {
    env.filter(|s| !s.trim().is_empty())
        .or_else(|| cli.map(str::to_owned))
        .unwrap_or_else(|| config.to_owned())
}

/// Route `tracing` output to `<log dir>/genomelab.log`.
pub fn init(log: &LogConfig, cli_filter: Option<&str>) {
    let log_dir = log.resolved_directory();
    std::fs::create_dir_all(&log_dir).ok();

    let directive = filter_directive(std::env::var("RUST_LOG").ok(), cli_filter, &log.filter);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_appender),
        )
        .init();

    tracing::info!(directive = %directive, dir = ?log_dir, "logging initialised");
}
