//! Structured logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Binary entry point: `DEBUG` when `verbose`, otherwise `RUST_LOG` with a
/// `warn` fallback.
pub fn init_logging(verbose: bool) {
    if verbose {
        init_logging_at(tracing::Level::DEBUG);
    } else {
        init_logging_from_env("warn");
    }
}

/// Initialize the tracing subscriber at `level`. Later calls are ignored.
pub fn init_logging_at(level: tracing::Level) {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

/// Initialize logging from `RUST_LOG`, falling back to `default_filter`.
/// Output goes to stderr so it never mixes with command output.
pub fn init_logging_from_env(default_filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}
