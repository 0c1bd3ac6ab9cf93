//! Tracing subscriber setup
use crate::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the env filter: RUST_LOG if set, else the configured default level,
/// plus any configured dependency filter.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_level));

    match &config.dependency_filter {
        Some(dep_filter) if !dep_filter.trim().is_empty() => {
            let filter_string = format!("{},{}", env_filter, dep_filter);
            EnvFilter::try_new(&filter_string).unwrap_or(env_filter)
        },
        _ => env_filter,
    }
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays machine readable.
pub fn init(config: &LoggingConfig) {
    let env_filter = build_filter(config);

    let result = if config.format == "json" {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        let format = fmt::format().with_thread_ids(true).with_target(false);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().event_format(format).with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }
}
