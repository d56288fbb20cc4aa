//! Logging initialization.
//!
//! The board runs as a single small service, so logs go straight to stdout:
//! pretty output while developing, JSON lines in deployment where the host's
//! log shipper picks them up.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Default filter directives for a configured level.
///
/// Repository timings are already exported as histograms, so sqlx's
/// per-statement logging is capped at warn unless `RUST_LOG` overrides it.
fn filter_directives(level: &str) -> String {
    format!("{level},sqlx=warn,hyper=warn")
}

/// Initializes the tracing subscriber from configuration.
///
/// A `RUST_LOG` value takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config.level)));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            let json_layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_target(true);
            subscriber.with(json_layer).init();
        }
        _ => {
            let pretty_layer = fmt::layer()
                .pretty()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true);
            subscriber.with(pretty_layer).init();
        }
    }
}
