//! Structured logging setup
//!
//! Initializes the `tracing` subscriber once per process, writing to stderr
//! so stdout stays clean for formatted detection output. The level comes from
//! CLI flags, then `BUILDHINT_LOG_LEVEL`, then defaults to INFO. Setting
//! `RUST_LOG` overrides all of this via the standard env-filter syntax.

use std::env;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Level selection derived from CLI flags
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOptions {
    pub verbose: bool,
    pub quiet: bool,
    pub level: Option<Level>,
}

/// Initializes logging from the given options
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_logging(opts: LoggingOptions) {
    INIT.call_once(|| {
        let level = if let Some(level) = opts.level {
            level
        } else if opts.verbose {
            Level::DEBUG
        } else if opts.quiet {
            Level::ERROR
        } else {
            let level_str =
                env::var("BUILDHINT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
            parse_level(&level_str)
        };

        let mut filter = EnvFilter::from_default_env();
        if env::var("RUST_LOG").is_err() {
            filter = filter.add_directive(
                format!("buildhint={}", level)
                    .parse()
                    .expect("static directive is valid"),
            );
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

/// Parses a log level string, falling back to INFO on unknown input
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}
