//! Logging setup for the command-line tool.
//!
//! Library code only emits `tracing` events; the binary calls [`init`] once to
//! print them to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags.
pub const LOG_ENV: &str = "VERBUMP_LOG";

/// Filter directive for a `-v` count: warn, info, debug, then trace.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the filter: `VERBUMP_LOG`, then `RUST_LOG`, then the verbosity level.
pub fn filter_directive(verbosity: u8, env_override: Option<String>) -> String {
    env_override
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| level_for_verbosity(verbosity).to_string())
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let env_override = std::env::var(LOG_ENV)
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok());
    let directive = filter_directive(verbosity, env_override);

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter '{}': {}", directive, e);
        EnvFilter::new(level_for_verbosity(verbosity))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
