//! Diagnostic logging.
//!
//! Structured `tracing` events go to stderr so they never mix with command
//! output. The filter comes from `FILESWITCHER_LOG` unless `-v` is given.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "FILESWITCHER_LOG";

/// Filter directive for a `-v` count
pub fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "fileswitcher=warn",
        1 => "fileswitcher=info",
        2 => "fileswitcher=debug",
        _ => "fileswitcher=trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8, ansi: bool) {
    let filter = if verbose > 0 {
        EnvFilter::new(verbosity_directive(verbose))
    } else {
        EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(0)))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}
