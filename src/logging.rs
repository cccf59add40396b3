//! Log output setup
//!
//! Installs a `tracing` subscriber writing to stderr. `RUST_LOG` takes
//! precedence; otherwise the level follows the `-v` count.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter directive for a `-v` count
///
/// `None` disables logging entirely.
#[must_use]
pub fn level_directive(verbosity: u8, quiet_by_default: bool) -> Option<&'static str> {
    match verbosity {
        0 if quiet_by_default => None,
        0 => Some("wordle_narrow=warn"),
        1 => Some("wordle_narrow=info"),
        2 => Some("wordle_narrow=debug"),
        _ => Some("wordle_narrow=trace"),
    }
}

/// Initialize logging for the binary
///
/// `quiet_by_default` keeps logging off unless asked for, for modes that own
/// the whole terminal. Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8, quiet_by_default: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        level_directive(verbosity, quiet_by_default).map_or_else(|| EnvFilter::new("off"), EnvFilter::new)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
