//! Diagnostic logging for the CLI.
//!
//! The library emits `tracing` events (hydration fallbacks, storage write
//! failures, mutations). Here they are sent to stderr so they never mix with
//! command output on stdout.
//!
//! Level selection, highest priority first:
//! 1. `ROSTER_LOG` (any `EnvFilter` directive, e.g. `rosterapp=debug`)
//! 2. `-v` / `--verbose`: `debug`
//! 3. default: `warn`

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const LOG_ENV: &str = "ROSTER_LOG";

fn build_env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(level)
    })
}

pub fn init_logging(verbose: bool) {
    let layer = fmt::layer()
        .with_target(verbose)
        .without_time()
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = Registry::default()
        .with(build_env_filter(verbose))
        .with(layer)
        .try_init();
}
