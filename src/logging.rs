//! Diagnostic logging setup.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding a log filter directive for this tool
pub const LOG_ENV: &str = "BRANCH_BUMP_LOG";

/// Pick the filter directive.
///
/// `BRANCH_BUMP_LOG` wins, then `RUST_LOG`, then `debug` when verbose and
/// `warn` otherwise.
pub fn filter_directive(own: Option<&str>, rust_log: Option<&str>, verbose: bool) -> String {
    own.or(rust_log)
        .map(str::to_string)
        .unwrap_or_else(|| if verbose { "debug" } else { "warn" }.to_string())
}

/// Install the stderr subscriber. Call once, before any other work.
pub fn init(verbose: bool) {
    let own = std::env::var(LOG_ENV).ok();
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(own.as_deref(), rust_log.as_deref(), verbose);

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!(
            "invalid log directive '{}' ({}); defaulting to warn",
            directive, err
        );
        EnvFilter::new("warn")
    });

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A subscriber may already exist when embedded; keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
