//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber.
///
/// `verbose` forces debug level; otherwise `RUST_LOG` is honoured and
/// defaults to warnings only. Calling this more than once is a no-op.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
