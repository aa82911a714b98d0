//! Diagnostic logging setup.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// The filter comes from `WHOIS_LOG`, then `RUST_LOG`, then `warn`.
/// `--debug` forces `debug` for the whois crates.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("warn,whois_core=debug,whois_client=debug,whois_cli=debug")
    } else {
        EnvFilter::try_from_env("WHOIS_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded in tests.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init()
        .is_ok();

    if installed {
        debug!("logging initialized");
    }
}
