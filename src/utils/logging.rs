//! Process-wide tracing subscriber setup for the binaries.

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber on stderr.
///
/// `RUST_LOG` wins when it is set and valid, otherwise `default_directive`
/// (for example `"info"` or `"chess_ai=debug"`) is used. A second call is a
/// no-op so tests and binaries can both call it.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%H:%M:%S%.3f".to_owned()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
