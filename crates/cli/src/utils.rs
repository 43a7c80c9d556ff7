use tracing_subscriber::EnvFilter;

use crate::defaults;

/// Log filter directive for a `-v` count.
pub fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => defaults::LOG_LEVEL,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over the verbosity flag when it is set.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbosity)));

    // A subscriber may already be installed (e.g. in tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
