use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Initialize the tracing subscriber: `RUST_LOG`-controlled filter with an
/// `info` default, compact single-line output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    Registry::default().with(filter).with(fmt::layer().with_target(false)).init();
}
