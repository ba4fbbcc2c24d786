//! Creates a `tracing_subscriber` registry which writes
//! classifier spans and `log` records to stdout, filtered
//! by the environment.
//!
//! An example environment is shown:
//! ```bash
//! RUST_LOG=routers_tunnel=trace
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer();

    // Initialise tracing with subscribers and environment filter
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}
