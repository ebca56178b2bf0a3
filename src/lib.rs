//! Claude Code hooks that forward session lifecycle records to a local log
//! server. Delivery is best-effort: hooks never fail the host session because
//! the server is down.

use tracing_subscriber::EnvFilter;

pub mod config;
pub mod hooks;
pub mod input;
pub mod notify;
pub mod transcript;

/// Install the stderr subscriber. `RUST_LOG` overrides the default `warn`
/// level; stdout is left untouched for the host.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
