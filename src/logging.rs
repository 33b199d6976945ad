//! Tracing subscriber setup shared by the binaries.
//!
//! Logs always go to stderr; the RPC server owns stdout for its protocol.

use tracing_subscriber::{fmt, EnvFilter};

use crate::types::settings::{LogFormat, LoggingSettings};

/// Installs the global subscriber. `RUST_LOG` overrides `settings.level`.
///
/// Calling it twice is harmless: the second install is ignored.
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = match settings.format {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Text => subscriber.try_init(),
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
