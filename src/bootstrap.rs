//! Process-wide environment setup.
//!
//! [`configure_environment`] installs the tracing subscriber. It may be
//! called any number of times; only the first call has an effect.

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ServerConfig};

static CONFIGURED: OnceCell<()> = OnceCell::new();

/// Installs logging from the server config, once per process.
///
/// `RUST_LOG` overrides the configured filter. A subscriber installed by
/// someone else first is left in place.
pub fn configure_environment(server: &ServerConfig) {
    CONFIGURED.get_or_init(|| install_subscriber(server));
}

fn install_subscriber(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match server.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}
