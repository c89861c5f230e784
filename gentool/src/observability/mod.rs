//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so they never mix with the
//! prompts and results the CLI prints on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{GenError, Result};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or
/// everything down to `trace` for this crate when `verbose` is set.
///
/// # Errors
///
/// Returns [`GenError::Config`] if a global subscriber is already installed.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| GenError::Config(format!("failed to initialize logging: {e}")))
}

/// Filter directives used when `RUST_LOG` is not set
#[must_use]
pub const fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "debug,gentool=trace"
    } else {
        "warn"
    }
}
