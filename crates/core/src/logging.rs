//! Logging initialization and configuration.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info,phong_scene=debug,phong_app=debug";

/// Initialize the logging system with tracing.
///
/// This sets up tracing-subscriber with:
/// - Environment-based filtering (RUST_LOG), falling back to [`DEFAULT_FILTER`]
/// - Target names so upload and persistence events can be told apart
///
/// If a global subscriber is already installed it is kept, and the refusal
/// is reported at debug level through it.
///
/// # Example
/// ```
/// phong_core::init_logging();
/// tracing::info!("Lighting initialized");
/// ```
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .try_init()
    {
        tracing::debug!("Keeping existing tracing subscriber: {}", e);
    }
}
