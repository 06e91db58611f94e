//! # Telemetry
//!
//! Structured logging setup for hosts embedding the storefront.

use tracing_subscriber::EnvFilter;

use crate::error::{ServiceError, ServiceResult};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,shopkit_services=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopkit_services=trace` - Trace storefront calls only
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Returns an error instead of panicking if a global subscriber is
/// already installed, so hosts and tests can call it more than once.
pub fn init_tracing() -> ServiceResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ServiceError::Telemetry(e.to_string()))
}
