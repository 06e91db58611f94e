//! # Service Error Types
//!
//! Error types for storefront orchestration.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Service Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌──────────────────┐  ┌─────────────────────────┐│
//! │  │  Collaborator   │  │  Configuration   │  │     Core                ││
//! │  │                 │  │                  │  │                         ││
//! │  │  payment, email │  │  InvalidConfig   │  │  rule errors from       ││
//! │  │  rates, quotes  │  │  ConfigLoadFailed│  │  shopkit-core           ││
//! │  │  analytics, code│  │  ConfigSaveFailed│  │                         ││
//! │  └─────────────────┘  └──────────────────┘  └─────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Collaborator failures are passed through untouched: no retry, no local
//! recovery.

use shopkit_core::CoreError;
use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{service} failed: {message}")]
pub struct CollaboratorError {
    /// Which collaborator failed, e.g. "payment".
    pub service: &'static str,
    /// What it reported.
    pub message: String,
}

impl CollaboratorError {
    /// Creates a collaborator error.
    pub fn new(service: &'static str, message: impl Into<String>) -> Self {
        CollaboratorError {
            service,
            message: message.into(),
        }
    }
}

/// Service error type covering all orchestration failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    // =========================================================================
    // Collaborator Errors
    // =========================================================================
    /// An external collaborator rejected the call.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid storefront configuration.
    #[error("Invalid storefront configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Runtime Errors
    // =========================================================================
    /// The global tracing subscriber could not be installed.
    #[error("Failed to initialize tracing: {0}")]
    Telemetry(String),

    // =========================================================================
    // Core Errors
    // =========================================================================
    /// A shopkit-core rule failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ServiceError {
    fn from(err: toml::de::Error) -> Self {
        ServiceError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ServiceError {
    fn from(err: toml::ser::Error) -> Self {
        ServiceError::ConfigSaveFailed(err.to_string())
    }
}

impl ServiceError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidConfig(_)
                | ServiceError::ConfigLoadFailed(_)
                | ServiceError::ConfigSaveFailed(_)
        )
    }

    /// The collaborator error, if this came from one.
    pub fn as_collaborator(&self) -> Option<&CollaboratorError> {
        match self {
            ServiceError::Collaborator(err) => Some(err),
            _ => None,
        }
    }
}
