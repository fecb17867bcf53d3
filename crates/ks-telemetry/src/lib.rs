//! # Keystone Telemetry
//!
//! Structured logging for processes that host the verification core.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ks_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!
//!     // Verification events are now written to stdout
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `KS_SERVICE_NAME` | `keystone` | Service name in events |
//! | `KS_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directive |
//! | `KS_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `KS_JSON_LOGS` | `false` | JSON formatting |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;

#[doc(hidden)]
pub use tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Invalid log filter {0}")]
    Filter(String),

    #[error("A global subscriber is already installed")]
    AlreadyInitialized,
}

/// Install the global subscriber.
///
/// Returns a guard to hold for the lifetime of the process. A second call
/// in the same process fails with [`TelemetryError::AlreadyInitialized`].
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    tracing_setup::init_tracing(&config)?;

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active.
#[derive(Debug)]
pub struct TelemetryGuard {
    service_name: String,
}

impl TelemetryGuard {
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}

/// Span carrying the verification context of an operation.
///
/// # Example
///
/// ```rust,ignore
/// let _span = ks_telemetry::verify_span!("verify_file", path = %path).entered();
/// ```
#[macro_export]
macro_rules! verify_span {
    ($name:expr) => {
        $crate::tracing::info_span!($name, subsystem = "signature-verification")
    };
    ($name:expr, $($field:tt)*) => {
        $crate::tracing::info_span!($name, subsystem = "signature-verification", $($field)*)
    };
}
