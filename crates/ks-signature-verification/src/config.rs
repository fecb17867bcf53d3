//! Configuration for the signature verification subsystem.

use crate::domain::entities::{TrustMode, MAX_SIGNATURE_LENGTH};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The signature bound is zero
    #[error("max_signature_length must be non-zero")]
    ZeroSignatureLength,

    /// The signature bound exceeds the hard ceiling
    #[error("max_signature_length {0} exceeds the ceiling of {} bytes", MAX_SIGNATURE_LENGTH)]
    SignatureLengthTooLarge(usize),
}

/// Verifier configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Activate test-class keys in addition to production keys
    pub test_signing: bool,
    /// Largest detached signature read from disk, in bytes
    pub max_signature_length: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            test_signing: false,
            max_signature_length: MAX_SIGNATURE_LENGTH,
        }
    }
}

impl VerifierConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `KS_TEST_SIGNING`: Activate test keys (`1`/`true`, default: false)
    /// - `KS_MAX_SIGNATURE_LENGTH`: Signature read bound (default: 1024)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            test_signing: lookup("KS_TEST_SIGNING")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.test_signing),

            max_signature_length: lookup("KS_MAX_SIGNATURE_LENGTH")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_signature_length),
        }
    }

    pub fn with_test_signing(mut self, enabled: bool) -> Self {
        self.test_signing = enabled;
        self
    }

    pub fn with_max_signature_length(mut self, length: usize) -> Self {
        self.max_signature_length = length;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.max_signature_length {
            0 => Err(ConfigError::ZeroSignatureLength),
            n if n > MAX_SIGNATURE_LENGTH => Err(ConfigError::SignatureLengthTooLarge(n)),
            _ => Ok(()),
        }
    }

    /// Trust mode selected by this configuration.
    pub fn trust_mode(&self) -> TrustMode {
        TrustMode::new(self.test_signing)
    }
}

impl From<&VerifierConfig> for TrustMode {
    fn from(config: &VerifierConfig) -> Self {
        config.trust_mode()
    }
}
