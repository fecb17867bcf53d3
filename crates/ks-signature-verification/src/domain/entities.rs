//! # Domain Entities
//!
//! Core data structures for trust-anchored verification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a SHA-512 digest in bytes.
pub const SHA512_DIGEST_LEN: usize = 512 / 8;

/// Hard upper bound on the size of a detached signature.
pub const MAX_SIGNATURE_LENGTH: usize = 1024;

/// Fixed suffix that replaces the tail of a file name to locate its signature.
pub const SIGNATURE_EXTENSION: &str = ".sig";

/// Number of characters replaced by [`SIGNATURE_EXTENSION`].
pub const SIGNATURE_EXTENSION_LEN: usize = SIGNATURE_EXTENSION.len();

// =============================================================================
// Trust Anchors
// =============================================================================

/// Trust class of an embedded key record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrustClass {
    /// Developer and test signing keys. Only eligible under test signing.
    Test,
    /// Release signing keys. Always eligible.
    Production,
}

/// Process-wide trust mode, fixed at startup.
///
/// Decides whether [`TrustClass::Test`] keys may be activated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrustMode {
    allow_test_keys: bool,
}

impl TrustMode {
    /// Only production keys are activated.
    pub const PRODUCTION: Self = Self {
        allow_test_keys: false,
    };

    /// Production and test keys are activated.
    pub const TEST_SIGNING: Self = Self {
        allow_test_keys: true,
    };

    /// Create a trust mode.
    pub fn new(allow_test_keys: bool) -> Self {
        Self { allow_test_keys }
    }

    /// Whether test-class keys are eligible for activation.
    pub fn allows_test_keys(&self) -> bool {
        self.allow_test_keys
    }

    /// Whether a key of the given class may be activated under this mode.
    pub fn admits(&self, class: TrustClass) -> bool {
        match class {
            TrustClass::Production => true,
            TrustClass::Test => self.allow_test_keys,
        }
    }
}

/// A public key record in a key table.
///
/// The built-in table lives in [`crate::domain::embedded_keys`]; the material
/// is a public key blob as understood by [`crate::domain::key_blob`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyRecord<'a> {
    /// Diagnostic name, used in traces only
    pub name: &'a str,
    /// Trust class gating activation
    pub trust_class: TrustClass,
    /// Public key blob
    pub material: &'a [u8],
}

impl<'a> KeyRecord<'a> {
    /// Create a key record.
    pub const fn new(name: &'a str, trust_class: TrustClass, material: &'a [u8]) -> Self {
        Self {
            name,
            trust_class,
            material,
        }
    }
}

// =============================================================================
// Digests
// =============================================================================

/// Digest algorithms understood by the verification path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-512 (64-byte digest)
    Sha512,
}

impl HashAlgorithm {
    /// Length of the digest in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Sha512 => SHA512_DIGEST_LEN,
        }
    }
}

/// A message digest produced by a [`crate::ports::outbound::HashProvider`].
///
/// Transient: created per verification call and never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Digest {
    algorithm: HashAlgorithm,
    bytes: [u8; SHA512_DIGEST_LEN],
}

impl Digest {
    /// Wrap a SHA-512 digest.
    pub fn sha512(bytes: [u8; SHA512_DIGEST_LEN]) -> Self {
        Self {
            algorithm: HashAlgorithm::Sha512,
            bytes,
        }
    }

    /// Algorithm that produced this digest.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.algorithm.digest_len()]
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digest")
            .field("algorithm", &self.algorithm)
            .field("bytes", &hex::encode(self.as_bytes()))
            .finish()
    }
}
