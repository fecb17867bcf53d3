//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::Digest;
use crate::domain::errors::VerifyError;

/// Primary Signature Verification API.
///
/// Every operation is synchronous and may block on file I/O or on the
/// cryptographic primitive. Implementations must be thread-safe
/// (`Send + Sync`) once the trust store is initialized.
///
/// Success is the only outcome that grants trust; the error kind is for
/// diagnostics.
pub trait SignatureVerificationApi: Send + Sync {
    /// Caller-owned verification key.
    type Key;

    /// Open file handle of the underlying file system.
    type File;

    // =========================================================================
    // Digest Verification
    // =========================================================================

    /// Verify a precomputed digest against every active trust anchor.
    fn verify_digest(&self, digest: &Digest, signature: &[u8]) -> Result<(), VerifyError>;

    /// Verify a precomputed digest against one explicit key.
    fn verify_digest_with_key(
        &self,
        key: &Self::Key,
        digest: &Digest,
        signature: &[u8],
    ) -> Result<(), VerifyError>;

    // =========================================================================
    // Buffer Verification
    // =========================================================================

    /// Hash `data` and verify it against every active trust anchor.
    fn verify_buffer(&self, data: &[u8], signature: &[u8]) -> Result<(), VerifyError>;

    /// Hash `data` and verify it against one explicit key.
    fn verify_buffer_with_key(
        &self,
        key: &Self::Key,
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), VerifyError>;

    // =========================================================================
    // File Verification
    // =========================================================================

    /// Verify an open file against its sibling `.sig` file.
    ///
    /// `name` is used instead of the name resolved from `file` when supplied.
    fn verify_file_object(
        &self,
        file: &mut Self::File,
        name: Option<&str>,
    ) -> Result<(), VerifyError>;

    /// Open `path` and verify it against its sibling `.sig` file.
    ///
    /// When `expected` is supplied, the freshly opened file must be the same
    /// underlying file object or the call fails with
    /// [`VerifyError::IdentityMismatch`] before any verification.
    fn verify_file(&self, path: &str, expected: Option<&Self::File>) -> Result<(), VerifyError>;
}
