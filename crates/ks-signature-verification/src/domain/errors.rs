//! # Verification Errors
//!
//! Error types for trust store, signature and file verification operations.
//!
//! Every variant is diagnostic only. Callers must treat any `Err` as
//! "not authentic" and never grant partial trust based on the kind.

use crate::ports::outbound::{HashError, IoError, KeyImportError};
use thiserror::Error;

/// Errors that can occur during verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// The file name is not absolute, is too short, or could not be resolved
    #[error("Object name invalid: {name:?}")]
    NameInvalid { name: String },

    /// The file is locked, or an oplock break was in progress when opening it
    #[error("Sharing violation opening {path:?}")]
    SharingViolation { path: String },

    /// The file does not exist
    #[error("Object not found: {path:?}")]
    NotFound { path: String },

    /// The file exists but may not be opened for reading
    #[error("Access denied: {path:?}")]
    AccessDenied { path: String },

    /// Any other I/O layer failure, passed through
    #[error("I/O failure: {0}")]
    Io(IoError),

    /// The scoped signature buffer (or a derived name) could not be allocated
    #[error("Insufficient resources: could not allocate {requested} bytes")]
    InsufficientResources { requested: usize },

    /// The signature does not validate against any eligible key
    #[error("Signature verification failed")]
    VerificationFailed,

    /// The file opened by path is not the file object the caller expected
    #[error("File objects do not match")]
    IdentityMismatch,

    /// The hash provider failed
    #[error("Hash provider failed: {0}")]
    Hash(#[from] HashError),

    /// Key material could not be imported
    #[error("Key import failed: {0}")]
    KeyImport(#[from] KeyImportError),

    /// Verification keys were already initialized
    #[error("Verification keys already initialized")]
    AlreadyInitialized,
}

impl VerifyError {
    /// Build a [`VerifyError::NameInvalid`] for the given name.
    pub fn name_invalid(name: impl Into<String>) -> Self {
        VerifyError::NameInvalid { name: name.into() }
    }
}

impl From<IoError> for VerifyError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::NotFound { path } => VerifyError::NotFound { path },
            IoError::AccessDenied { path } => VerifyError::AccessDenied { path },
            IoError::SharingViolation { path } => VerifyError::SharingViolation { path },
            other => VerifyError::Io(other),
        }
    }
}
