//! # Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators this subsystem depends on but does not implement: the hash
//! provider, the cryptographic primitive and the file-system layer.

use crate::domain::entities::{Digest, HashAlgorithm};
use crate::domain::errors::VerifyError;
use crate::domain::key_blob::KeyBlobError;
use bitflags::bitflags;
use std::io::{Read, Seek};
use thiserror::Error;

// =============================================================================
// Hash Provider
// =============================================================================

/// Error from a hash provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HashError {
    /// Reading the content to hash failed
    #[error("Failed to read content: {0}")]
    Io(String),

    /// The provider could not produce a digest
    #[error("Hash provider unavailable: {0}")]
    Unavailable(String),
}

/// Computes digests over buffers and open files.
///
/// A provider is fixed to one algorithm for its lifetime.
pub trait HashProvider: Send + Sync {
    /// Algorithm of every digest this provider produces.
    fn algorithm(&self) -> HashAlgorithm;

    /// Digest a buffer.
    fn hash_buffer(&self, data: &[u8]) -> Result<Digest, HashError>;

    /// Digest the full content of an open file, from offset zero.
    fn hash_file<R: Read + Seek + ?Sized>(&self, file: &mut R) -> Result<Digest, HashError>;
}

// =============================================================================
// Cryptographic Primitive
// =============================================================================

/// Error importing public key material.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyImportError {
    /// The material is not a well-formed public key blob
    #[error("Malformed key material: {0}")]
    Malformed(#[from] KeyBlobError),

    /// The primitive refused the decoded key
    #[error("Key rejected by primitive: {0}")]
    Rejected(String),
}

/// Public-key signature primitive.
///
/// Verification must be safe to call concurrently on the same key.
pub trait CryptoProvider: Send + Sync {
    /// Imported verification key.
    type Key: Send + Sync;

    /// Import a public key blob.
    fn import_public_key(&self, material: &[u8]) -> Result<Self::Key, KeyImportError>;

    /// Check `signature` over `digest` with the provider's fixed padding.
    ///
    /// A signature that does not validate is reported as
    /// [`VerifyError::VerificationFailed`].
    fn verify(&self, key: &Self::Key, digest: &Digest, signature: &[u8])
        -> Result<(), VerifyError>;

    /// Release an imported key.
    fn destroy_key(&self, key: Self::Key);
}

// =============================================================================
// File System
// =============================================================================

/// Error from the file-system layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IoError {
    /// No file at this path
    #[error("Object not found: {path}")]
    NotFound { path: String },

    /// Opening for read is not permitted
    #[error("Access denied: {path}")]
    AccessDenied { path: String },

    /// A conflicting lock is held on the file
    #[error("Sharing violation: {path}")]
    SharingViolation { path: String },

    /// A non-directory open found a directory
    #[error("Not a regular file: {path}")]
    NotAFile { path: String },

    /// A reparse point or symbolic link was encountered and not followed
    #[error("Reparse point not followed: {path}")]
    ReparsePoint { path: String },

    /// The name of an open file could not be resolved
    #[error("Name unavailable: {0}")]
    NameUnavailable(String),

    /// Any other failure
    #[error("I/O failure on {path}: {message}")]
    Other { path: String, message: String },
}

impl IoError {
    /// Classify a `std::io::Error` raised while operating on `path`.
    pub fn from_io(path: &str, err: std::io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => IoError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => IoError::AccessDenied { path },
            std::io::ErrorKind::WouldBlock => IoError::SharingViolation { path },
            _ => IoError::Other {
                path,
                message: err.to_string(),
            },
        }
    }
}

bitflags! {
    /// Access other openers keep while the file is open.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShareAccess: u32 {
        const READ = 0x0000_0001;
        const WRITE = 0x0000_0002;
        const DELETE = 0x0000_0004;
    }
}

bitflags! {
    /// Open behaviour.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenFlags: u32 {
        /// Synchronous, non-alertable I/O
        const SYNCHRONOUS_IO = 0x0000_0020;
        /// Fail if the name denotes a directory
        const NON_DIRECTORY_FILE = 0x0000_0040;
        /// Complete instead of waiting when an oplock break is pending
        const COMPLETE_IF_OPLOCKED = 0x0000_0100;
        /// Fail if the final path component is a reparse point or symbolic link
        const DONT_REPARSE = 0x0000_1000;
    }
}

/// Parameters of a read-only open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenRequest {
    /// Access granted to concurrent openers
    pub share: ShareAccess,
    /// Open behaviour
    pub flags: OpenFlags,
}

impl OpenRequest {
    const FLAGS: OpenFlags = OpenFlags::SYNCHRONOUS_IO
        .union(OpenFlags::NON_DIRECTORY_FILE)
        .union(OpenFlags::COMPLETE_IF_OPLOCKED)
        .union(OpenFlags::DONT_REPARSE);

    /// Opening a detached signature: concurrent readers only.
    pub const SIGNATURE: Self = Self {
        share: ShareAccess::READ,
        flags: Self::FLAGS,
    };

    /// Opening the file under verification: non-exclusive.
    pub const TARGET: Self = Self {
        share: ShareAccess::READ
            .union(ShareAccess::WRITE)
            .union(ShareAccess::DELETE),
        flags: Self::FLAGS,
    };
}

/// Result of a successful open.
#[derive(Debug)]
pub enum OpenOutcome<F> {
    /// The file is open and usable
    Opened(F),
    /// The file was opened but an oplock break is still in progress
    OplockBreakInProgress(F),
}

/// File-system layer.
///
/// Open files are closed by dropping them.
pub trait FileSystem: Send + Sync {
    /// An open file.
    type File: Read + Seek + Send;

    /// Path separator of this namespace. Valid names start with it.
    fn separator(&self) -> char;

    /// Open an existing file for reading.
    fn open(&self, path: &str, request: OpenRequest)
        -> Result<OpenOutcome<Self::File>, IoError>;

    /// Full name of an open file.
    fn resolve_name(&self, file: &Self::File) -> Result<String, IoError>;

    /// Whether two open files denote the same underlying file object.
    fn is_same_file(&self, a: &Self::File, b: &Self::File) -> bool;
}
