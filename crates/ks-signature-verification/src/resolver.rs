//! # File Signature Resolver
//!
//! Verifies a file against the detached signature stored next to it.
//!
//! ## Flow
//!
//! ```text
//! resolve name -> validate name -> derive .sig path -> open .sig
//!     -> read signature (one read, bounded) -> hash target -> verify with store
//! ```
//!
//! Each step fails fast; nothing is retried. The signature handle, the read
//! buffer and the derived names are owned by the call and released on every
//! exit path.

use crate::domain::engine::SignatureEngine;
use crate::domain::errors::VerifyError;
use crate::domain::key_store::KeyStore;
use crate::domain::sig_path::{derive_sig_path, validate_file_name};
use crate::ports::outbound::{
    CryptoProvider, FileSystem, HashProvider, IoError, OpenOutcome, OpenRequest,
};
use std::borrow::Cow;
use std::io::Read;
use tracing::debug;

/// Locates and checks detached `.sig` files.
///
/// Always verifies against the whole active key store, never a caller key.
pub struct FileSignatureResolver<'a, C: CryptoProvider, H: HashProvider, F: FileSystem> {
    engine: SignatureEngine<'a, C>,
    hasher: &'a H,
    fs: &'a F,
    max_signature_length: usize,
}

impl<'a, C, H, F> FileSignatureResolver<'a, C, H, F>
where
    C: CryptoProvider,
    H: HashProvider,
    F: FileSystem,
{
    /// Create a resolver reading at most `max_signature_length` signature bytes.
    pub fn new(
        store: &'a KeyStore<C>,
        hasher: &'a H,
        fs: &'a F,
        max_signature_length: usize,
    ) -> Self {
        Self {
            engine: SignatureEngine::new(store),
            hasher,
            fs,
            max_signature_length,
        }
    }

    /// Verify an open file against its sibling signature.
    ///
    /// `name` replaces the name the file system reports for `file`.
    pub fn verify_file_object(
        &self,
        file: &mut F::File,
        name: Option<&str>,
    ) -> Result<(), VerifyError> {
        let name = match name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.fs.resolve_name(file).map_err(|e| {
                debug!(error = %e, "Failed to resolve file name");
                VerifyError::name_invalid("")
            })?),
        };

        let sig_path = derive_sig_path(&name, self.fs.separator())
            .inspect_err(|_| debug!(name = %name, "File name is invalid"))?;

        let mut sig_file = self.open_normalized(&sig_path, OpenRequest::SIGNATURE)?;
        let signature = self.read_signature(&mut sig_file, &sig_path)?;
        drop(sig_file);

        let digest = self.hasher.hash_file(file).map_err(|e| {
            debug!(name = %name, error = %e, "Failed to hash file");
            VerifyError::from(e)
        })?;

        self.engine
            .verify_with_store(&digest, &signature)
            .inspect_err(|e| debug!(name = %name, error = %e, "Signature verification failed"))
    }

    /// Open `path` and verify it against its sibling signature.
    ///
    /// When `expected` is supplied, the file opened here must be the same
    /// file object, otherwise [`VerifyError::IdentityMismatch`].
    pub fn verify_file(&self, path: &str, expected: Option<&F::File>) -> Result<(), VerifyError> {
        validate_file_name(path, self.fs.separator())
            .inspect_err(|_| debug!(path, "File name is invalid"))?;

        let mut file = self.open_normalized(path, OpenRequest::TARGET)?;

        if let Some(expected) = expected {
            if !self.fs.is_same_file(expected, &file) {
                debug!(path, "File objects do not match");
                return Err(VerifyError::IdentityMismatch);
            }
        }

        self.verify_file_object(&mut file, Some(path))
    }

    /// Open a file, treating an oplock break in progress as a sharing violation.
    fn open_normalized(&self, path: &str, request: OpenRequest) -> Result<F::File, VerifyError> {
        match self.fs.open(path, request) {
            Ok(OpenOutcome::Opened(file)) => Ok(file),
            Ok(OpenOutcome::OplockBreakInProgress(_)) => {
                debug!(path, "Oplock break in progress");
                Err(VerifyError::SharingViolation { path: path.into() })
            }
            Err(e) => {
                debug!(path, error = %e, "Failed to open file");
                Err(e.into())
            }
        }
    }

    /// Read up to the signature bound in a single call.
    fn read_signature<R: Read + ?Sized>(
        &self,
        sig_file: &mut R,
        path: &str,
    ) -> Result<Vec<u8>, VerifyError> {
        let mut signature = Vec::new();
        signature
            .try_reserve_exact(self.max_signature_length)
            .map_err(|_| {
                debug!(
                    requested = self.max_signature_length,
                    "Failed to allocate signature buffer"
                );
                VerifyError::InsufficientResources {
                    requested: self.max_signature_length,
                }
            })?;
        signature.resize(self.max_signature_length, 0);

        let read = sig_file.read(&mut signature).map_err(|e| {
            debug!(path, error = %e, "Failed to read signature file");
            VerifyError::from(IoError::from_io(path, e))
        })?;

        signature.truncate(read);
        Ok(signature)
    }
}
