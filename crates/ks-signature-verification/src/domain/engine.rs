//! # Signature Engine
//!
//! Decides whether a `(digest, signature)` pair is valid under one key or
//! under the whole active key store.

use super::entities::Digest;
use super::errors::VerifyError;
use super::key_store::KeyStore;
use crate::ports::outbound::CryptoProvider;
use tracing::trace;

/// Verifies digests against a [`KeyStore`]. Never mutates key handles.
pub struct SignatureEngine<'s, C: CryptoProvider> {
    store: &'s KeyStore<C>,
}

impl<'s, C: CryptoProvider> SignatureEngine<'s, C> {
    /// Create an engine over an initialized store.
    pub fn new(store: &'s KeyStore<C>) -> Self {
        Self { store }
    }

    /// Verify with one explicit key.
    ///
    /// The primitive's failure status is returned as-is.
    pub fn verify_with_key(
        &self,
        key: &C::Key,
        digest: &Digest,
        signature: &[u8],
    ) -> Result<(), VerifyError> {
        self.store.crypto().verify(key, digest, signature)
    }

    /// Verify against every active key, in store order.
    ///
    /// The first key that validates wins. When none does, the failure of the
    /// last key tried is returned; an empty store yields
    /// [`VerifyError::VerificationFailed`].
    pub fn verify_with_store(&self, digest: &Digest, signature: &[u8]) -> Result<(), VerifyError> {
        let mut status = VerifyError::VerificationFailed;

        for handle in self.store.active_handles() {
            match self.verify_with_key(handle.key(), digest, signature) {
                Ok(()) => {
                    trace!(
                        key = handle.name(),
                        fingerprint = handle.fingerprint(),
                        "Signature accepted"
                    );
                    return Ok(());
                }
                Err(e) => {
                    trace!(key = handle.name(), error = %e, "Signature rejected by key");
                    status = e;
                }
            }
        }

        Err(status)
    }
}
