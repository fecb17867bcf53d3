//! RSA-PSS verification primitive.
//!
//! Padding is fixed: PSS with SHA-512 as both the message hash and the MGF1
//! hash, and a 64-byte salt.

use crate::domain::entities::Digest;
use crate::domain::errors::VerifyError;
use crate::domain::key_blob::parse_public_blob;
use crate::ports::outbound::{CryptoProvider, KeyImportError};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Pss, RsaPublicKey};
use sha2::Sha512;
use tracing::trace;

/// PSS salt length in bytes.
pub const PSS_SALT_LEN: usize = 64;

/// An imported RSA public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPssKey {
    key: RsaPublicKey,
}

impl RsaPssKey {
    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.key.n().bits()
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.key
    }
}

/// [`CryptoProvider`] backed by the `rsa` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct RsaPssProvider;

impl RsaPssProvider {
    pub fn new() -> Self {
        Self
    }

    /// Wrap an already decoded public key.
    pub fn key_from_public(&self, key: RsaPublicKey) -> RsaPssKey {
        RsaPssKey { key }
    }
}

impl CryptoProvider for RsaPssProvider {
    type Key = RsaPssKey;

    fn import_public_key(&self, material: &[u8]) -> Result<RsaPssKey, KeyImportError> {
        let blob = parse_public_blob(material)?;
        let key = RsaPublicKey::new(
            BigUint::from_bytes_be(blob.modulus),
            BigUint::from_bytes_be(blob.exponent),
        )
        .map_err(|e| KeyImportError::Rejected(e.to_string()))?;

        trace!(bits = blob.bit_length, "Imported RSA public key");
        Ok(RsaPssKey { key })
    }

    fn verify(&self, key: &RsaPssKey, digest: &Digest, signature: &[u8]) -> Result<(), VerifyError> {
        key.key
            .verify(
                Pss::new_with_salt::<Sha512>(PSS_SALT_LEN),
                digest.as_bytes(),
                signature,
            )
            .map_err(|_| VerifyError::VerificationFailed)
    }

    fn destroy_key(&self, key: RsaPssKey) {
        trace!(bits = key.bits(), "Released RSA public key");
    }
}
