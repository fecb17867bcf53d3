//! # Test Helpers
//!
//! Fixtures shared by the unit tests and, through the `test-utils` feature,
//! by the workspace test suite:
//!
//! - [`FakeCrypto`]: a deterministic crypto primitive that records every call
//! - RSA fixture keys with private halves, so real PSS signatures can be made
//!   for key tables injected at startup

use crate::domain::entities::{Digest, KeyRecord, TrustClass};
use crate::domain::errors::VerifyError;
use crate::domain::key_blob::encode_public_blob;
use crate::ports::outbound::{CryptoProvider, KeyImportError};
use parking_lot::Mutex;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::{Pss, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest as _, Sha512};
use std::sync::{Arc, OnceLock};

// =============================================================================
// FAKE CRYPTO PRIMITIVE
// =============================================================================

/// Calls observed by a [`FakeCrypto`].
#[derive(Debug, Default)]
pub struct CryptoLedger {
    /// Labels of imported keys, in import order
    pub imported: Vec<String>,
    /// Labels of destroyed keys, in release order
    pub destroyed: Vec<String>,
    /// Labels of keys used for verification, in call order
    pub attempts: Vec<String>,
}

/// Key handle of [`FakeCrypto`]. The label is the imported material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeKey {
    pub label: String,
}

/// Deterministic stand-in for the RSA primitive.
///
/// Any material imports as a key labelled with its UTF-8 text, except
/// material starting with `bad`, which is rejected. A signature is valid for
/// a key when it equals [`FakeCrypto::sign`] of that key's label.
#[derive(Clone, Default)]
pub struct FakeCrypto {
    ledger: Arc<Mutex<CryptoLedger>>,
}

impl FakeCrypto {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared view of the call ledger.
    pub fn ledger(&self) -> Arc<Mutex<CryptoLedger>> {
        Arc::clone(&self.ledger)
    }

    /// Signature that the key labelled `label` accepts for `digest`.
    pub fn sign(label: &str, digest: &Digest) -> Vec<u8> {
        let mut signature = label.as_bytes().to_vec();
        signature.push(b':');
        signature.extend_from_slice(digest.as_bytes());
        signature
    }
}

impl CryptoProvider for FakeCrypto {
    type Key = FakeKey;

    fn import_public_key(&self, material: &[u8]) -> Result<FakeKey, KeyImportError> {
        if material.starts_with(b"bad") {
            return Err(KeyImportError::Rejected("fake rejection".into()));
        }
        let label = String::from_utf8_lossy(material).into_owned();
        self.ledger.lock().imported.push(label.clone());
        Ok(FakeKey { label })
    }

    fn verify(&self, key: &FakeKey, digest: &Digest, signature: &[u8]) -> Result<(), VerifyError> {
        self.ledger.lock().attempts.push(key.label.clone());
        if signature == Self::sign(&key.label, digest).as_slice() {
            Ok(())
        } else {
            Err(VerifyError::VerificationFailed)
        }
    }

    fn destroy_key(&self, key: FakeKey) {
        self.ledger.lock().destroyed.push(key.label);
    }
}

// =============================================================================
// RSA FIXTURE KEYS
// =============================================================================

/// A 2048-bit RSA key pair loaded from `testdata/`.
pub struct FixtureKey {
    private: RsaPrivateKey,
    blob: Vec<u8>,
}

impl FixtureKey {
    fn from_pem(pem: &str) -> Self {
        let private = RsaPrivateKey::from_pkcs8_pem(pem).expect("fixture key must parse");
        let blob = public_blob(&private.to_public_key());
        Self { private, blob }
    }

    /// Public key blob, importable by [`crate::RsaPssProvider`].
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Public half.
    pub fn public_key(&self) -> RsaPublicKey {
        self.private.to_public_key()
    }

    /// Key table record for this key.
    pub fn record<'a>(&'a self, name: &'a str, trust_class: TrustClass) -> KeyRecord<'a> {
        KeyRecord::new(name, trust_class, &self.blob)
    }

    /// PSS signature (SHA-512, 64-byte salt) over a precomputed digest.
    pub fn sign_digest(&self, digest: &Digest) -> Vec<u8> {
        self.private
            .sign_with_rng(
                &mut rand::thread_rng(),
                Pss::new_with_salt::<Sha512>(64),
                digest.as_bytes(),
            )
            .expect("PSS signing must succeed")
    }

    /// PSS signature over the SHA-512 digest of `data`.
    pub fn sign(&self, data: &[u8]) -> Vec<u8> {
        self.sign_digest(&sha512(data))
    }
}

/// SHA-512 digest of `data`.
pub fn sha512(data: &[u8]) -> Digest {
    let mut bytes = [0u8; 64];
    bytes.copy_from_slice(&Sha512::digest(data));
    Digest::sha512(bytes)
}

/// Encode an RSA public key as a public key blob.
pub fn public_blob(key: &RsaPublicKey) -> Vec<u8> {
    encode_public_blob(
        key.n().bits() as u32,
        &key.e().to_bytes_be(),
        &key.n().to_bytes_be(),
    )
}

macro_rules! fixture_key {
    ($(#[$doc:meta])* $name:ident => $file:literal) => {
        $(#[$doc])*
        pub fn $name() -> &'static FixtureKey {
            static KEY: OnceLock<FixtureKey> = OnceLock::new();
            KEY.get_or_init(|| FixtureKey::from_pem(include_str!($file)))
        }
    };
}

fixture_key!(
    /// Stand-in release signing key.
    production_key => "../testdata/production.pem"
);
fixture_key!(
    /// Stand-in developer signing key.
    development_key => "../testdata/development.pem"
);
fixture_key!(
    /// Stand-in test signing key.
    test_key => "../testdata/test.pem"
);
fixture_key!(
    /// A key that is in no key table.
    untrusted_key => "../testdata/untrusted.pem"
);

/// Key table shaped like the embedded one, built from fixture keys:
/// one production key followed by two test keys.
pub fn fixture_table() -> [KeyRecord<'static>; 3] {
    [
        production_key().record("release", TrustClass::Production),
        development_key().record("development", TrustClass::Test),
        test_key().record("test", TrustClass::Test),
    ]
}
