//! # Signature Verification Service
//!
//! Application service layer that implements the `SignatureVerificationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Owns the key store and drives its lifecycle (`startup` / `shutdown`)
//! - Implements the inbound port (`SignatureVerificationApi`)
//! - Delegates to the signature engine and the file signature resolver
//!
//! The service is an explicit context object: whoever composes it into a
//! larger process owns it, and there is no global state.

use crate::adapters::rsa_pss::RsaPssProvider;
use crate::adapters::sha512::Sha512HashProvider;
use crate::adapters::std_fs::StdFileSystem;
use crate::config::{ConfigError, VerifierConfig};
use crate::domain::embedded_keys::EMBEDDED_KEYS;
use crate::domain::engine::SignatureEngine;
use crate::domain::entities::{Digest, KeyRecord};
use crate::domain::errors::VerifyError;
use crate::domain::key_store::KeyStore;
use crate::ports::inbound::SignatureVerificationApi;
use crate::ports::outbound::{CryptoProvider, FileSystem, HashProvider};
use crate::resolver::FileSignatureResolver;
use tracing::{debug, info};

/// Service over the host file system with the RSA-PSS primitive.
pub type HostVerificationService =
    SignatureVerificationService<RsaPssProvider, Sha512HashProvider, StdFileSystem>;

/// Signature Verification Service.
///
/// Verification calls take `&self` and may run concurrently once
/// [`startup`](Self::startup) has returned. `startup` and
/// [`shutdown`](Self::shutdown) take `&mut self`, so they cannot overlap
/// with a verification in flight.
pub struct SignatureVerificationService<C, H, F>
where
    C: CryptoProvider,
    H: HashProvider,
    F: FileSystem,
{
    config: VerifierConfig,
    store: KeyStore<C>,
    hasher: H,
    fs: F,
}

impl HostVerificationService {
    /// Create a service over the host file system.
    pub fn host(config: VerifierConfig) -> Result<Self, ConfigError> {
        Self::new(
            config,
            RsaPssProvider::new(),
            Sha512HashProvider::new(),
            StdFileSystem::new(),
        )
    }
}

impl<C, H, F> SignatureVerificationService<C, H, F>
where
    C: CryptoProvider,
    H: HashProvider,
    F: FileSystem,
{
    /// Create a service. No key is active until [`startup`](Self::startup).
    pub fn new(config: VerifierConfig, crypto: C, hasher: H, fs: F) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            store: KeyStore::new(crypto),
            hasher,
            fs,
        })
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn key_store(&self) -> &KeyStore<C> {
        &self.store
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Activate the embedded trust anchors eligible under the configured
    /// trust mode.
    pub fn startup(&mut self) -> Result<(), VerifyError> {
        self.startup_with_keys(&EMBEDDED_KEYS)
    }

    /// Activate the keys of an explicit table eligible under the configured
    /// trust mode.
    ///
    /// The trust mode comes from [`VerifierConfig::test_signing`] and is fixed
    /// for the life of the service. On failure no key is active; call
    /// [`shutdown`](Self::shutdown) to release the keys imported before the
    /// failure.
    pub fn startup_with_keys(&mut self, records: &[KeyRecord<'_>]) -> Result<(), VerifyError> {
        let mode = self.config.trust_mode();
        info!(
            records = records.len(),
            test_signing = mode.allows_test_keys(),
            "Starting signature verification"
        );
        self.store.initialize(records, mode)
    }

    /// Release every key handle. Safe to call at any point, repeatedly.
    pub fn shutdown(&mut self) {
        self.store.teardown();
    }

    // =========================================================================
    // Caller-owned Keys
    // =========================================================================

    /// Import a verification key outside the trust store.
    pub fn create_key(&self, material: &[u8]) -> Result<C::Key, VerifyError> {
        self.store.crypto().import_public_key(material).map_err(|e| {
            debug!(error = %e, "Failed to import caller key");
            VerifyError::from(e)
        })
    }

    /// Release a key obtained from [`create_key`](Self::create_key).
    pub fn close_key(&self, key: C::Key) {
        self.store.crypto().destroy_key(key);
    }

    /// File signature resolver bound to this service's collaborators.
    pub fn resolver(&self) -> FileSignatureResolver<'_, C, H, F> {
        FileSignatureResolver::new(
            &self.store,
            &self.hasher,
            &self.fs,
            self.config.max_signature_length,
        )
    }

    fn hash_buffer(&self, data: &[u8]) -> Result<Digest, VerifyError> {
        self.hasher.hash_buffer(data).map_err(|e| {
            debug!(error = %e, "Failed to hash buffer");
            VerifyError::from(e)
        })
    }
}

impl<C, H, F> SignatureVerificationApi for SignatureVerificationService<C, H, F>
where
    C: CryptoProvider,
    H: HashProvider,
    F: FileSystem,
{
    type Key = C::Key;
    type File = F::File;

    fn verify_digest(&self, digest: &Digest, signature: &[u8]) -> Result<(), VerifyError> {
        SignatureEngine::new(&self.store).verify_with_store(digest, signature)
    }

    fn verify_digest_with_key(
        &self,
        key: &C::Key,
        digest: &Digest,
        signature: &[u8],
    ) -> Result<(), VerifyError> {
        SignatureEngine::new(&self.store).verify_with_key(key, digest, signature)
    }

    fn verify_buffer(&self, data: &[u8], signature: &[u8]) -> Result<(), VerifyError> {
        let digest = self.hash_buffer(data)?;
        self.verify_digest(&digest, signature)
    }

    fn verify_buffer_with_key(
        &self,
        key: &C::Key,
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), VerifyError> {
        let digest = self.hash_buffer(data)?;
        self.verify_digest_with_key(key, &digest, signature)
    }

    fn verify_file_object(
        &self,
        file: &mut F::File,
        name: Option<&str>,
    ) -> Result<(), VerifyError> {
        self.resolver().verify_file_object(file, name)
    }

    fn verify_file(&self, path: &str, expected: Option<&F::File>) -> Result<(), VerifyError> {
        self.resolver().verify_file(path, expected)
    }
}

// =============================================================================
// TESTS
// =============================================================================
