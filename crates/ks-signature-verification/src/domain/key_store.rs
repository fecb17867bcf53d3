//! # Key Store
//!
//! Owns the verification key handles derived from a key table.
//!
//! Handles are built once by [`KeyStore::initialize`] and released by
//! [`KeyStore::teardown`] (or on drop). In between the store is read-only and
//! may be shared across threads; `teardown` takes `&mut self`, so it cannot
//! run while a verification borrows the store.

use super::entities::{KeyRecord, TrustClass, TrustMode};
use super::errors::VerifyError;
use crate::ports::outbound::CryptoProvider;
use sha2::{Digest as _, Sha256};
use tracing::{debug, info, trace};

/// Lifecycle state of a [`KeyStore`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyStoreState {
    /// `initialize` has not run
    #[default]
    Uninitialized,
    /// Every eligible key was imported; handles are usable
    Active,
    /// A key failed to import; handles built so far await teardown
    Failed,
    /// Handles were released
    TornDown,
}

/// A verification key handle owned by the store.
pub struct ActiveKey<K> {
    name: String,
    trust_class: TrustClass,
    fingerprint: String,
    key: K,
}

impl<K> ActiveKey<K> {
    /// Diagnostic name from the key table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trust class of the record this key came from.
    pub fn trust_class(&self) -> TrustClass {
        self.trust_class
    }

    /// Hex SHA-256 of the key material.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// The imported key.
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K> std::fmt::Debug for ActiveKey<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveKey")
            .field("name", &self.name)
            .field("trust_class", &self.trust_class)
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}

/// Hex SHA-256 fingerprint of key material.
pub fn key_fingerprint(material: &[u8]) -> String {
    hex::encode(Sha256::digest(material))
}

/// Trust store of active verification keys.
pub struct KeyStore<C: CryptoProvider> {
    crypto: C,
    handles: Vec<ActiveKey<C::Key>>,
    state: KeyStoreState,
}

impl<C: CryptoProvider> KeyStore<C> {
    /// Create an empty, uninitialized store.
    pub fn new(crypto: C) -> Self {
        Self {
            crypto,
            handles: Vec::new(),
            state: KeyStoreState::Uninitialized,
        }
    }

    /// The cryptographic primitive backing this store.
    pub fn crypto(&self) -> &C {
        &self.crypto
    }

    /// Current lifecycle state.
    pub fn state(&self) -> KeyStoreState {
        self.state
    }

    /// Import every record of `records` eligible under `mode`, in table order.
    ///
    /// Test-class records are skipped entirely unless `mode` allows test keys.
    /// On the first import failure the store is marked
    /// [`KeyStoreState::Failed`] and exposes no handles; the handles already
    /// built stay owned by the store until [`KeyStore::teardown`].
    pub fn initialize(
        &mut self,
        records: &[KeyRecord<'_>],
        mode: TrustMode,
    ) -> Result<(), VerifyError> {
        if self.state == KeyStoreState::Active || !self.handles.is_empty() {
            debug!(state = ?self.state, "Key store already initialized");
            return Err(VerifyError::AlreadyInitialized);
        }

        self.handles
            .try_reserve_exact(records.len())
            .map_err(|_| VerifyError::InsufficientResources {
                requested: records.len() * std::mem::size_of::<ActiveKey<C::Key>>(),
            })?;

        for record in records {
            if !mode.admits(record.trust_class) {
                trace!(key = record.name, "Skipping test key outside test signing");
                continue;
            }

            let key = match self.crypto.import_public_key(record.material) {
                Ok(key) => key,
                Err(e) => {
                    debug!(key = record.name, error = %e, "Failed to import verification key");
                    self.state = KeyStoreState::Failed;
                    return Err(e.into());
                }
            };

            self.handles.push(ActiveKey {
                name: record.name.to_string(),
                trust_class: record.trust_class,
                fingerprint: key_fingerprint(record.material),
                key,
            });
        }

        self.state = KeyStoreState::Active;
        info!(
            active_keys = self.handles.len(),
            test_signing = mode.allows_test_keys(),
            "Verification keys initialized"
        );
        Ok(())
    }

    /// Release every key handle. Safe to call repeatedly or before
    /// initialization.
    pub fn teardown(&mut self) {
        if self.state == KeyStoreState::Uninitialized && self.handles.is_empty() {
            return;
        }

        let released = self.handles.len();
        for handle in self.handles.drain(..) {
            self.crypto.destroy_key(handle.key);
        }

        if self.state != KeyStoreState::TornDown {
            info!(released, "Verification keys released");
        }
        self.state = KeyStoreState::TornDown;
    }

    /// Handles eligible for verification, in table order.
    ///
    /// Empty unless the store is [`KeyStoreState::Active`].
    pub fn active_handles(&self) -> &[ActiveKey<C::Key>] {
        match self.state {
            KeyStoreState::Active => &self.handles,
            _ => &[],
        }
    }
}

impl<C: CryptoProvider> Drop for KeyStore<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<C: CryptoProvider> std::fmt::Debug for KeyStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStore")
            .field("state", &self.state)
            .field("handles", &self.handles)
            .finish_non_exhaustive()
    }
}
