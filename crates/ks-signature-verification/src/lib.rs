//! # Signature Verification Subsystem
//!
//! Decides whether a buffer or an on-disk file is authentic by checking a
//! detached RSA-PSS/SHA-512 signature against a small, fixed set of embedded
//! public keys.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Key blob codec, embedded trust anchors, key
//!   store, signature engine and signature-path rules. No I/O.
//! - **Ports Layer** (`ports/`): The inbound verification API and the outbound
//!   collaborator contracts (hashing, cryptography, file system)
//! - **Adapters Layer** (`adapters/`): Concrete collaborators
//! - **Resolver** (`resolver.rs`): Locates and checks a file's detached `.sig`
//! - **Service Layer** (`service.rs`): Lifecycle and the inbound API
//!
//! ## Security Notes
//!
//! - **Trust-mode gating**: Test-class keys are never activated unless test
//!   signing is enabled at startup, even though they ship in the binary
//! - **Any trusted key vouches**: Keys are tried in table order and the first
//!   one that validates wins
//! - **No retries**: Every failure is reported to the caller as-is

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod resolver;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_helpers;

// Re-export public API
pub use adapters::memory_fs::{InMemoryFileSystem, LockCondition, MemoryFile};
pub use adapters::rsa_pss::{RsaPssKey, RsaPssProvider};
pub use adapters::sha512::Sha512HashProvider;
pub use adapters::std_fs::{StdFile, StdFileSystem};
pub use config::{ConfigError, VerifierConfig};
pub use domain::embedded_keys::EMBEDDED_KEYS;
pub use domain::engine::SignatureEngine;
pub use domain::entities::{
    Digest, HashAlgorithm, KeyRecord, TrustClass, TrustMode, MAX_SIGNATURE_LENGTH,
    SIGNATURE_EXTENSION,
};
pub use domain::errors::VerifyError;
pub use domain::key_blob::{encode_public_blob, parse_public_blob, KeyBlobError, PublicKeyBlob};
pub use domain::key_store::{ActiveKey, KeyStore, KeyStoreState};
pub use domain::sig_path::{derive_sig_path, validate_file_name};
pub use ports::inbound::SignatureVerificationApi;
pub use ports::outbound::{
    CryptoProvider, FileSystem, HashError, HashProvider, IoError, KeyImportError, OpenFlags,
    OpenOutcome, OpenRequest, ShareAccess,
};
pub use resolver::FileSignatureResolver;
pub use service::{HostVerificationService, SignatureVerificationService};
