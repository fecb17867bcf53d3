//! # Keystone Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmark bodies
//! ├── exploits/         # Attack simulations against the trust model
//! └── integration/      # End-to-end verification scenarios
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ks-tests
//!
//! # By category
//! cargo test -p ks-tests integration::
//! cargo test -p ks-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p ks-tests
//! ```

pub mod benchmarks;
pub mod integration;

use ks_signature_verification::test_helpers::fixture_table;
use ks_signature_verification::{
    InMemoryFileSystem, RsaPssProvider, Sha512HashProvider, SignatureVerificationService,
    TrustMode, VerifierConfig,
};
use ks_telemetry::{init_telemetry, TelemetryConfig, TelemetryGuard};
use std::sync::OnceLock;

/// Verification service over an in-memory file system with the real RSA-PSS
/// primitive.
pub type MemoryService =
    SignatureVerificationService<RsaPssProvider, Sha512HashProvider, InMemoryFileSystem>;

/// Install the test subscriber once per process.
///
/// Verbosity follows `KS_LOG_LEVEL` / `RUST_LOG`; the default keeps the
/// verification core at `debug` so failing steps show up in test output.
pub fn init_test_telemetry() {
    static TELEMETRY: OnceLock<Option<TelemetryGuard>> = OnceLock::new();
    TELEMETRY.get_or_init(|| {
        let mut config = TelemetryConfig::for_service("ks-tests");
        if std::env::var_os("KS_LOG_LEVEL").is_none() && std::env::var_os("RUST_LOG").is_none() {
            config.log_level = "warn,ks_signature_verification=debug".to_string();
        }
        init_telemetry(config).ok()
    });
}

/// A service started with the fixture key table under `mode`.
pub fn started_service(mode: TrustMode) -> MemoryService {
    init_test_telemetry();
    let _span = ks_telemetry::verify_span!("started_service", test_signing = mode.allows_test_keys())
        .entered();

    let config = VerifierConfig::default().with_test_signing(mode.allows_test_keys());
    let mut service = SignatureVerificationService::new(
        config,
        RsaPssProvider::new(),
        Sha512HashProvider::new(),
        InMemoryFileSystem::new(),
    )
    .expect("default config is valid");
    service
        .startup_with_keys(&fixture_table())
        .expect("fixture keys import");
    service
}
