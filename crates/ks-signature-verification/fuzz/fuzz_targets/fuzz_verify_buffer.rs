//! Fuzz target for buffer verification against the embedded trust anchors.
//!
//! No fuzzer-chosen signature may ever verify, and no input may panic.

#![no_main]

use ks_signature_verification::{HostVerificationService, SignatureVerificationApi, VerifierConfig};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    data: Vec<u8>,
    signature: Vec<u8>,
}

fn service() -> &'static HostVerificationService {
    static SERVICE: OnceLock<HostVerificationService> = OnceLock::new();
    SERVICE.get_or_init(|| {
        let config = VerifierConfig::default().with_test_signing(true);
        let mut service = HostVerificationService::host(config).expect("default config is valid");
        service.startup().expect("embedded keys import");
        service
    })
}

fuzz_target!(|input: FuzzInput| {
    assert!(service()
        .verify_buffer(&input.data, &input.signature)
        .is_err());
});
