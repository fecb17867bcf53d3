//! Fuzz target for signature path derivation.

#![no_main]

use ks_signature_verification::{derive_sig_path, validate_file_name, SIGNATURE_EXTENSION};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    name: String,
    unix: bool,
}

fuzz_target!(|input: FuzzInput| {
    let separator = if input.unix { '/' } else { '\\' };

    match derive_sig_path(&input.name, separator) {
        Ok(sig_path) => {
            assert!(validate_file_name(&input.name, separator).is_ok());
            assert!(sig_path.ends_with(SIGNATURE_EXTENSION));
            assert!(sig_path.starts_with(separator));
            assert_eq!(sig_path.chars().count(), input.name.chars().count());
        }
        Err(_) => assert!(validate_file_name(&input.name, separator).is_err()),
    }
});
