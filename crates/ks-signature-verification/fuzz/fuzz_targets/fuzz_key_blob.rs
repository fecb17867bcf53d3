//! Fuzz target for the public key blob decoder.
//!
//! ## Running
//!
//! ```bash
//! cd crates/ks-signature-verification
//! cargo +nightly fuzz run fuzz_key_blob
//! ```

#![no_main]

use ks_signature_verification::{
    encode_public_blob, parse_public_blob, CryptoProvider, RsaPssProvider,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding must never panic, whatever the header claims
    let Ok(blob) = parse_public_blob(data) else {
        return;
    };

    // An accepted blob is exactly what its header describes
    let encoded = encode_public_blob(blob.bit_length, blob.exponent, blob.modulus);
    assert_eq!(encoded.as_slice(), data);

    // Import may reject the numbers, but must not panic
    let crypto = RsaPssProvider::new();
    if let Ok(key) = crypto.import_public_key(data) {
        crypto.destroy_key(key);
    }
});
