//! # Public Key Blob Codec
//!
//! Embedded key material uses the self-describing RSA public blob layout:
//!
//! ```text
//! offset  size  field
//! 0       4     magic            "RSA1" (0x31415352, little-endian)
//! 4       4     bit_length       modulus size in bits
//! 8       4     public_exp_len   exponent length in bytes
//! 12      4     modulus_len      modulus length in bytes
//! 16      4     prime1_len       must be 0 for a public blob
//! 20      4     prime2_len       must be 0 for a public blob
//! 24      ..    exponent         big-endian
//! ..      ..    modulus          big-endian
//! ```

use thiserror::Error;

/// Magic tag of a public RSA blob ("RSA1").
pub const RSA_PUBLIC_MAGIC: u32 = 0x3141_5352;

/// Size of the fixed blob header.
pub const BLOB_HEADER_LEN: usize = 6 * 4;

/// Modulus size of the embedded trust anchors.
pub const EMBEDDED_MODULUS_BITS: usize = 4096;

/// Exponent size of the embedded trust anchors (65537).
pub const EMBEDDED_EXPONENT_LEN: usize = 3;

/// Size of every embedded key record's material.
pub const KEY_MATERIAL_SIZE: usize = 0x21B;

const _: () = assert!(
    KEY_MATERIAL_SIZE == BLOB_HEADER_LEN + EMBEDDED_EXPONENT_LEN + EMBEDDED_MODULUS_BITS / 8
);

/// Errors decoding a public key blob.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyBlobError {
    /// Fewer bytes than the fixed header
    #[error("Key blob truncated: {len} bytes")]
    Truncated { len: usize },

    /// Header magic is not "RSA1"
    #[error("Key blob magic {0:#010x} is not a public RSA blob")]
    BadMagic(u32),

    /// Prime lengths are set, so this is a private blob
    #[error("Key blob carries private key material")]
    PrivateMaterial,

    /// Exponent or modulus has zero length
    #[error("Key blob has an empty {0}")]
    EmptyComponent(&'static str),

    /// Header lengths disagree with the blob size
    #[error("Key blob length mismatch: header describes {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Declared bit length does not fit the modulus length
    #[error("Key blob bit length {bits} does not match a {modulus_len}-byte modulus")]
    BitLengthMismatch { bits: u32, modulus_len: usize },
}

/// A decoded public key blob borrowing from the original bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKeyBlob<'a> {
    /// Modulus size in bits
    pub bit_length: u32,
    /// Public exponent, big-endian
    pub exponent: &'a [u8],
    /// Modulus, big-endian
    pub modulus: &'a [u8],
}

/// Decode a public key blob.
pub fn parse_public_blob(bytes: &[u8]) -> Result<PublicKeyBlob<'_>, KeyBlobError> {
    if bytes.len() < BLOB_HEADER_LEN {
        return Err(KeyBlobError::Truncated { len: bytes.len() });
    }

    let (header, body) = bytes.split_at(BLOB_HEADER_LEN);
    let mut words = [0u32; BLOB_HEADER_LEN / 4];
    for (word, chunk) in words.iter_mut().zip(header.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    let [magic, bit_length, exponent_len, modulus_len, prime1_len, prime2_len] = words;

    if magic != RSA_PUBLIC_MAGIC {
        return Err(KeyBlobError::BadMagic(magic));
    }
    if prime1_len != 0 || prime2_len != 0 {
        return Err(KeyBlobError::PrivateMaterial);
    }
    if exponent_len == 0 {
        return Err(KeyBlobError::EmptyComponent("exponent"));
    }
    if modulus_len == 0 {
        return Err(KeyBlobError::EmptyComponent("modulus"));
    }

    let exponent_len = exponent_len as usize;
    let modulus_len = modulus_len as usize;
    let expected = exponent_len
        .checked_add(modulus_len)
        .and_then(|n| n.checked_add(BLOB_HEADER_LEN))
        .unwrap_or(usize::MAX);
    if expected != bytes.len() {
        return Err(KeyBlobError::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }

    if (bit_length as usize).div_ceil(8) != modulus_len {
        return Err(KeyBlobError::BitLengthMismatch {
            bits: bit_length,
            modulus_len,
        });
    }

    let (exponent, modulus) = body.split_at(exponent_len);
    Ok(PublicKeyBlob {
        bit_length,
        exponent,
        modulus,
    })
}

/// Encode a public key blob from big-endian exponent and modulus bytes.
pub fn encode_public_blob(bit_length: u32, exponent: &[u8], modulus: &[u8]) -> Vec<u8> {
    let mut blob = Vec::with_capacity(BLOB_HEADER_LEN + exponent.len() + modulus.len());
    for word in [
        RSA_PUBLIC_MAGIC,
        bit_length,
        exponent.len() as u32,
        modulus.len() as u32,
        0,
        0,
    ] {
        blob.extend_from_slice(&word.to_le_bytes());
    }
    blob.extend_from_slice(exponent);
    blob.extend_from_slice(modulus);
    blob
}
