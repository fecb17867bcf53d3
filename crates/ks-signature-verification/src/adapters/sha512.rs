//! SHA-512 hash provider.

use crate::domain::entities::{Digest, HashAlgorithm, SHA512_DIGEST_LEN};
use crate::ports::outbound::{HashError, HashProvider};
use sha2::{Digest as _, Sha512};
use std::io::{ErrorKind, Read, Seek, SeekFrom};

const READ_CHUNK: usize = 64 * 1024;

/// Streams content through SHA-512.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512HashProvider;

impl Sha512HashProvider {
    pub fn new() -> Self {
        Self
    }

    fn finish(hasher: Sha512) -> Digest {
        let mut bytes = [0u8; SHA512_DIGEST_LEN];
        bytes.copy_from_slice(&hasher.finalize());
        Digest::sha512(bytes)
    }
}

impl HashProvider for Sha512HashProvider {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha512
    }

    fn hash_buffer(&self, data: &[u8]) -> Result<Digest, HashError> {
        let mut hasher = Sha512::new();
        hasher.update(data);
        Ok(Self::finish(hasher))
    }

    fn hash_file<R: Read + Seek + ?Sized>(&self, file: &mut R) -> Result<Digest, HashError> {
        file.seek(SeekFrom::Start(0))
            .map_err(|e| HashError::Io(e.to_string()))?;

        let mut hasher = Sha512::new();
        let mut chunk = vec![0u8; READ_CHUNK];
        loop {
            match file.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => hasher.update(&chunk[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(HashError::Io(e.to_string())),
            }
        }

        Ok(Self::finish(hasher))
    }
}
