//! # Signature File Tampering
//!
//! The attacker controls the directory holding the `.sig` file.
//!
//! ## Defense
//!
//! - At most the configured bound is read, in one call
//! - Locks and pending oplock breaks fail the open instead of waiting
//! - Directories and reparse points are not opened as signatures

#[cfg(test)]
mod tests {
    use crate::started_service;
    use ks_signature_verification::test_helpers::production_key;
    use ks_signature_verification::{
        IoError, LockCondition, SignatureVerificationApi, TrustMode, VerifyError,
        MAX_SIGNATURE_LENGTH,
    };

    const TARGET: &str = r"\Program Files\App\update.bin";
    const SIG: &str = r"\Program Files\App\update.sig";

    fn seeded() -> crate::MemoryService {
        let service = started_service(TrustMode::PRODUCTION);
        service.file_system().insert(TARGET, b"update".to_vec());
        service
            .file_system()
            .insert(SIG, production_key().sign(b"update"));
        service
    }

    /// Attack: pad a valid signature past the read bound
    #[test]
    fn test_padded_signature_rejected() {
        let service = seeded();
        let mut padded = production_key().sign(b"update");
        padded.resize(MAX_SIGNATURE_LENGTH * 4, 0x41);
        service.file_system().insert(SIG, padded);

        assert_eq!(
            service.verify_file(TARGET, None),
            Err(VerifyError::VerificationFailed)
        );
    }

    /// Attack: truncate the signature
    #[test]
    fn test_truncated_signature_rejected() {
        let service = seeded();
        let mut short = production_key().sign(b"update");
        short.truncate(100);
        service.file_system().insert(SIG, short);

        assert_eq!(
            service.verify_file(TARGET, None),
            Err(VerifyError::VerificationFailed)
        );
    }

    /// Attack: hold the signature locked to stall the verifier
    #[test]
    fn test_locked_signature_fails_fast() {
        let service = seeded();

        for lock in [LockCondition::SharingViolation, LockCondition::OplockBreak] {
            service.file_system().set_lock(SIG, lock);
            assert_eq!(
                service.verify_file(TARGET, None),
                Err(VerifyError::SharingViolation { path: SIG.into() })
            );
        }
    }

    /// Attack: replace the signature with a directory or a link
    #[test]
    fn test_redirected_signature_refused() {
        let service = seeded();

        service.file_system().add_link(SIG);
        assert!(matches!(
            service.verify_file(TARGET, None),
            Err(VerifyError::Io(IoError::ReparsePoint { .. }))
        ));

        service.file_system().add_directory(SIG);
        assert!(matches!(
            service.verify_file(TARGET, None),
            Err(VerifyError::Io(IoError::NotAFile { .. }))
        ));
    }
}
