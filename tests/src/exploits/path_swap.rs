//! # Path Swap
//!
//! The caller opens a file, decides to trust it if verification passes, and
//! asks for verification by path. An attacker swaps the file under that path
//! in between, or points a genuine signature's name at foreign content.
//!
//! ## Defense
//!
//! - `verify_file` with the caller's file object rejects a different file
//!   object (`IdentityMismatch`)
//! - The digest is always taken over the file object, never re-opened by name

#[cfg(test)]
mod tests {
    use crate::started_service;
    use ks_signature_verification::test_helpers::production_key;
    use ks_signature_verification::{
        FileSystem, MemoryFile, OpenOutcome, OpenRequest, SignatureVerificationApi, TrustMode,
        VerifyError,
    };

    const DRIVER: &str = r"\Windows\System32\drivers\kph.sys";
    const DRIVER_SIG: &str = r"\Windows\System32\drivers\kph.sig";

    fn open(fs: &impl FileSystem<File = MemoryFile>, path: &str) -> MemoryFile {
        match fs.open(path, OpenRequest::TARGET).unwrap() {
            OpenOutcome::Opened(file) => file,
            OpenOutcome::OplockBreakInProgress(_) => panic!("unexpected oplock break"),
        }
    }

    /// Attack: swap the file after the caller opened it
    #[test]
    fn test_swap_between_open_and_verify() {
        let service = started_service(TrustMode::PRODUCTION);
        let fs = service.file_system();
        fs.insert(DRIVER, b"genuine".to_vec());
        fs.insert(DRIVER_SIG, production_key().sign(b"genuine"));

        let held = open(fs, DRIVER);
        // Same bytes, new file object
        fs.insert(DRIVER, b"genuine".to_vec());

        assert_eq!(
            service.verify_file(DRIVER, Some(&held)),
            Err(VerifyError::IdentityMismatch)
        );
    }

    /// Attack: claim a genuine name for a malicious file object
    #[test]
    fn test_borrowed_name_for_foreign_content() {
        let service = started_service(TrustMode::PRODUCTION);
        let fs = service.file_system();
        fs.insert(DRIVER, b"genuine".to_vec());
        fs.insert(DRIVER_SIG, production_key().sign(b"genuine"));
        fs.insert(r"\Users\Public\evil.sys", b"evil".to_vec());

        let mut evil = open(fs, r"\Users\Public\evil.sys");

        assert_eq!(
            service.verify_file_object(&mut evil, Some(DRIVER)),
            Err(VerifyError::VerificationFailed)
        );
    }

    /// Attack: a file object whose name cannot be resolved
    #[test]
    fn test_anonymous_file_object() {
        let service = started_service(TrustMode::PRODUCTION);
        let mut file = MemoryFile::anonymous(b"genuine".to_vec());

        assert!(matches!(
            service.verify_file_object(&mut file, None),
            Err(VerifyError::NameInvalid { .. })
        ));
    }

    /// Attack: relative names that would resolve against an attacker's directory
    #[test]
    fn test_relative_names_rejected() {
        let service = started_service(TrustMode::PRODUCTION);
        let fs = service.file_system();
        fs.insert(r"drivers\kph.sys", b"genuine".to_vec());
        fs.insert(r"drivers\kph.sig", production_key().sign(b"genuine"));

        assert!(matches!(
            service.verify_file(r"drivers\kph.sys", None),
            Err(VerifyError::NameInvalid { .. })
        ));
        assert!(fs.opened().is_empty());
    }
}
