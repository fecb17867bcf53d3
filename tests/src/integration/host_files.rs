//! # Host File System Verification
//!
//! The same flows against real files through `StdFileSystem`. Unix only:
//! valid names must start with the separator.

#[cfg(all(test, unix))]
mod tests {
    use crate::init_test_telemetry;
    use ks_signature_verification::test_helpers::{fixture_table, production_key};
    use ks_signature_verification::{
        FileSystem, HostVerificationService, IoError, OpenOutcome, OpenRequest,
        SignatureVerificationApi, VerifierConfig, VerifyError,
    };
    use std::path::Path;
    use tempfile::TempDir;

    fn host_service() -> HostVerificationService {
        init_test_telemetry();
        let mut service = HostVerificationService::host(VerifierConfig::default()).unwrap();
        service.startup_with_keys(&fixture_table()).unwrap();
        service
    }

    fn path_str(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }

    /// Create `plugin.so` and its signature in a fresh directory.
    fn signed_plugin(content: &[u8]) -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("plugin.so"), content).unwrap();
        // Four characters are cut: "plugin.so" -> "plugi" + ".sig"
        std::fs::write(dir.path().join("plugi.sig"), production_key().sign(content)).unwrap();
        let target = path_str(&dir.path().join("plugin.so"));
        (dir, target)
    }

    /// Test: A signed file on disk verifies
    #[test]
    fn test_verify_file_on_disk() {
        let service = host_service();
        let (_dir, target) = signed_plugin(b"shared object");

        assert_eq!(service.verify_file(&target, None), Ok(()));
    }

    /// Test: A three-letter extension maps to the conventional sibling name
    #[test]
    fn test_conventional_sibling_name() {
        let service = host_service();
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("codec.bin"), b"codec").unwrap();
        std::fs::write(dir.path().join("codec.sig"), production_key().sign(b"codec")).unwrap();

        assert_eq!(
            service.verify_file(&path_str(&dir.path().join("codec.bin")), None),
            Ok(())
        );
    }

    /// Test: Relative paths are rejected before touching the disk
    #[test]
    fn test_relative_path_rejected() {
        let service = host_service();

        assert!(matches!(
            service.verify_file("relative/plugin.so", None),
            Err(VerifyError::NameInvalid { .. })
        ));
    }

    /// Test: A symbolic link in place of the signature is not followed
    #[test]
    fn test_symlinked_signature_refused() {
        let service = host_service();
        let (dir, target) = signed_plugin(b"shared object");
        let real = dir.path().join("elsewhere.sig");
        std::fs::rename(dir.path().join("plugi.sig"), &real).unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("plugi.sig")).unwrap();

        assert!(matches!(
            service.verify_file(&target, None),
            Err(VerifyError::Io(IoError::ReparsePoint { .. }))
        ));
    }

    /// Test: The opened file must be the file the caller holds
    #[test]
    fn test_replaced_file_detected() {
        let service = host_service();
        let (dir, target) = signed_plugin(b"shared object");

        let OpenOutcome::Opened(held) = service
            .file_system()
            .open(&target, OpenRequest::TARGET)
            .unwrap()
        else {
            panic!("std never reports oplock breaks");
        };

        // Swap a new inode in under the same name
        let staged = dir.path().join("staged.so");
        std::fs::write(&staged, b"shared object").unwrap();
        std::fs::rename(&staged, &target).unwrap();

        assert_eq!(
            service.verify_file(&target, Some(&held)),
            Err(VerifyError::IdentityMismatch)
        );
    }
}
