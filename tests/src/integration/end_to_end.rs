//! # End-to-End Verification Scenarios
//!
//! Buffer, digest and file verification through `SignatureVerificationApi`
//! with the fixture key table and an in-memory file system.
//!
//! ## Flows Tested:
//!
//! 1. **Digest**: a production signature over a digest verifies
//! 2. **File**: `\x\y\app.sys` verifies against `\x\y\app.sig`
//! 3. **Missing signature**: reported as not found, not as a bad signature
//! 4. **Identity**: a mismatched expected file object fails before verification
//! 5. **Trust mode**: test keys vouch only under test signing

#[cfg(test)]
mod tests {
    use crate::started_service;
    use ks_signature_verification::test_helpers::{
        development_key, production_key, sha512, test_key, untrusted_key,
    };
    use ks_signature_verification::{
        FileSystem, OpenOutcome, OpenRequest, SignatureVerificationApi, TrustMode, VerifyError,
    };

    const APP: &str = r"\x\y\app.sys";
    const APP_SIG: &str = r"\x\y\app.sig";
    const IMAGE: &[u8] = b"\x4d\x5a\x90\x00 pretend this is a driver image";

    // =============================================================================
    // SCENARIO 1: DIGEST VERIFICATION
    // =============================================================================

    /// Test: A production signature over a buffer's digest verifies
    #[test]
    fn test_production_signature_over_digest() {
        let service = started_service(TrustMode::PRODUCTION);
        let digest = sha512(b"buffer B");
        let signature = production_key().sign_digest(&digest);

        assert_eq!(service.verify_digest(&digest, &signature), Ok(()));
        assert_eq!(service.verify_buffer(b"buffer B", &signature), Ok(()));
    }

    /// Test: Signatures from keys outside the table never verify
    #[test]
    fn test_untrusted_signature_rejected() {
        let service = started_service(TrustMode::TEST_SIGNING);
        let signature = untrusted_key().sign(b"buffer B");

        assert_eq!(
            service.verify_buffer(b"buffer B", &signature),
            Err(VerifyError::VerificationFailed)
        );
    }

    // =============================================================================
    // SCENARIO 2-4: FILE VERIFICATION
    // =============================================================================

    /// Test: A file verifies against its sibling signature
    #[test]
    fn test_file_with_valid_sibling_signature() {
        let service = started_service(TrustMode::PRODUCTION);
        service.file_system().insert(APP, IMAGE);
        service
            .file_system()
            .insert(APP_SIG, production_key().sign(IMAGE));

        assert_eq!(service.verify_file(APP, None), Ok(()));
    }

    /// Test: A missing signature is a not-found failure
    #[test]
    fn test_missing_signature_is_not_found() {
        let service = started_service(TrustMode::PRODUCTION);
        service.file_system().insert(APP, IMAGE);

        assert_eq!(
            service.verify_file(APP, None),
            Err(VerifyError::NotFound {
                path: APP_SIG.into()
            })
        );
    }

    /// Test: A different expected file object fails before verification
    #[test]
    fn test_identity_mismatch() {
        let service = started_service(TrustMode::PRODUCTION);
        let fs = service.file_system();
        fs.insert(APP, IMAGE);
        fs.insert(APP_SIG, production_key().sign(IMAGE));
        fs.insert(r"\x\y\other.sys", IMAGE);

        let OpenOutcome::Opened(other) = fs.open(r"\x\y\other.sys", OpenRequest::TARGET).unwrap()
        else {
            panic!("unexpected oplock break");
        };

        assert_eq!(
            service.verify_file(APP, Some(&other)),
            Err(VerifyError::IdentityMismatch)
        );
        assert!(fs.opened().iter().all(|(path, _)| path != APP_SIG));
    }

    /// Test: An open file object verifies with its resolved name
    #[test]
    fn test_file_object_verification() {
        let service = started_service(TrustMode::PRODUCTION);
        let fs = service.file_system();
        fs.insert(APP, IMAGE);
        fs.insert(APP_SIG, production_key().sign(IMAGE));

        let OpenOutcome::Opened(mut file) = fs.open(APP, OpenRequest::TARGET).unwrap() else {
            panic!("unexpected oplock break");
        };

        assert_eq!(service.verify_file_object(&mut file, None), Ok(()));
    }

    /// Test: A corrupted image no longer matches its signature
    #[test]
    fn test_modified_file_fails() {
        let service = started_service(TrustMode::PRODUCTION);
        service.file_system().insert(APP, b"patched image".to_vec());
        service
            .file_system()
            .insert(APP_SIG, production_key().sign(IMAGE));

        assert_eq!(
            service.verify_file(APP, None),
            Err(VerifyError::VerificationFailed)
        );
    }

    // =============================================================================
    // SCENARIO 5: TRUST MODE GATING
    // =============================================================================

    /// Test: Test-key signatures fail in production mode even though the key ships
    #[test]
    fn test_test_keys_gated_by_trust_mode() {
        let production = started_service(TrustMode::PRODUCTION);
        let test_signing = started_service(TrustMode::TEST_SIGNING);

        for key in [development_key(), test_key()] {
            let signature = key.sign(b"dev build");
            assert_eq!(
                production.verify_buffer(b"dev build", &signature),
                Err(VerifyError::VerificationFailed)
            );
            assert_eq!(test_signing.verify_buffer(b"dev build", &signature), Ok(()));
        }
    }

    /// Test: Production signatures verify under both trust modes
    #[test]
    fn test_production_key_always_trusted() {
        let signature = production_key().sign(b"release build");

        for mode in [TrustMode::PRODUCTION, TrustMode::TEST_SIGNING] {
            let service = started_service(mode);
            assert_eq!(service.verify_buffer(b"release build", &signature), Ok(()));
        }
    }

    /// Test: Active keys follow table order with test keys filtered out
    #[test]
    fn test_active_key_order() {
        let names = |mode| {
            started_service(mode)
                .key_store()
                .active_handles()
                .iter()
                .map(|h| h.name().to_string())
                .collect::<Vec<_>>()
        };

        assert_eq!(names(TrustMode::PRODUCTION), vec!["release"]);
        assert_eq!(
            names(TrustMode::TEST_SIGNING),
            vec!["release", "development", "test"]
        );
    }

    // =============================================================================
    // CALLER-OWNED KEYS
    // =============================================================================

    /// Test: A caller key verifies content the trust store does not vouch for
    #[test]
    fn test_caller_key_outside_store() {
        let service = started_service(TrustMode::PRODUCTION);
        let key = service.create_key(untrusted_key().blob()).unwrap();
        let signature = untrusted_key().sign(b"partner payload");

        assert_eq!(
            service.verify_buffer_with_key(&key, b"partner payload", &signature),
            Ok(())
        );
        assert!(service.verify_buffer(b"partner payload", &signature).is_err());

        service.close_key(key);
    }
}
