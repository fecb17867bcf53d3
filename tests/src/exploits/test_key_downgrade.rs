//! # Test Key Downgrade
//!
//! Development and test keys ship in every binary. An attacker holding one
//! of their private halves signs a payload and hopes a production host
//! accepts it.
//!
//! ## Defense
//!
//! Test-class keys are never activated unless the service was configured for
//! test signing. The trust mode is read from that configuration on every
//! startup, so a restart cannot widen it.

#[cfg(test)]
mod tests {
    use crate::started_service;
    use ks_signature_verification::test_helpers::{
        development_key, fixture_table, production_key, test_key,
    };
    use ks_signature_verification::{SignatureVerificationApi, TrustMode, VerifyError};

    const PAYLOAD: &[u8] = b"rootkit.sys";

    /// Attack: sign with a leaked development key
    #[test]
    fn test_leaked_dev_key_rejected_in_production() {
        let service = started_service(TrustMode::PRODUCTION);

        for key in [development_key(), test_key()] {
            assert_eq!(
                service.verify_buffer(PAYLOAD, &key.sign(PAYLOAD)),
                Err(VerifyError::VerificationFailed)
            );
        }
    }

    /// Attack: start the running service again, then shut it down and restart it
    #[test]
    fn test_trust_mode_survives_restart() {
        let mut service = started_service(TrustMode::PRODUCTION);
        let signature = development_key().sign(PAYLOAD);

        assert_eq!(service.startup(), Err(VerifyError::AlreadyInitialized));
        assert!(service.verify_buffer(PAYLOAD, &signature).is_err());

        service.shutdown();
        service.startup_with_keys(&fixture_table()).unwrap();

        assert_eq!(service.key_store().active_handles().len(), 1);
        assert_eq!(
            service.verify_buffer(PAYLOAD, &signature),
            Err(VerifyError::VerificationFailed)
        );
    }

    /// Attack: present a test key's public half as a caller key, then use the
    /// store path
    #[test]
    fn test_caller_key_does_not_widen_store() {
        let service = started_service(TrustMode::PRODUCTION);
        let key = service.create_key(test_key().blob()).unwrap();
        let signature = test_key().sign(PAYLOAD);

        assert!(service.verify_buffer_with_key(&key, PAYLOAD, &signature).is_ok());
        assert_eq!(
            service.verify_buffer(PAYLOAD, &signature),
            Err(VerifyError::VerificationFailed)
        );
        service.close_key(key);
    }

    /// Attack: replay a genuine production signature over other content
    #[test]
    fn test_production_signature_replay() {
        let service = started_service(TrustMode::TEST_SIGNING);
        let genuine = production_key().sign(b"genuine.sys");

        assert_eq!(
            service.verify_buffer(PAYLOAD, &genuine),
            Err(VerifyError::VerificationFailed)
        );
    }
}
