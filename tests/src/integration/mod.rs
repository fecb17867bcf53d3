//! # Integration Tests
//!
//! End-to-end verification through the service API with real RSA-PSS keys.

pub mod end_to_end;
pub mod host_files;
