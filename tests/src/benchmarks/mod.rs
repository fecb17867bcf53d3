//! # Keystone Benchmarks
//!
//! Criterion bodies for the verification paths. Registered by
//! `benches/verification_benchmarks.rs`.

pub mod verification;
