//! # Domain Layer
//!
//! Pure verification logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod embedded_keys;
pub mod engine;
pub mod entities;
pub mod errors;
pub mod key_blob;
pub mod key_store;
pub mod sig_path;
