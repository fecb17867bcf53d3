//! # Adapters Module
//!
//! Concrete collaborators implementing the outbound ports.
//!
//! - `sha512`: [`crate::ports::outbound::HashProvider`] over the `sha2` crate
//! - `rsa_pss`: [`crate::ports::outbound::CryptoProvider`] over the `rsa` crate
//! - `std_fs`: [`crate::ports::outbound::FileSystem`] over `std::fs`
//! - `memory_fs`: in-memory file system with injectable lock conditions

pub mod memory_fs;
pub mod rsa_pss;
pub mod sha512;
pub mod std_fs;
