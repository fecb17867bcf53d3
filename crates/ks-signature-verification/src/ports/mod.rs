//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that callers use to verify content
//! - **Outbound (Driven)**: Hashing, cryptography and file-system collaborators

pub mod inbound;
pub mod outbound;
