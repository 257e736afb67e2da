//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the
//! authentication engine:
//! - Cryptographic randomness and opaque token generation
//! - Cookie attributes and the host-supplied cookie jar contract
//! - The host-supplied per-connection session store contract
//! - An injectable clock so time-dependent logic is testable

pub mod clock;
pub mod cookie;
pub mod crypto;
pub mod session;
