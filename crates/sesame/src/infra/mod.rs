//! Infrastructure Layer
//!
//! Reference implementations of the collaborator contracts.

pub mod memory;
