//! Domain Layer
//!
//! Contracts the engine consumes: the user-record accessor trait, the
//! credential verifier, and the persistence and mailer collaborators.

pub mod mailer;
pub mod repository;
pub mod user;
pub mod verifier;

// Re-exports
pub use mailer::ResetMailer;
pub use repository::UserStore;
pub use user::AuthUser;
pub use verifier::{CredentialVerifier, RecordVerifier};
