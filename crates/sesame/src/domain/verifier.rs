//! Credential Verifier
//!
//! Match/no-match decision between a stored user record and a presented
//! secret. Pluggable so hosts can swap in their own comparison strategy
//! (peppered hashes, external identity checks, constant-time wrappers).

use crate::domain::user::AuthUser;

/// Credential verification strategy
pub trait CredentialVerifier<U>: Send + Sync {
    /// Return whether `secret` matches the credential stored on `user`
    fn verify(&self, user: &U, secret: &str) -> bool;
}

/// Default strategy: delegate to the record's own verification
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordVerifier;

impl<U: AuthUser> CredentialVerifier<U> for RecordVerifier {
    fn verify(&self, user: &U, secret: &str) -> bool {
        user.verify_password(secret)
    }
}
