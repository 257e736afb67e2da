//! Engine Error Types
//!
//! Exceptions are reserved for programmer and infrastructure failures:
//! bad credentials and invalid or expired reset codes are ordinary
//! values (`Ok(None)` / `false`), never error variants, so the failure
//! path stays indistinguishable between "no such user" and "wrong
//! secret". Rate-limit suppression is a silent no-op, not an error.

use thiserror::Error;

/// Engine result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Activation-time configuration error.
///
/// Raised by `Registry::activate` and never silently defaulted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The reset-password submodule was enabled without a mailer
    #[error("reset-password submodule requires a configured mailer")]
    MissingMailer,
}

/// Failure reported by the persistence collaborator
#[derive(Debug, Error)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

/// Failure reported by the mailer collaborator
#[derive(Debug, Error)]
#[error("mail error: {0}")]
pub struct MailError(pub String);

/// Runtime engine error: a collaborator failed
#[derive(Debug, Error)]
pub enum AuthError {
    /// Persistence collaborator failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Mailer collaborator failure
    #[error(transparent)]
    Mailer(#[from] MailError),
}
