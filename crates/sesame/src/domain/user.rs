//! User Record Contract
//!
//! The user record is owned and persisted by the host; the engine only
//! reads and writes the fields below through this accessor trait.

use chrono::{DateTime, Utc};

/// Accessor contract over the host-owned user record.
///
/// `Clone` is required because managers hand resolved records back to
/// the caller while the store keeps its own copy.
pub trait AuthUser: Clone + Send + Sync + 'static {
    /// Stable id stored in the session on login
    fn id(&self) -> String;

    /// Login identifier (username, email, ...)
    fn identifier(&self) -> &str;

    /// Check a presented secret against the stored credential.
    ///
    /// How the secret is hashed and compared is entirely the host's
    /// choice; the engine only consumes the boolean outcome.
    fn verify_password(&self, secret: &str) -> bool;

    /// Replace the stored secret
    fn set_password(&mut self, secret: &str);

    /// Persisted remember-me token, if one is outstanding
    fn remember_me_token(&self) -> Option<&str>;
    fn set_remember_me_token(&mut self, token: Option<String>);

    /// Outstanding password-reset code, if any
    fn reset_password_code(&self) -> Option<&str>;
    fn set_reset_password_code(&mut self, code: Option<String>);

    /// When reset instructions were last emailed; `None` means never
    fn reset_password_email_sent_at(&self) -> Option<DateTime<Utc>>;
    fn set_reset_password_email_sent_at(&mut self, sent_at: Option<DateTime<Utc>>);
}
