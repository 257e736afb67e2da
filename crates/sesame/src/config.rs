//! Engine Configuration
//!
//! Two independent option namespaces, mirroring the split between the
//! request-handling side and the user-record side of a host application.
//! Setting an option in one namespace never affects the other.
//!
//! Both structs carry documented defaults and an in-place [`reset`]
//! restoring them, primarily as a test-isolation aid.
//!
//! [`reset`]: SessionConfig::reset

use chrono::Duration;

/// Options for the request-handling side: session auth and remember-me.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Session key holding the logged-in user's id
    pub session_key: String,
    /// Name of the remember-me cookie
    pub cookie_name: String,
    /// Action identifier the host should dispatch when a login guard
    /// rejects a request
    pub not_logged_in_action: String,
    /// Lifetime of the remember-me cookie
    pub remember_me_for: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_key: "user_id".to_string(),
            cookie_name: "remember_me_token".to_string(),
            not_logged_in_action: "not_authenticated".to_string(),
            remember_me_for: Duration::days(7),
        }
    }
}

impl SessionConfig {
    /// Restore all options to their documented defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Options for the user-record side: remember-me and password reset.
///
/// The `*_attribute` and `reset_password_email_method` fields are hints
/// for persistence and mailer adapters mapping engine fields onto host
/// storage; the engine itself reaches the fields through the
/// [`AuthUser`](crate::domain::AuthUser) accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Storage field holding the persisted remember-me token
    pub remember_me_token_attribute: String,
    /// Storage field holding the reset code
    pub reset_password_code_attribute: String,
    /// Storage field holding the reset-email issuance timestamp
    pub reset_password_email_sent_at_attribute: String,
    /// Mailer method dispatched for reset instructions
    pub reset_password_email_method: String,
    /// How long an issued reset code stays valid; `None` means the code
    /// never expires by time
    pub reset_password_expiration_period: Option<Duration>,
    /// Minimum interval between reset emails for one user; `None` or a
    /// zero duration disables the check
    pub reset_password_time_between_emails: Option<Duration>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            remember_me_token_attribute: "remember_me_token".to_string(),
            reset_password_code_attribute: "reset_password_code".to_string(),
            reset_password_email_sent_at_attribute: "reset_password_email_sent_at".to_string(),
            reset_password_email_method: "reset_password_email".to_string(),
            reset_password_expiration_period: None,
            reset_password_time_between_emails: Some(Duration::minutes(5)),
        }
    }
}

impl ModelConfig {
    /// Restore all options to their documented defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
