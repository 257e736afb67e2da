//! Sesame - Embeddable Authentication Engine
//!
//! Credential/token lifecycle core that attaches to a host application:
//! - `domain/` - user-record accessor contract, credential verifier,
//!   persistence and mailer collaborator traits
//! - `application/` - session auth, remember-me, and password-reset
//!   managers
//! - `registry` - submodule enumeration and activation-time validation
//! - `infra/` - in-memory reference collaborators
//!
//! ## Features
//! - Session-based login/logout with a pluggable credential check
//! - Optional persistent remember-me tokens with silent
//!   re-authentication from the cookie
//! - Rate-limited password-reset codes with optional time expiry
//!
//! The HTTP request cycle, persistence, and email delivery stay with
//! the host behind narrow contracts; per-request state reaches the
//! engine through [`WebContext`]. All time-dependent rules read an
//! injectable clock.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod registry;

// Re-exports for convenience
pub use application::{
    Guard, RememberMeManager, ResetPasswordManager, SessionAuthManager, WebContext,
};
pub use config::{ModelConfig, SessionConfig};
pub use domain::{AuthUser, CredentialVerifier, RecordVerifier, ResetMailer, UserStore};
pub use error::{AuthError, AuthResult, ConfigError, MailError, StoreError};
pub use registry::{Engine, Registry, Submodule};
