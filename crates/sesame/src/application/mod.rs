//! Application Layer
//!
//! The three lifecycle managers and the request-scoped context they
//! operate on.

pub mod remember_me;
pub mod reset_password;
pub mod session_auth;

// Re-exports
pub use remember_me::RememberMeManager;
pub use reset_password::ResetPasswordManager;
pub use session_auth::{Guard, SessionAuthManager, WebContext};
