//! Mailer Collaborator Contract

use crate::error::MailError;

/// Outbound reset-instruction delivery, supplied by the host.
///
/// Dispatch may be synchronous or hand off to a queue; the engine only
/// requires that dispatch is initiated before
/// `deliver_reset_instructions` returns, not that delivery completes.
pub trait ResetMailer<U>: Send + Sync {
    fn send_reset_instructions(&self, user: &U) -> Result<(), MailError>;
}
