//! Password-Reset Code Manager
//!
//! Rate-limited issuance of one-time reset codes, time-bounded
//! validation, and the clear-on-password-change rule.

use std::sync::Arc;

use platform::clock::Clock;
use platform::crypto;

use crate::config::ModelConfig;
use crate::domain::mailer::ResetMailer;
use crate::domain::repository::UserStore;
use crate::domain::user::AuthUser;
use crate::error::AuthResult;

/// Entropy of the reset code before encoding
const CODE_BYTES: usize = 24;

/// Password-reset code manager
pub struct ResetPasswordManager<U, R>
where
    U: AuthUser,
    R: UserStore<U> + Sync,
{
    store: Arc<R>,
    config: ModelConfig,
    mailer: Arc<dyn ResetMailer<U>>,
    clock: Arc<dyn Clock>,
}

impl<U, R> ResetPasswordManager<U, R>
where
    U: AuthUser,
    R: UserStore<U> + Sync,
{
    pub(crate) fn new(
        store: Arc<R>,
        config: ModelConfig,
        mailer: Arc<dyn ResetMailer<U>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            config,
            mailer,
            clock,
        }
    }

    /// Issue a reset code and dispatch the instructions email.
    ///
    /// Inside the configured `reset_password_time_between_emails`
    /// window the call is a silent no-op — the outstanding code is kept
    /// and no email goes out — returning `Ok(false)`. Otherwise a fresh
    /// code and issuance timestamp are persisted before the mailer is
    /// invoked, and `Ok(true)` is returned.
    ///
    /// Concurrent calls for one user may both pass the rate check; the
    /// last persisted code wins and at most one extra email goes out.
    pub async fn deliver_reset_instructions(&self, user: &mut U) -> AuthResult<bool> {
        if self.rate_limited(user) {
            tracing::debug!(user_id = %user.id(), "reset instructions suppressed by rate limit");
            return Ok(false);
        }

        let code = crypto::random_token(CODE_BYTES);
        user.set_reset_password_code(Some(code));
        user.set_reset_password_email_sent_at(Some(self.clock.now()));

        // Persist first: a crash mid-send must never leave a sent email
        // referencing an unpersisted code.
        self.store.save(user).await?;
        self.mailer.send_reset_instructions(user)?;

        tracing::info!(user_id = %user.id(), "reset instructions sent");
        Ok(true)
    }

    /// Validate a submitted reset code.
    ///
    /// True iff a code is outstanding, `submitted` equals it exactly,
    /// and — when an expiration period is configured — the elapsed time
    /// since issuance is strictly less than that period. Without a
    /// configured period the code only dies by replacement or password
    /// change.
    pub fn code_valid(&self, user: &U, submitted: &str) -> bool {
        let Some(code) = user.reset_password_code() else {
            return false;
        };
        if code != submitted {
            return false;
        }

        let Some(period) = self.config.reset_password_expiration_period else {
            return true;
        };
        match user.reset_password_email_sent_at() {
            Some(sent_at) => self.clock.now() - sent_at < period,
            // A code that was never issued by mail cannot time-expire.
            None => true,
        }
    }

    /// Replace the user's secret and clear any outstanding reset code.
    ///
    /// The clear is unconditional anti-replay: it applies regardless of
    /// the code's expiration state.
    pub async fn change_password(&self, user: &mut U, new_secret: &str) -> AuthResult<()> {
        user.set_password(new_secret);
        user.set_reset_password_code(None);
        self.store.save(user).await?;

        tracing::info!(user_id = %user.id(), "password changed, reset code cleared");
        Ok(())
    }

    fn rate_limited(&self, user: &U) -> bool {
        let Some(window) = self.config.reset_password_time_between_emails else {
            return false;
        };
        if window.is_zero() {
            return false;
        }
        let Some(sent_at) = user.reset_password_email_sent_at() else {
            return false;
        };

        self.clock.now() - sent_at < window
    }
}
