//! Remember-Me Token Manager
//!
//! Issues and clears the persisted long-lived token, keeping it in
//! lockstep with the client-side cookie: every path that touches one
//! side touches the other in the same logical operation.

use std::marker::PhantomData;
use std::sync::Arc;

use platform::cookie::CookieOptions;
use platform::crypto;

use crate::application::session_auth::WebContext;
use crate::config::SessionConfig;
use crate::domain::repository::UserStore;
use crate::domain::user::AuthUser;
use crate::error::AuthResult;

/// Entropy of the opaque token before encoding
const TOKEN_BYTES: usize = 32;

/// Remember-me token manager
pub struct RememberMeManager<U, R>
where
    U: AuthUser,
    R: UserStore<U> + Sync,
{
    store: Arc<R>,
    config: SessionConfig,
    marker: PhantomData<fn() -> U>,
}

impl<U, R> RememberMeManager<U, R>
where
    U: AuthUser,
    R: UserStore<U> + Sync,
{
    pub(crate) fn new(store: Arc<R>, config: SessionConfig) -> Self {
        Self {
            store,
            config,
            marker: PhantomData,
        }
    }

    /// Issue a fresh token: persist it on the record, then mirror it in
    /// a long-lived cookie.
    pub async fn remember(&self, ctx: &mut WebContext<'_>, user: &mut U) -> AuthResult<()> {
        let token = crypto::random_token(TOKEN_BYTES);
        user.set_remember_me_token(Some(token.clone()));
        self.store.save(user).await?;

        let max_age = self.config.remember_me_for.num_seconds();
        ctx.cookies
            .set(&self.config.cookie_name, token, CookieOptions::persistent(max_age));

        tracing::info!(user_id = %user.id(), "remember-me token issued");
        Ok(())
    }

    /// Clear the persisted token and the cookie together
    pub async fn forget(&self, ctx: &mut WebContext<'_>, user: &mut U) -> AuthResult<()> {
        user.set_remember_me_token(None);
        self.store.save(user).await?;
        ctx.cookies.clear(&self.config.cookie_name);

        tracing::info!(user_id = %user.id(), "remember-me token cleared");
        Ok(())
    }

    /// Clear the pair when only the cookie is left to go by.
    ///
    /// Logout paths where the session no longer resolves (host-side
    /// expiry) still carry the cookie; the persisted token is found
    /// through it so both sides clear in the same operation. A cookie
    /// matching no record has no persisted counterpart and is cleared
    /// alone.
    pub async fn forget_by_cookie(&self, ctx: &mut WebContext<'_>) -> AuthResult<()> {
        let Some(token) = ctx.cookies.get(&self.config.cookie_name) else {
            return Ok(());
        };

        match self.store.find_by_remember_me_token(&token).await? {
            Some(mut user) => self.forget(ctx, &mut user).await,
            None => {
                ctx.cookies.clear(&self.config.cookie_name);
                Ok(())
            }
        }
    }

    /// Silent re-authentication from the cookie.
    ///
    /// With no resolvable session, a present cookie is matched against
    /// persisted tokens; on a hit the session key is written without
    /// re-verifying the secret. A miss is treated as anonymous and the
    /// cookie is left in place.
    pub async fn authenticate_from_cookie(&self, ctx: &mut WebContext<'_>) -> AuthResult<Option<U>> {
        let Some(token) = ctx.cookies.get(&self.config.cookie_name) else {
            return Ok(None);
        };

        match self.store.find_by_remember_me_token(&token).await? {
            Some(user) => {
                ctx.session.set(&self.config.session_key, user.id());
                tracing::info!(user_id = %user.id(), "user re-authenticated from cookie");
                Ok(Some(user))
            }
            None => {
                tracing::debug!("remember-me cookie matched no user");
                Ok(None)
            }
        }
    }
}
