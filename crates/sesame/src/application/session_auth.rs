//! Session Authentication Manager
//!
//! Login, logout, logged-in queries and the login guard. When the
//! remember-me submodule is active the manager also drives token
//! issuance on login, paired clearing on logout, and silent
//! re-authentication from the cookie.

use std::sync::Arc;

use platform::cookie::CookieJar;
use platform::session::SessionStore;

use crate::application::remember_me::RememberMeManager;
use crate::config::SessionConfig;
use crate::domain::repository::UserStore;
use crate::domain::user::AuthUser;
use crate::domain::verifier::CredentialVerifier;
use crate::error::AuthResult;

/// Request-scoped collaborator bundle.
///
/// The host constructs one per inbound request from its own session and
/// cookie plumbing; neither store is shared across connections.
pub struct WebContext<'a> {
    pub session: &'a mut dyn SessionStore,
    pub cookies: &'a mut dyn CookieJar,
}

/// Outcome of the login guard
#[derive(Debug)]
pub enum Guard<U> {
    /// Proceed with the protected operation as this user
    Authenticated(U),
    /// Dispatch the configured fallback action instead
    Denied {
        /// Configured `not_logged_in_action` identifier
        action: String,
    },
}

/// Session authentication manager
pub struct SessionAuthManager<U, R>
where
    U: AuthUser,
    R: UserStore<U> + Sync,
{
    store: Arc<R>,
    config: SessionConfig,
    verifier: Arc<dyn CredentialVerifier<U>>,
    remember_me: Option<Arc<RememberMeManager<U, R>>>,
}

impl<U, R> SessionAuthManager<U, R>
where
    U: AuthUser,
    R: UserStore<U> + Sync,
{
    pub(crate) fn new(
        store: Arc<R>,
        config: SessionConfig,
        verifier: Arc<dyn CredentialVerifier<U>>,
        remember_me: Option<Arc<RememberMeManager<U, R>>>,
    ) -> Self {
        Self {
            store,
            config,
            verifier,
            remember_me,
        }
    }

    /// Attempt a credential login.
    ///
    /// On success the session key is set to the user's id and the user
    /// is returned; with `remember` and an active remember-me submodule
    /// a token/cookie pair is issued as well. On failure the session is
    /// left untouched and `Ok(None)` is returned, with no distinction
    /// between an unknown identifier and a wrong secret.
    pub async fn login(
        &self,
        ctx: &mut WebContext<'_>,
        identifier: &str,
        secret: &str,
        remember: bool,
    ) -> AuthResult<Option<U>> {
        let Some(mut user) = self.store.find_by_identifier(identifier).await? else {
            tracing::warn!("failed login attempt");
            return Ok(None);
        };

        if !self.verifier.verify(&user, secret) {
            tracing::warn!("failed login attempt");
            return Ok(None);
        }

        ctx.session.set(&self.config.session_key, user.id());

        if remember {
            if let Some(manager) = &self.remember_me {
                manager.remember(ctx, &mut user).await?;
            }
        }

        tracing::info!(user_id = %user.id(), remember, "user logged in");
        Ok(Some(user))
    }

    /// Clear the session.
    ///
    /// With the remember-me submodule active, the persisted token and
    /// the cookie are cleared in this same call, never one without the
    /// other.
    pub async fn logout(&self, ctx: &mut WebContext<'_>) -> AuthResult<()> {
        if let Some(manager) = &self.remember_me {
            match self.session_user(ctx.session).await? {
                Some(mut user) => manager.forget(ctx, &mut user).await?,
                // Session gone (host-side expiry) but a cookie may
                // survive: resolve through it so the persisted token
                // clears together with the cookie.
                None => manager.forget_by_cookie(ctx).await?,
            }
        }

        ctx.session.delete(&self.config.session_key);
        tracing::info!("user logged out");
        Ok(())
    }

    /// Whether the session resolves to an existing user record
    pub async fn logged_in(&self, ctx: &mut WebContext<'_>) -> AuthResult<bool> {
        Ok(self.current_user(ctx).await?.is_some())
    }

    /// Resolve the logged-in user.
    ///
    /// Returns `None` uniformly when nobody is logged in. (The historical
    /// contract this replaces distinguished a `false` sentinel from an
    /// absent value; this engine collapses both into `Option`.)
    ///
    /// When the remember-me submodule is active and the session does not
    /// resolve, a present cookie is tried as a silent re-authentication
    /// path, writing the session on a match.
    pub async fn current_user(&self, ctx: &mut WebContext<'_>) -> AuthResult<Option<U>> {
        if let Some(user) = self.session_user(ctx.session).await? {
            return Ok(Some(user));
        }

        if let Some(manager) = &self.remember_me {
            return manager.authenticate_from_cookie(ctx).await;
        }

        Ok(None)
    }

    /// Login guard for protected operations.
    ///
    /// The host invokes this before a protected operation and, on
    /// `Guard::Denied`, dispatches the carried action identifier instead
    /// of the operation.
    pub async fn require_login(&self, ctx: &mut WebContext<'_>) -> AuthResult<Guard<U>> {
        match self.current_user(ctx).await? {
            Some(user) => Ok(Guard::Authenticated(user)),
            None => Ok(Guard::Denied {
                action: self.config.not_logged_in_action.clone(),
            }),
        }
    }

    /// Resolve the session key to an existing record, if any
    async fn session_user(&self, session: &dyn SessionStore) -> AuthResult<Option<U>> {
        match session.get(&self.config.session_key) {
            Some(id) => Ok(self.store.find_by_id(&id).await?),
            None => Ok(None),
        }
    }
}
