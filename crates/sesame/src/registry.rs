//! Submodule Registry
//!
//! Fixed enumeration of optional feature submodules and the builder
//! that validates configuration and composes them into an [`Engine`].
//! Base session authentication is always present; submodules opt in.
//!
//! Mandatory dependencies are checked at activation time, not at first
//! use: enabling [`Submodule::ResetPassword`] without a mailer fails
//! the whole activation and yields no engine.

use std::collections::HashSet;
use std::sync::Arc;

use platform::clock::{Clock, SystemClock};

use crate::application::remember_me::RememberMeManager;
use crate::application::reset_password::ResetPasswordManager;
use crate::application::session_auth::SessionAuthManager;
use crate::config::{ModelConfig, SessionConfig};
use crate::domain::mailer::ResetMailer;
use crate::domain::repository::UserStore;
use crate::domain::user::AuthUser;
use crate::domain::verifier::{CredentialVerifier, RecordVerifier};
use crate::error::ConfigError;

/// Optional feature submodules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Submodule {
    RememberMe,
    ResetPassword,
}

/// Builder collecting submodules, configuration and collaborators.
///
/// Consumed by [`activate`](Registry::activate), so one registry cannot
/// be activated twice with diverging option sets. Activating two
/// engines over the same store with conflicting options is undefined.
pub struct Registry<U, R>
where
    U: AuthUser,
    R: UserStore<U> + Sync,
{
    store: Arc<R>,
    submodules: HashSet<Submodule>,
    session_config: SessionConfig,
    model_config: ModelConfig,
    verifier: Arc<dyn CredentialVerifier<U>>,
    mailer: Option<Arc<dyn ResetMailer<U>>>,
    clock: Arc<dyn Clock>,
}

impl<U, R> Registry<U, R>
where
    U: AuthUser,
    R: UserStore<U> + Sync,
{
    /// Start a registry over the host's persistence collaborator, with
    /// default configuration, the record-delegating verifier and the
    /// system clock.
    pub fn new(store: Arc<R>) -> Self {
        Self {
            store,
            submodules: HashSet::new(),
            session_config: SessionConfig::default(),
            model_config: ModelConfig::default(),
            verifier: Arc::new(RecordVerifier),
            mailer: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Enable a feature submodule
    pub fn enable(mut self, submodule: Submodule) -> Self {
        self.submodules.insert(submodule);
        self
    }

    /// Replace the request-side option namespace
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Replace the record-side option namespace
    pub fn model_config(mut self, config: ModelConfig) -> Self {
        self.model_config = config;
        self
    }

    /// Replace the credential verification strategy
    pub fn verifier(mut self, verifier: Arc<dyn CredentialVerifier<U>>) -> Self {
        self.verifier = verifier;
        self
    }

    /// Supply the mailer collaborator (required by `ResetPassword`)
    pub fn mailer(mut self, mailer: Arc<dyn ResetMailer<U>>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    /// Replace the time source (tests use a manual clock)
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Validate the configuration and compose the engine.
    ///
    /// Fails with [`ConfigError`] when a submodule's mandatory
    /// dependency is missing; nothing is partially activated.
    pub fn activate(self) -> Result<Engine<U, R>, ConfigError> {
        let reset_password = if self.submodules.contains(&Submodule::ResetPassword) {
            let Some(mailer) = self.mailer.clone() else {
                return Err(ConfigError::MissingMailer);
            };
            Some(ResetPasswordManager::new(
                self.store.clone(),
                self.model_config.clone(),
                mailer,
                self.clock.clone(),
            ))
        } else {
            None
        };

        let remember_me = if self.submodules.contains(&Submodule::RememberMe) {
            Some(Arc::new(RememberMeManager::new(
                self.store.clone(),
                self.session_config.clone(),
            )))
        } else {
            None
        };

        let session = SessionAuthManager::new(
            self.store,
            self.session_config,
            self.verifier,
            remember_me.clone(),
        );

        tracing::info!(submodules = ?self.submodules, "authentication engine activated");

        Ok(Engine {
            submodules: self.submodules,
            session,
            remember_me,
            reset_password,
        })
    }
}

/// Activated engine exposing the composed managers
pub struct Engine<U, R>
where
    U: AuthUser,
    R: UserStore<U> + Sync,
{
    submodules: HashSet<Submodule>,
    session: SessionAuthManager<U, R>,
    remember_me: Option<Arc<RememberMeManager<U, R>>>,
    reset_password: Option<ResetPasswordManager<U, R>>,
}

impl<U, R> Engine<U, R>
where
    U: AuthUser,
    R: UserStore<U> + Sync,
{
    /// Session authentication manager (always present)
    pub fn session(&self) -> &SessionAuthManager<U, R> {
        &self.session
    }

    /// Remember-me manager, when the submodule was enabled
    pub fn remember_me(&self) -> Option<&RememberMeManager<U, R>> {
        self.remember_me.as_deref()
    }

    /// Password-reset manager, when the submodule was enabled
    pub fn reset_password(&self) -> Option<&ResetPasswordManager<U, R>> {
        self.reset_password.as_ref()
    }

    /// Whether a submodule was enabled at activation
    pub fn enabled(&self, submodule: Submodule) -> bool {
        self.submodules.contains(&submodule)
    }
}
