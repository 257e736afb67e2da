//! Persistence Collaborator Contract
//!
//! Interface to the host's user storage. Implementations live with the
//! host (or in `infra::memory` for tests); the engine assumes
//! read-your-writes consistency for one logical user across sequential
//! operations and provides no cross-request locking.

use crate::domain::user::AuthUser;
use crate::error::StoreError;

/// User persistence collaborator
#[trait_variant::make(UserStore: Send)]
pub trait LocalUserStore<U: AuthUser> {
    /// Find a user by login identifier
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<U>, StoreError>;

    /// Find a user by the id previously written to the session
    async fn find_by_id(&self, id: &str) -> Result<Option<U>, StoreError>;

    /// Find the user whose persisted remember-me token equals `token`
    async fn find_by_remember_me_token(&self, token: &str) -> Result<Option<U>, StoreError>;

    /// Persist the record's current field values
    async fn save(&self, user: &U) -> Result<(), StoreError>;

    /// Remove the record
    async fn delete(&self, user: &U) -> Result<(), StoreError>;
}
