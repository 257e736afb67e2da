//! In-Memory Collaborators
//!
//! Mutex-held implementations of the persistence and mailer contracts,
//! used by the test suite and suitable for embedders without a real
//! backing store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::mailer::ResetMailer;
use crate::domain::repository::UserStore;
use crate::domain::user::AuthUser;
use crate::error::{MailError, StoreError};

/// In-memory user store keyed by user id
#[derive(Debug, Default)]
pub struct MemoryUsers<U> {
    users: Mutex<HashMap<String, U>>,
}

impl<U: AuthUser> MemoryUsers<U> {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    /// Seed a record
    pub fn insert(&self, user: U) {
        self.users.lock().unwrap().insert(user.id(), user);
    }

    /// Snapshot a record by id
    pub fn get(&self, id: &str) -> Option<U> {
        self.users.lock().unwrap().get(id).cloned()
    }
}

impl<U: AuthUser> UserStore<U> for MemoryUsers<U> {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<U>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.identifier() == identifier)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<U>, StoreError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_remember_me_token(&self, token: &str) -> Result<Option<U>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.remember_me_token() == Some(token))
            .cloned())
    }

    async fn save(&self, user: &U) -> Result<(), StoreError> {
        self.users.lock().unwrap().insert(user.id(), user.clone());
        Ok(())
    }

    async fn delete(&self, user: &U) -> Result<(), StoreError> {
        self.users.lock().unwrap().remove(&user.id());
        Ok(())
    }
}

/// Mailer that records deliveries instead of sending
#[derive(Debug, Default)]
pub struct RecordingMailer {
    deliveries: Mutex<Vec<String>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of users a reset email was dispatched for, in order
    pub fn deliveries(&self) -> Vec<String> {
        self.deliveries.lock().unwrap().clone()
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }
}

impl<U: AuthUser> ResetMailer<U> for RecordingMailer {
    fn send_reset_instructions(&self, user: &U) -> Result<(), MailError> {
        self.deliveries.lock().unwrap().push(user.id());
        Ok(())
    }
}
