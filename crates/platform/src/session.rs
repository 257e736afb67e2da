//! Session Store Contract
//!
//! Per-connection key/value state supplied by the host. The engine never
//! creates or owns a session; it writes exactly one key (the configured
//! session key) into whatever store the host scopes to the current client.

use std::collections::HashMap;

/// Host-supplied per-connection session store
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn delete(&mut self, key: &str);
}

/// In-memory session for tests and non-HTTP embedders
#[derive(Debug, Default)]
pub struct MemorySession {
    values: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.values.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session() {
        let mut session = MemorySession::new();
        assert_eq!(session.get("user_id"), None);

        session.set("user_id", "42".to_string());
        assert_eq!(session.get("user_id"), Some("42".to_string()));

        session.delete("user_id");
        assert_eq!(session.get("user_id"), None);
    }
}
