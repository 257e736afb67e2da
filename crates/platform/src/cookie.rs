//! Cookie Infrastructure
//!
//! The engine never talks to an HTTP stack directly: the host hands it a
//! [`CookieJar`] scoped to the current request. `CookieOptions` and the
//! header helpers exist so HTTP hosts can implement the jar over real
//! `Cookie`/`Set-Cookie` headers.

use std::collections::HashMap;

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes attached when setting a cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieOptions {
    /// Options for a long-lived cookie surviving the browser session
    pub fn persistent(max_age_secs: i64) -> Self {
        Self {
            max_age_secs: Some(max_age_secs),
            ..Self::default()
        }
    }

    /// Build a `Set-Cookie` header value
    pub fn build_set_cookie(&self, name: &str, value: &str) -> String {
        let mut cookie = format!("{}={}", name, value);

        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.path));

        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }

        cookie
    }

    /// Build a `Set-Cookie` header value that deletes the cookie
    pub fn build_delete_cookie(&self, name: &str) -> String {
        format!("{}=; HttpOnly; Path={}; Max-Age=0", name, self.path)
    }
}

/// Extract a cookie value from a `Cookie` request header
pub fn extract_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|cookie| {
        let (key, value) = cookie.trim().split_once('=')?;

        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// Per-request cookie jar supplied by the host.
///
/// `set` and `clear` are expected to reach the client (for HTTP hosts,
/// via `Set-Cookie`); `get` reads what the client presented.
pub trait CookieJar {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&mut self, name: &str, value: String, options: CookieOptions);
    fn clear(&mut self, name: &str);
}

/// In-memory jar for tests and non-HTTP embedders
#[derive(Debug, Default)]
pub struct MemoryCookies {
    values: HashMap<String, String>,
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieJar for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: String, _options: CookieOptions) {
        self.values.insert(name.to_string(), value);
    }

    fn clear(&mut self, name: &str) {
        self.values.remove(name);
    }
}
