//! Session primitives shared across the UI.
//!
//! # Design
//! - A session is just the bearer token; "logged in" is derived from it so the two can
//!   never disagree.
//! - Token persistence is a collaborator behind [`TokenStorage`]; the browser build
//!   backs it with local storage.
//! - Login form validation happens before any request is issued.

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Username pre-filled in the login form.
pub const DEMO_USERNAME: &str = "demouser";
/// Password pre-filled in the login form.
pub const DEMO_PASSWORD: &str = "password";

/// Authenticated session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// Build a session from a stored or freshly issued token.
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The bearer token, or `None` when signed out.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(self.token.as_str())
        }
    }

    /// Whether a token is held.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Username/password pair submitted by the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Plain-text password.
    pub password: String,
}

impl Credentials {
    /// Demo account values used to pre-fill the form.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            username: DEMO_USERNAME.to_string(),
            password: DEMO_PASSWORD.to_string(),
        }
    }

    /// Ensure both fields carry a value.
    ///
    /// # Errors
    /// Returns the first missing field as a [`LoginInputError`].
    pub fn validate(&self) -> Result<(), LoginInputError> {
        if self.username.trim().is_empty() {
            return Err(LoginInputError::MissingUsername);
        }
        if self.password.trim().is_empty() {
            return Err(LoginInputError::MissingPassword);
        }
        Ok(())
    }
}

/// Login form validation failures.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LoginInputError {
    /// Username field is empty.
    #[error("Username is required")]
    MissingUsername,
    /// Password field is empty.
    #[error("Password is required")]
    MissingPassword,
}

/// Interpret a raw value read from token storage.
///
/// Blank values count as signed out. A value wrapped in JSON string quotes (as written by
/// JSON-encoding storage helpers) is unwrapped.
#[must_use]
pub fn stored_token(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.trim();
    let token = trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Persistent key-value slot holding the bearer token.
pub trait TokenStorage {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn store(&self, token: &str);
    /// Remove the persisted token.
    fn clear(&self);
}

impl<T: TokenStorage + ?Sized> TokenStorage for Rc<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn store(&self, token: &str) {
        (**self).store(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// Process-local token slot for hosts without browser storage.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryTokenStorage {
    /// Start with `token` already persisted.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_in_tracks_token_presence() {
        assert!(!Session::default().is_logged_in());
        assert_eq!(Session::default().token(), None);
        assert!(!Session::from_token("").is_logged_in());
        let session = Session::from_token("abc");
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("abc"));
    }

    #[test]
    fn credentials_require_both_fields() {
        let missing_user = Credentials {
            username: "  ".into(),
            password: "secret".into(),
        };
        assert_eq!(missing_user.validate(), Err(LoginInputError::MissingUsername));
        let missing_pass = Credentials {
            username: "demouser".into(),
            password: String::new(),
        };
        assert_eq!(missing_pass.validate(), Err(LoginInputError::MissingPassword));
        assert_eq!(Credentials::demo().validate(), Ok(()));
    }

    #[test]
    fn stored_token_accepts_raw_and_quoted_values() {
        assert_eq!(stored_token(Some("abc".into())).as_deref(), Some("abc"));
        assert_eq!(stored_token(Some("\"abc\"".into())).as_deref(), Some("abc"));
        assert_eq!(stored_token(Some(" abc \n".into())).as_deref(), Some("abc"));
    }

    #[test]
    fn stored_token_treats_blank_as_signed_out() {
        assert_eq!(stored_token(None), None);
        assert_eq!(stored_token(Some("   ".into())), None);
        assert_eq!(stored_token(Some("\"\"".into())), None);
    }

    #[test]
    fn memory_storage_round_trips_and_clears() {
        let storage = MemoryTokenStorage::default();
        assert_eq!(storage.load(), None);
        storage.store("t1");
        storage.store("t2");
        assert_eq!(storage.load().as_deref(), Some("t2"));
        storage.clear();
        assert_eq!(storage.load(), None);
    }
}
