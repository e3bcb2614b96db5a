//! Session token acquisition and the authentication guard.

use crate::core::endpoint;
use crate::core::{JqError, Params};

/// The current session token, if any.
///
/// The service answers a token request with either the token or an error message,
/// both as a plain 200 body, so an acquired token is only proven valid by a later call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Cheap check that the token is not error text: tokens are a single run of
    /// URL-safe characters, error messages contain spaces, colons or non-ASCII text.
    pub fn looks_valid(&self) -> bool {
        self.token().is_some_and(|t| {
            t.chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '=' | '+' | '/'))
        })
    }

    pub(crate) fn set(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub(crate) fn clear(&mut self) {
        self.token = None;
    }
}

impl super::JqClient {
    /// Requests a fresh token with method `get_token`.
    ///
    /// `mob` is the registered phone number, `pwd` the account password. The body is stored
    /// as the token (surrounding whitespace trimmed) and returned. On transport failure the
    /// token is cleared and an empty string is returned; check [`Session::looks_valid`] or
    /// the emptiness of the result rather than expecting an error.
    pub fn acquire_token(&mut self, mob: &str, pwd: &str) -> String {
        self.request_token("get_token", mob, pwd)
    }

    /// Like [`JqClient::acquire_token`] with method `get_current_token`: the service returns
    /// the still-valid token if there is one, or mints a new one.
    pub fn current_token(&mut self, mob: &str, pwd: &str) -> String {
        self.request_token("get_current_token", mob, pwd)
    }

    /// Fails with [`JqError::Unauthenticated`] when no token is held.
    pub fn ensure_authenticated(&self) -> Result<(), JqError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(JqError::Unauthenticated)
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The current token, if any.
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    /// Install a token obtained elsewhere.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.session.set(token);
    }

    /// Drop the current token; authenticated calls fail until a new one is acquired.
    pub fn clear_token(&mut self) {
        self.session.clear();
    }

    fn request_token(&mut self, method: &str, mob: &str, pwd: &str) -> String {
        let params = Params::new().with("mob", mob).with("pwd", pwd);
        let result = endpoint::require(method).and_then(|ep| self.send(ep, params));

        match result {
            Ok(body) => {
                self.session.set(body.trim());
                #[cfg(feature = "tracing")]
                {
                    if !self.session.looks_valid() {
                        tracing::warn!(method, "token response looks like an error message");
                    }
                }
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(method, error = %_e, "token request failed; session cleared");
                self.session.clear();
            }
        }

        self.session.token().unwrap_or_default().to_string()
    }
}
