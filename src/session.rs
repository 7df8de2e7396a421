//! Session credential holder
//!
//! The bearer token is injected explicitly wherever it is needed; it is
//! set at login, cleared at logout or expiry, and never read from
//! ambient global state.

use crate::error::{ClientError, ClientResult};

/// Holds the opaque bearer credential for registry and runner calls.
#[derive(Clone, Debug, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session { token: None }
    }

    /// Session that already carries a credential, mostly for tests and
    /// callers that obtain the token elsewhere.
    pub fn authenticated(token: impl Into<String>) -> Self {
        Session {
            token: Some(token.into()),
        }
    }

    /// Store the credential obtained from the login flow.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the credential on logout or expiry.
    pub fn clear(&mut self) {
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The bearer token, or a precondition error when none is present.
    /// Callers must check this before building any request.
    pub fn bearer(&self) -> ClientResult<&str> {
        self.token
            .as_deref()
            .ok_or(ClientError::MissingCredential)
    }
}
