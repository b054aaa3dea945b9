//! HTTP Basic credentials.
//!
//! The authorization header is derived once per client and attached to every
//! request as a default header. Credentials are never written anywhere; the
//! `Debug` output masks the password.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::HeaderValue;

use crate::error::{ClientError, ClientResult};

/// Username/password pair for the management API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Base64 of `username:password`.
    pub fn basic_token(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.username, self.password))
    }

    /// `Authorization` header value, marked sensitive so it is never logged.
    pub fn header_value(&self) -> ClientResult<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Basic {}", self.basic_token())).map_err(
            |e| ClientError::Config {
                message: format!("credentials cannot be encoded as a header: {}", e),
            },
        )?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
