// File: ./src/client/auth.rs
// Builds the Trello authorization header from an API key and token.
use crate::error::{Error, Result};
use http::HeaderValue;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_token: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_token: api_token.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.api_token.trim().is_empty()
    }

    /// `Authorization` value accepted by the Trello REST API.
    pub fn header_value(&self) -> Result<HeaderValue> {
        let raw = format!(
            "OAuth oauth_consumer_key=\"{}\", oauth_token=\"{}\"",
            self.api_key.trim(),
            self.api_token.trim()
        );
        let mut value = HeaderValue::from_str(&raw)
            .map_err(|_| Error::Configuration("credentials contain invalid characters".into()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

// Keep tokens out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_token", &"<redacted>")
            .finish()
    }
}
