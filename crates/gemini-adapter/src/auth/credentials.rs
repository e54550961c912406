/*
[INPUT]:  API key and secret (explicit or from environment)
[OUTPUT]: Immutable credential pair with a redacted Debug view
[POS]:    Auth layer - credential holder for private endpoints
[UPDATE]: When credential sources change
*/

use std::fmt;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "GEMINI_API_SECRET";

/// API key and secret used to sign private requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Load credentials from `GEMINI_API_KEY` / `GEMINI_API_SECRET`.
    ///
    /// Returns `None` if either variable is missing or blank.
    pub fn from_env() -> Option<Self> {
        let (api_key, api_secret) = env_pair()?;
        Some(Self::new(api_key, api_secret))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &[u8] {
        self.api_secret.as_bytes()
    }
}

/// Key and secret when both are present and not blank (whitespace counts as blank)
pub fn non_blank_pair(api_key: Option<String>, api_secret: Option<String>) -> Option<(String, String)> {
    let api_key = api_key.filter(|value| !value.trim().is_empty())?;
    let api_secret = api_secret.filter(|value| !value.trim().is_empty())?;
    Some((api_key, api_secret))
}

/// Raw `GEMINI_API_KEY` / `GEMINI_API_SECRET` pair, under the `non_blank_pair` rule
pub fn env_pair() -> Option<(String, String)> {
    non_blank_pair(std::env::var(API_KEY_ENV).ok(), std::env::var(API_SECRET_ENV).ok())
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
