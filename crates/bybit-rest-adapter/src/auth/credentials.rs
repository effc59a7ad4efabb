/*
[INPUT]:  API key and API secret (explicit or from environment)
[OUTPUT]: Credentials with the secret wrapped in SecretString
[POS]:    Auth layer - credential storage for signed requests
[UPDATE]: When changing credential sources or environment variable names
*/

use crate::http::{BybitError, Result};
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BYBIT_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "BYBIT_API_SECRET";

/// API credentials for authenticated requests.
///
/// The API key travels in clear in the `X-BAPI-API-KEY` header. The secret
/// never leaves the process and is redacted from `Debug` output.
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Load credentials from `BYBIT_API_KEY` and `BYBIT_API_SECRET`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| BybitError::MissingEnvVar(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| BybitError::MissingEnvVar(API_SECRET_ENV.to_string()))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// API key (public, safe to log)
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret for signing only. Never log the return value.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self::new(self.api_key.clone(), self.expose_secret().to_owned())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
