//! Deployment configuration
//!
//! The enhancement pipeline needs two values from its environment: the
//! deployment's public endpoint URL (required, written into the output
//! document's `servers` list) and the API token used to personalize
//! generated samples (optional).

use thiserror::Error;
use url::Url;

/// Environment variable holding the public endpoint URL.
pub const ENDPOINT_URL_VAR: &str = "SAMPLIFY_ENDPOINT_URL";

/// Environment variable holding the API token.
pub const API_TOKEN_VAR: &str = "SAMPLIFY_API_TOKEN";

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("public endpoint URL not configured (pass --endpoint-url or set SAMPLIFY_ENDPOINT_URL)")]
    MissingEndpoint,

    #[error("invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        source: url::ParseError,
    },
}

/// Resolved deployment configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public endpoint URL. Kept as the raw string so it lands in the output
    /// `servers` list verbatim; validated with [`Url::parse`] on resolve.
    pub endpoint_url: String,
    /// API token for credential substitution. Empty when the caller has none.
    pub api_token: String,
}

impl Config {
    /// Resolve configuration from explicit values (CLI flags), falling back
    /// to environment variables.
    pub fn resolve(
        endpoint_url: Option<String>,
        api_token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint_url = endpoint_url
            .or_else(|| std::env::var(ENDPOINT_URL_VAR).ok())
            .ok_or(ConfigError::MissingEndpoint)?;
        Url::parse(&endpoint_url).map_err(|source| ConfigError::InvalidEndpoint {
            url: endpoint_url.clone(),
            source,
        })?;

        let api_token = api_token
            .or_else(|| std::env::var(API_TOKEN_VAR).ok())
            .unwrap_or_default();

        Ok(Self {
            endpoint_url,
            api_token,
        })
    }
}
