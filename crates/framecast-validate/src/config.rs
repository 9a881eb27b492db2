use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{BackendKind, Result, ValidateError};

/// Default bound on a single validation exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable naming the hub base URL.
pub const ENV_HUB_URL: &str = "FRAMECAST_HUB_URL";
/// Environment variable naming the indexer base URL.
pub const ENV_INDEXER_URL: &str = "FRAMECAST_INDEXER_URL";
/// Environment variable carrying the indexer API key.
pub const ENV_INDEXER_KEY: &str = "FRAMECAST_INDEXER_KEY";

/// Default indexer base URL.
pub const DEFAULT_INDEXER_URL: &str = "https://api.neynar.com";

/// Configuration for the hub backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// Hub base URL, e.g. `https://nemes.farcaster.xyz:2281`.
    pub base_url: String,
    /// Bound on the single validation exchange.
    pub timeout: Duration,
}

impl HubConfig {
    /// Configuration for an explicit hub URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the hub URL from [`ENV_HUB_URL`].
    pub fn from_env() -> Result<Self> {
        match env::var(ENV_HUB_URL) {
            Ok(url) if !url.is_empty() => Ok(Self::new(url)),
            _ => Err(ValidateError::MissingEndpoint {
                backend: BackendKind::Hub,
            }),
        }
    }
}

/// Configuration for the indexer backend.
///
/// The API key is mandatory: constructing this type is the proof that a
/// credential exists, so a missing key surfaces as a configuration error
/// before any message is validated.
#[derive(Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Indexer base URL.
    pub base_url: String,
    /// API key sent with every validation request.
    pub api_key: String,
    /// Bound on the single validation exchange.
    pub timeout: Duration,
}

impl IndexerConfig {
    /// Configuration for the default indexer with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_INDEXER_URL)
    }

    /// Configuration for a non-default indexer deployment.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ValidateError::MissingCredentials {
                backend: BackendKind::Indexer,
            });
        }
        Ok(Self {
            base_url: trim_trailing_slash(base_url.into()),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read the API key from [`ENV_INDEXER_KEY`] and the base URL from
    /// [`ENV_INDEXER_URL`] (falling back to the default indexer).
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_INDEXER_KEY).unwrap_or_default();
        let base_url =
            env::var(ENV_INDEXER_URL).unwrap_or_else(|_| DEFAULT_INDEXER_URL.to_string());
        Self::with_base_url(api_key, base_url)
    }
}

// The API key is credential material; keep it out of debug output.
impl fmt::Debug for IndexerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexerConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &format_args!("<redacted:{} bytes>", self.api_key.len()),
            )
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
