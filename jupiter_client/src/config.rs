use crate::error::{ClientResult, Error};
use error_stack::{ResultExt, report};
use jupiter_models::models::version::ApiVersion;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://quote-api.jup.ag/v6";
pub const DEFAULT_QUOTE_PATH: &str = "/quote";
pub const DEFAULT_SWAP_PATH: &str = "/swap";
pub const DEFAULT_SWAP_INSTRUCTIONS_PATH: &str = "/swap-instructions";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const JUPITER_URL_ENV: &str = "JUPITER_URL";
pub const JUPITER_API_KEY_ENV: &str = "JUPITER_API_KEY";
pub const JUPITER_TIMEOUT_SECS_ENV: &str = "JUPITER_TIMEOUT_SECS";
pub const JUPITER_API_VERSION_ENV: &str = "JUPITER_API_VERSION";

/// Everything a [`JupiterClient`](crate::client::JupiterClient) needs, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL without trailing slash
    pub api_url: String,
    pub quote_path: String,
    pub swap_path: String,
    pub swap_instructions_path: String,
    /// Overall timeout of one call. Not used when the HTTP client is supplied by the caller.
    pub timeout: Duration,
    pub api_version: ApiVersion,
    /// Sent as `x-api-key` when set
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            quote_path: DEFAULT_QUOTE_PATH.to_string(),
            swap_path: DEFAULT_SWAP_PATH.to_string(),
            swap_instructions_path: DEFAULT_SWAP_INSTRUCTIONS_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            api_version: ApiVersion::default(),
            api_key: None,
        }
    }
}

impl ClientConfig {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_quote_path(mut self, path: impl Into<String>) -> Self {
        self.quote_path = path.into();
        self
    }

    pub fn with_swap_path(mut self, path: impl Into<String>) -> Self {
        self.swap_path = path.into();
        self
    }

    pub fn with_swap_instructions_path(mut self, path: impl Into<String>) -> Self {
        self.swap_instructions_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Defaults overridden by `JUPITER_URL`, `JUPITER_API_KEY`, `JUPITER_TIMEOUT_SECS` and
    /// `JUPITER_API_VERSION`. A `.env` file is loaded first when present.
    pub fn from_env() -> ClientResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_url) = lookup(JUPITER_URL_ENV) {
            config = config.with_api_url(api_url);
        }
        if let Some(api_key) = lookup(JUPITER_API_KEY_ENV).filter(|key| !key.is_empty()) {
            config = config.with_api_key(api_key);
        }
        if let Some(timeout_secs) = lookup(JUPITER_TIMEOUT_SECS_ENV) {
            let timeout_secs = u64::from_str(timeout_secs.trim())
                .change_context(Error::ConfigError(format!(
                    "{JUPITER_TIMEOUT_SECS_ENV} must be a whole number of seconds"
                )))
                .attach_printable_lazy(|| format!("value: {timeout_secs}"))?;
            if timeout_secs == 0 {
                return Err(report!(Error::ConfigError(format!(
                    "{JUPITER_TIMEOUT_SECS_ENV} must be greater than zero"
                ))));
            }
            config = config.with_timeout(Duration::from_secs(timeout_secs));
        }
        if let Some(api_version) = lookup(JUPITER_API_VERSION_ENV) {
            let api_version = ApiVersion::from_str(api_version.trim())
                .change_context(Error::ConfigError(format!(
                    "{JUPITER_API_VERSION_ENV} must be `legacy` or `v6`"
                )))?;
            config = config.with_api_version(api_version);
        }

        Ok(config)
    }
}
