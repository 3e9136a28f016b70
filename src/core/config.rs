//! Client configuration.
//!
//! Credentials and endpoint can be given directly or read from the
//! `INVOICEXPRESS_*` environment variables.

use std::time::Duration;

use super::error::{InvoicexpressError, Result};

/// Endpoint template; `{account}` is replaced by the account name.
pub const DEFAULT_ENDPOINT: &str = "https://{account}.app.invoicexpress.com/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("invoicexpress-rs/", env!("CARGO_PKG_VERSION"));

pub const ENV_ACCOUNT_NAME: &str = "INVOICEXPRESS_ACCOUNT_NAME";
pub const ENV_API_KEY: &str = "INVOICEXPRESS_API_KEY";
pub const ENV_ENDPOINT: &str = "INVOICEXPRESS_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "INVOICEXPRESS_TIMEOUT_SECS";

/// Connection settings for one InvoiceXpress account.
///
/// Read-only once the client is built.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Account (sub-domain) name.
    pub account_name: String,
    /// API key, sent as the `api_key` query parameter.
    pub api_key: String,
    /// Endpoint template containing `{account}`, or a fixed base URL.
    pub endpoint: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

// Hand-written so the api key never ends up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("account_name", &self.account_name)
            .field("api_key", &"***")
            .field("endpoint", &self.endpoint)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn new(account_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `INVOICEXPRESS_ACCOUNT_NAME` and `INVOICEXPRESS_API_KEY` are required;
    /// `INVOICEXPRESS_ENDPOINT` and `INVOICEXPRESS_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| InvoicexpressError::Config(format!("{key} is not set")))
        };

        let mut config = Self::new(required(ENV_ACCOUNT_NAME)?, required(ENV_API_KEY)?);

        if let Some(v) = lookup(ENV_ENDPOINT) {
            config.endpoint = v;
        }
        if let Some(v) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = v.trim().parse().map_err(|e| {
                InvoicexpressError::Config(format!("{ENV_TIMEOUT_SECS} '{v}': {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Render the endpoint template into a base URL ending in `/`.
    pub fn base_url(&self) -> Result<String> {
        if self.account_name.trim().is_empty() {
            return Err(InvoicexpressError::Config("account name is empty".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(InvoicexpressError::Config("api key is empty".into()));
        }

        let mut url = self.endpoint.replace("{account}", &self.account_name);
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(InvoicexpressError::Config(format!(
                "endpoint '{url}' is not an http(s) URL"
            )));
        }
        if !url.ends_with('/') {
            url.push('/');
        }
        Ok(url)
    }
}
