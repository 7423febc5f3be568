use std::num::NonZeroUsize;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::ledgerlink::tools::error::{Result, ToolError};

/// Base URL of the production API.
pub const PRODUCTION_ENDPOINT: &str = "https://quickbooks.api.intuit.com";
/// Base URL of the sandbox API.
pub const SANDBOX_ENDPOINT: &str = "https://sandbox-quickbooks.api.intuit.com";
/// API minor version sent with every request.
pub const DEFAULT_MINOR_VERSION: &str = "65";
/// Largest page the query endpoint hands out.
pub const DEFAULT_PAGE_SIZE: usize = 1000;
/// Seconds before an HTTP request is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Number of records requested per page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Validates a raw page size.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(PageSize)
            .ok_or(ToolError::InvalidPageSize)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(NonZeroUsize::MIN.saturating_add(DEFAULT_PAGE_SIZE - 1))
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = usize::deserialize(deserializer)?;
        PageSize::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Connection settings for a single company file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL, e.g. [`PRODUCTION_ENDPOINT`].
    pub endpoint: String,
    /// Company identifier the requests are scoped to.
    pub realm_id: String,
    pub minor_version: String,
    pub page_size: PageSize,
    /// OAuth bearer token. Obtaining and refreshing it is left to the caller.
    pub access_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: PRODUCTION_ENDPOINT.to_string(),
            realm_id: String::new(),
            minor_version: DEFAULT_MINOR_VERSION.to_string(),
            page_size: PageSize::default(),
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given endpoint and company.
    pub fn new(endpoint: impl Into<String>, realm_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            realm_id: realm_id.into(),
            ..Self::default()
        }
    }

    /// Parses a TOML document. Missing keys fall back to the defaults.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Loads the configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ToolError::MissingInput(path.to_path_buf()));
        }
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        debug!(path = %path.display(), realm_id = %config.realm_id, "loaded configuration");
        Ok(config)
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Path segments every company-scoped resource lives under.
    pub fn company_segments(&self) -> Vec<String> {
        vec!["v3".to_string(), "company".to_string(), self.realm_id.clone()]
    }
}
