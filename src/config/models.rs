use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::{api, query};

/// Networks accepted by the upstream `BitcoinNetwork!` enum
pub const SUPPORTED_NETWORKS: &[&str] = &[
    "bitcoin",
    "bitcash",
    "bitcoinsv",
    "litecoin",
    "dash",
    "dogecoin",
    "zcash",
];

/// The main configuration structure for blockdash
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    /// Upstream API access
    #[serde(default)]
    #[validate]
    pub api: ApiConfig,

    /// Network identifier sent with every query (default: "bitcoin")
    #[serde(default = "default_network")]
    #[validate(custom = "validate_network")]
    pub network: String,

    /// Blocks-per-day table
    #[serde(default)]
    #[validate]
    pub blocks: BlocksConfig,

    /// Statistics charts
    #[serde(default)]
    #[validate]
    pub stats: StatsConfig,

    /// Block explorer
    #[serde(default)]
    #[validate]
    pub explorer: ExplorerConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            network: default_network(),
            blocks: BlocksConfig::default(),
            stats: StatsConfig::default(),
            explorer: ExplorerConfig::default(),
        }
    }
}

/// Upstream GraphQL API configuration
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ApiConfig {
    /// GraphQL endpoint URL
    #[serde(default = "default_endpoint")]
    #[validate(url)]
    pub endpoint: String,

    /// Environment variable holding the API key (default: "BITQUERY_API_KEY")
    #[serde(default = "default_api_key_env")]
    #[validate(length(min = 1))]
    pub api_key_env: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,

    /// API key, resolved from `api_key_env` after parsing
    #[serde(skip)]
    pub api_key: Option<SecretString>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

/// Blocks-per-day table configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlocksConfig {
    /// Rows per page (default: 10)
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: u32,
}

impl Default for BlocksConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Statistics chart configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StatsConfig {
    /// Trailing window in days (default: 7)
    #[serde(default = "default_window_days")]
    #[validate(range(min = 1, max = 365))]
    pub window_days: u32,

    /// Format of the per-day date keys (default: "%Y-%m-%d")
    #[serde(default = "default_date_format")]
    #[validate(length(min = 1))]
    pub date_format: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            date_format: default_date_format(),
        }
    }
}

/// Block explorer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExplorerConfig {
    /// Number of latest blocks listed (default: 10)
    #[serde(default = "default_latest_limit")]
    #[validate(range(min = 1, max = 100))]
    pub latest_limit: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            latest_limit: default_latest_limit(),
        }
    }
}

fn default_network() -> String {
    query::DEFAULT_NETWORK.to_string()
}

fn default_endpoint() -> String {
    api::DEFAULT_ENDPOINT.to_string()
}

fn default_api_key_env() -> String {
    api::DEFAULT_API_KEY_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    api::HTTP_REQUEST_TIMEOUT_SECS
}

fn default_page_size() -> u32 {
    query::BLOCKS_PAGE_SIZE
}

fn default_window_days() -> u32 {
    query::STATS_WINDOW_DAYS
}

fn default_date_format() -> String {
    query::STATS_DATE_FORMAT.to_string()
}

fn default_latest_limit() -> u32 {
    query::LATEST_BLOCKS_LIMIT
}

fn validate_network(network: &str) -> Result<(), ValidationError> {
    if SUPPORTED_NETWORKS.contains(&network) {
        Ok(())
    } else {
        Err(ValidationError::new("network must be a supported BitcoinNetwork identifier"))
    }
}
