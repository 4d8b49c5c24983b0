//! Builder patterns for configuration objects
//!
//! Used to assemble configurations programmatically, mostly from tests and
//! from CLI overrides.

use super::models::*;

/// Builder for creating DashboardConfig objects with a fluent API
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    config: DashboardConfig,
}

impl DashboardConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the GraphQL endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.api.endpoint = endpoint.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api = self.config.api.with_api_key(key);
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api.timeout_secs = secs;
        self
    }

    /// Set the network identifier
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.config.network = network.into();
        self
    }

    /// Set the blocks table page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.config.blocks.page_size = page_size;
        self
    }

    /// Set the statistics window
    pub fn with_window_days(mut self, days: u32) -> Self {
        self.config.stats.window_days = days;
        self
    }

    /// Set the number of blocks listed by the explorer
    pub fn with_latest_limit(mut self, limit: u32) -> Self {
        self.config.explorer.latest_limit = limit;
        self
    }

    /// Build the configuration
    pub fn build(self) -> DashboardConfig {
        self.config
    }
}
