use thiserror::Error;

use crate::bitcoin::decode::DecodeError;
use crate::config::parser::ConfigError;
use crate::graphql::executor::FetchError;
use crate::series::builder::SeriesError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Fetch failed: {0}")]
    FetchFailed(#[from] FetchError),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] DecodeError),

    #[error("{0}")]
    Series(#[from] SeriesError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DashboardError {
    /// Short label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FetchFailed(_) => "fetch_failed",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Series(SeriesError::DivisionUndefined { .. }) => "division_undefined",
            Self::Config(_) => "config",
        }
    }
}
