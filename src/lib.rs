//! Bitcoin block and mining statistics dashboard.
//!
//! Queries the Bitquery GraphQL API for the blocks mined on a date, per-day
//! transaction and output aggregates, and the latest blocks. Each dashboard
//! section loads independently and only applies its most recent response.

pub mod bitcoin;
pub mod cli;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod graphql;
pub mod metrics;
pub mod render;
pub mod series;

#[cfg(test)]
pub mod test_utils;

pub use error::DashboardError;
