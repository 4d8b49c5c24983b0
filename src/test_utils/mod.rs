//! Test utilities for the blockdash codebase
//!
//! Factories for upstream records and payloads, plus a scripted executor
//! standing in for the GraphQL endpoint.

pub mod factories;
pub mod mocks;

pub use factories::*;
pub use mocks::*;
