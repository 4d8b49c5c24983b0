//! Application-wide constants
//!
//! Default values for the upstream API and the dashboard sections, kept in
//! one place so configuration defaults and query builders agree.

/// Upstream API constants
pub mod api {
    /// Bitquery GraphQL endpoint
    pub const DEFAULT_ENDPOINT: &str = "https://graphql.bitquery.io/";

    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "x-api-key";

    /// Environment variable the API key is read from by default
    pub const DEFAULT_API_KEY_ENV: &str = "BITQUERY_API_KEY";

    /// Default HTTP request timeout (in seconds)
    pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Upper bound accepted for the request timeout (in seconds)
    pub const MAX_HTTP_REQUEST_TIMEOUT_SECS: u64 = 300;
}

/// Query-related constants
pub mod query {
    /// Network identifier passed to the `BitcoinNetwork!` variable
    pub const DEFAULT_NETWORK: &str = "bitcoin";

    /// Page size of the blocks-by-date table
    pub const BLOCKS_PAGE_SIZE: u32 = 10;

    /// Offset of the blocks-by-date table
    pub const BLOCKS_PAGE_OFFSET: u32 = 0;

    /// Number of blocks listed by the explorer
    pub const LATEST_BLOCKS_LIMIT: u32 = 10;

    /// Trailing window of the statistics charts (in days)
    pub const STATS_WINDOW_DAYS: u32 = 7;

    /// Date format requested for per-day aggregates
    pub const STATS_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Timestamp format requested for block times
    pub const BLOCK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Largest page size the dashboard will ask for
    pub const MAX_PAGE_SIZE: u32 = 100;

    /// Longest statistics window the dashboard will ask for (in days)
    pub const MAX_STATS_WINDOW_DAYS: u32 = 365;
}

/// Rendering constants
pub mod render {
    /// Width of the longest bar in a text bar chart
    pub const BAR_WIDTH: usize = 40;

    /// Placeholder shown for non-finite values
    pub const UNDEFINED_VALUE: &str = "n/a";
}
