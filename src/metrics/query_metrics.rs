use lazy_static::lazy_static;
use prometheus::{register_counter_vec, register_histogram_vec, CounterVec, HistogramVec};
use std::time::Duration;
use tracing::{debug, warn};

lazy_static! {
    /// Upstream query count by query name and outcome
    static ref QUERY_COUNT: CounterVec = register_counter_vec!(
        "blockdash_upstream_queries_total",
        "Total number of GraphQL queries sent upstream",
        &["query", "status"]
    ).expect("Failed to create upstream_queries metric");

    /// Upstream query duration histogram
    static ref QUERY_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "blockdash_upstream_query_duration_seconds",
        "GraphQL query duration in seconds",
        &["query", "status"],
        // Buckets: 50ms to 30s
        vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    ).expect("Failed to create upstream_query_duration metric");

    /// Failed queries by error kind
    static ref QUERY_ERROR_COUNT: CounterVec = register_counter_vec!(
        "blockdash_upstream_query_errors_total",
        "Total number of failed GraphQL queries by error kind",
        &["query", "error_type"]
    ).expect("Failed to create upstream_query_errors metric");
}

/// Upstream query metrics collector
pub struct QueryMetrics;

impl QueryMetrics {
    /// Record a query that returned a data payload
    pub fn record_success(query: &str, duration: Duration) {
        QUERY_COUNT.with_label_values(&[query, "success"]).inc();
        QUERY_DURATION_SECONDS
            .with_label_values(&[query, "success"])
            .observe(duration.as_secs_f64());

        debug!("Query {} succeeded in {:.3}s", query, duration.as_secs_f64());
    }

    /// Record a query that failed
    pub fn record_failure(query: &str, error_type: &str, duration: Duration) {
        QUERY_COUNT.with_label_values(&[query, "error"]).inc();
        QUERY_DURATION_SECONDS
            .with_label_values(&[query, "error"])
            .observe(duration.as_secs_f64());
        QUERY_ERROR_COUNT
            .with_label_values(&[query, error_type])
            .inc();

        warn!(
            "Query {} failed with {} after {:.3}s",
            query,
            error_type,
            duration.as_secs_f64()
        );
    }
}
