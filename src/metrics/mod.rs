pub mod query_metrics;
pub mod section_metrics;

pub use query_metrics::QueryMetrics;
pub use section_metrics::SectionMetrics;

use prometheus::{Encoder, TextEncoder};

/// Renders every registered metric in the Prometheus text format
pub fn gather_text() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
