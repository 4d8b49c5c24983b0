use lazy_static::lazy_static;
use prometheus::{register_counter_vec, register_gauge_vec, CounterVec, GaugeVec};

lazy_static! {
    /// Section update outcomes (applied, stale, failed)
    static ref SECTION_UPDATES: CounterVec = register_counter_vec!(
        "blockdash_section_updates_total",
        "Dashboard section fetch outcomes",
        &["section", "outcome"]
    ).expect("Failed to create section_updates metric");

    /// Failed section updates by error kind
    static ref SECTION_ERRORS: CounterVec = register_counter_vec!(
        "blockdash_section_errors_total",
        "Dashboard section failures by error kind",
        &["section", "error_type"]
    ).expect("Failed to create section_errors metric");

    /// Undefined points in the latest chart set
    static ref UNDEFINED_POINTS: GaugeVec = register_gauge_vec!(
        "blockdash_series_undefined_points",
        "Number of non-finite points in the latest chart series",
        &["series"]
    ).expect("Failed to create series_undefined_points metric");
}

/// Dashboard section metrics collector
pub struct SectionMetrics;

impl SectionMetrics {
    pub fn record_applied(section: &str) {
        SECTION_UPDATES.with_label_values(&[section, "applied"]).inc();
    }

    pub fn record_stale(section: &str) {
        SECTION_UPDATES.with_label_values(&[section, "stale"]).inc();
    }

    pub fn record_failed(section: &str, error_type: &str) {
        SECTION_UPDATES.with_label_values(&[section, "failed"]).inc();
        SECTION_ERRORS
            .with_label_values(&[section, error_type])
            .inc();
    }

    pub fn set_undefined_points(series: &str, count: usize) {
        UNDEFINED_POINTS
            .with_label_values(&[series])
            .set(count as f64);
    }
}
