use std::fmt::Write;

use super::table::format_value;
use crate::constants::render::BAR_WIDTH;
use crate::dashboard::StatsCharts;
use crate::series::NamedSeries;

/// Horizontal bar chart of one series, bars scaled to the largest finite y.
///
/// Points are drawn in series order. Non-finite points get no bar.
pub fn bar_chart(series: &NamedSeries) -> String {
    let mut out = format!("{}\n", series.label);
    if series.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let label_width = series
        .points
        .iter()
        .map(|p| p.x.chars().count())
        .max()
        .unwrap_or(0);
    let max = series.max_y().filter(|m| *m > 0.0);
    let bar_width = BAR_WIDTH;

    for point in &series.points {
        let bar = match max {
            Some(max) if point.y.is_finite() && point.y > 0.0 => {
                let len = ((point.y / max) * BAR_WIDTH as f64).round() as usize;
                "#".repeat(len.clamp(1, BAR_WIDTH))
            }
            _ => String::new(),
        };
        let _ = writeln!(
            out,
            "  {:<label_width$}  {:<bar_width$}  {}",
            point.x,
            bar,
            format_value(point.y)
        );
    }
    out
}

/// Every chart of a statistics window
pub fn stats_charts(charts: &StatsCharts) -> String {
    let mut out = format!(
        "Statistics from {} till {}\n",
        charts.from.format("%Y-%m-%d %H:%M"),
        charts.till.format("%Y-%m-%d %H:%M")
    );
    for (_, series) in charts.series.iter() {
        out.push('\n');
        out.push_str(&bar_chart(series));
    }
    out
}
