//! Plain-text views of the dashboard sections

pub mod chart;
pub mod table;

pub use chart::{bar_chart, stats_charts};
pub use table::{block_details, blocks_table, daily_rows, format_value, latest_blocks, TextTable};

use crate::dashboard::{DashboardState, SectionState};

/// Renders a section with its load status.
///
/// A failed or loading section still shows the last good value under a
/// status line.
pub fn section<T>(title: &str, state: &SectionState<T>, view: impl Fn(&T) -> String) -> String {
    let status = match state {
        SectionState::Empty => Some(format!("[{title}] not loaded\n")),
        SectionState::Loading { .. } => Some(format!("[{title}] loading...\n")),
        SectionState::Ready { .. } => None,
        SectionState::Failed { message, .. } => Some(format!("[{title}] failed: {message}\n")),
    };

    let mut out = status.unwrap_or_default();
    if let Some(value) = state.value() {
        out.push_str(&view(value));
    }
    out
}

/// Every section of the dashboard, top to bottom
pub fn dashboard(state: &DashboardState) -> String {
    let mut parts = vec![
        section("blocks", &state.blocks, blocks_table),
        section("stats", &state.stats, |charts| {
            format!("{}\n{}", stats_charts(charts), daily_rows(&charts.rows))
        }),
        section("latest", &state.latest, |blocks| latest_blocks(blocks)),
    ];

    if let Some(height) = state.expanded_block {
        match state.expanded_details() {
            Some(details) => parts.push(block_details(details)),
            None => parts.push(section(&format!("block {height}"), &state.details, block_details)),
        }
    }

    parts.join("\n")
}
