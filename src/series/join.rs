use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::bitcoin::models::{DateAggregate, OutputAggregate};

/// One calendar date with whichever aggregates exist for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRow {
    pub date: String,
    pub transactions: Option<DateAggregate>,
    pub outputs: Option<OutputAggregate>,
}

impl DailyRow {
    /// True when one side of the join has no record for this date
    pub fn is_gap(&self) -> bool {
        self.transactions.is_none() || self.outputs.is_none()
    }

    /// Mined value per block; `None` without transactions, NaN without blocks
    pub fn avg_mined_value_by_block(&self) -> Option<f64> {
        self.transactions.as_ref().map(|t| {
            if t.distinct_block_count == 0 {
                f64::NAN
            } else {
                t.total_mined_value / t.distinct_block_count as f64
            }
        })
    }
}

/// Joins both aggregate lists on their date key, ascending by date.
///
/// A date missing from one list yields a row with `None` on that side. If a
/// list repeats a date the first record is kept.
pub fn join_by_date(
    date_aggregates: &[DateAggregate],
    output_aggregates: &[OutputAggregate],
) -> Vec<DailyRow> {
    let mut rows: BTreeMap<&str, DailyRow> = BTreeMap::new();

    for aggregate in date_aggregates {
        let row = rows.entry(aggregate.date.as_str()).or_insert_with(|| DailyRow {
            date: aggregate.date.clone(),
            transactions: None,
            outputs: None,
        });
        if row.transactions.is_some() {
            warn!("Duplicate transaction aggregate for {}, keeping the first", aggregate.date);
            continue;
        }
        row.transactions = Some(aggregate.clone());
    }

    for aggregate in output_aggregates {
        let row = rows.entry(aggregate.date.as_str()).or_insert_with(|| DailyRow {
            date: aggregate.date.clone(),
            transactions: None,
            outputs: None,
        });
        if row.outputs.is_some() {
            warn!("Duplicate output aggregate for {}, keeping the first", aggregate.date);
            continue;
        }
        row.outputs = Some(aggregate.clone());
    }

    rows.into_values().collect()
}
