//! Chart series built from per-day aggregates
//!
//! Each aggregate list is projected positionally: one point per record, in
//! input order, with `x` set to the record's date. Series from the same list
//! therefore share their `labels`. No sorting, de-duplication or cross-list
//! alignment happens here; see [`super::join`] for the date-keyed view.
//!
//! The average mined value per block is undefined for a day without blocks.
//! Such points carry `y = NaN` (serialized as `null`) and are reported by
//! [`SeriesSet::check_defined`].

use std::collections::BTreeMap;
use std::ops::Index;

use serde::Serialize;
use thiserror::Error;

use crate::bitcoin::models::{DateAggregate, OutputAggregate};

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("Series '{series}' is undefined at {x}: division by zero")]
    DivisionUndefined { series: String, x: String },
}

/// Logical names of the dashboard series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKey {
    Transactions,
    FeeSpent,
    AvgFee,
    MinedBlocks,
    AvgMinedValueByBlock,
    ActiveMiners,
    MinedValue,
}

impl SeriesKey {
    pub const ALL: [SeriesKey; 7] = [
        SeriesKey::Transactions,
        SeriesKey::FeeSpent,
        SeriesKey::AvgFee,
        SeriesKey::MinedBlocks,
        SeriesKey::AvgMinedValueByBlock,
        SeriesKey::ActiveMiners,
        SeriesKey::MinedValue,
    ];

    /// Key used in serialized output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::FeeSpent => "feeSpent",
            Self::AvgFee => "avgFee",
            Self::MinedBlocks => "minedBlocks",
            Self::AvgMinedValueByBlock => "avgMinedValueByBlock",
            Self::ActiveMiners => "activeMiners",
            Self::MinedValue => "minedValue",
        }
    }

    /// Label shown above the chart
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Transactions => "Transactions",
            Self::FeeSpent => "Fee Spent",
            Self::AvgFee => "Average Fee per Transaction",
            Self::MinedBlocks => "Mined Blocks",
            Self::AvgMinedValueByBlock => "Average Mined Value By Block",
            Self::ActiveMiners => "Active Miners",
            Self::MinedValue => "Mined Value",
        }
    }
}

impl std::fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: String,
    pub y: f64,
}

/// One chart: its dataset label, x-axis labels and points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub points: Vec<SeriesPoint>,
}

impl NamedSeries {
    pub fn from_points(label: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        let labels = points.iter().map(|p| p.x.clone()).collect();
        Self {
            label: label.into(),
            labels,
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// x values whose y is not a finite number
    pub fn undefined_points(&self) -> Vec<&str> {
        self.points
            .iter()
            .filter(|p| !p.y.is_finite())
            .map(|p| p.x.as_str())
            .collect()
    }

    /// Largest finite y, if any
    pub fn max_y(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.y)
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| Some(acc.map_or(y, |m: f64| m.max(y))))
    }
}

/// All dashboard series keyed by [`SeriesKey`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SeriesSet(BTreeMap<SeriesKey, NamedSeries>);

impl SeriesSet {
    pub fn get(&self, key: SeriesKey) -> Option<&NamedSeries> {
        self.0.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SeriesKey, &NamedSeries)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fails on the first point whose value is undefined
    pub fn check_defined(&self) -> Result<(), SeriesError> {
        for (key, series) in self.iter() {
            if let Some(x) = series.undefined_points().first() {
                return Err(SeriesError::DivisionUndefined {
                    series: key.name().to_string(),
                    x: x.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Index<SeriesKey> for SeriesSet {
    type Output = NamedSeries;

    fn index(&self, key: SeriesKey) -> &NamedSeries {
        &self.0[&key]
    }
}

/// `total / count`, or NaN when `count` is zero
fn per_unit(total: f64, count: u64) -> f64 {
    if count == 0 {
        f64::NAN
    } else {
        total / count as f64
    }
}

fn project<T>(records: &[T], date: impl Fn(&T) -> &str, y: impl Fn(&T) -> f64) -> Vec<SeriesPoint> {
    records
        .iter()
        .map(|r| SeriesPoint {
            x: date(r).to_string(),
            y: y(r),
        })
        .collect()
}

/// Builds the seven dashboard series.
///
/// Always returns every key, with empty series for empty inputs.
pub fn build_series(
    date_aggregates: &[DateAggregate],
    output_aggregates: &[OutputAggregate],
) -> SeriesSet {
    let by_day = |y: fn(&DateAggregate) -> f64| project(date_aggregates, |d| d.date.as_str(), y);
    let by_output =
        |y: fn(&OutputAggregate) -> f64| project(output_aggregates, |o| o.date.as_str(), y);

    let mut series = BTreeMap::new();
    for key in SeriesKey::ALL {
        let points = match key {
            SeriesKey::Transactions => by_day(|d| d.transaction_count as f64),
            SeriesKey::FeeSpent => by_day(|d| d.total_fee_value),
            SeriesKey::AvgFee => by_day(|d| d.average_fee_value),
            SeriesKey::MinedBlocks => by_day(|d| d.distinct_block_count as f64),
            SeriesKey::AvgMinedValueByBlock => {
                by_day(|d| per_unit(d.total_mined_value, d.distinct_block_count))
            }
            SeriesKey::ActiveMiners => by_output(|o| o.distinct_miner_count as f64),
            SeriesKey::MinedValue => by_output(|o| o.total_output_value),
        };
        series.insert(key, NamedSeries::from_points(key.display_label(), points));
    }

    SeriesSet(series)
}
