//! Query documents for the Bitquery API
//!
//! Every dashboard action maps onto one [`QueryRequest`] variant. The query
//! text is static per variant and all parameters travel as GraphQL variables.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::constants::query;

/// Blocks of one calendar date, ascending by height
const BLOCKS_BY_DATE: &str = r#"query($network: BitcoinNetwork!, $date: ISO8601DateTime!, $limit: Int!, $offset: Int!, $timeFormat: String!) {
  bitcoin(network: $network) {
    blocks(
      options: { asc: ["height"], limit: $limit, offset: $offset }
      date: { is: $date }
    ) {
      timestamp {
        time(format: $timeFormat)
      }
      medianTime {
        time(format: $timeFormat)
      }
      blockHash
      blockSizeBigInt
      blockStrippedSize
      blockVersion
      blockWeight
      chainwork
      difficulty
      transactionCount
      height
    }
  }
}"#;

/// Most recent blocks, descending by height
const LATEST_BLOCKS: &str = r#"query($network: BitcoinNetwork!, $limit: Int!) {
  bitcoin(network: $network) {
    blocks(options: { desc: "height", limit: $limit }) {
      height
      blockHash
      blockSize
      transactionCount
      date {
        date
      }
      timestamp {
        time
      }
    }
  }
}"#;

/// One block header plus its transactions
const BLOCK_BY_HEIGHT: &str = r#"query($network: BitcoinNetwork!, $height: Int!) {
  bitcoin(network: $network) {
    blocks(options: { limit: 1 }, height: { is: $height }) {
      height
      blockHash
      blockSize
      transactionCount
      date {
        date
      }
      timestamp {
        time
      }
    }
    transactions(height: { is: $height }, options: { asc: "index" }) {
      feeValue
      hash
      index
      feeValueDecimal
      txLocktime
      txSize
      txVersion
      txVsize
      txWeight
      minedValue
      minedValueDecimal
    }
  }
}"#;

/// Per-day transaction and mining-output aggregates
const DAILY_STATS: &str = r#"query($network: BitcoinNetwork!, $dateFormat: String!, $from: ISO8601DateTime, $till: ISO8601DateTime) {
  bitcoin(network: $network) {
    transactions(options: { asc: "date.date" }, date: { since: $from, till: $till }) {
      date: date {
        date(format: $dateFormat)
      }
      count: countBigInt
      blockCount: countBigInt(uniq: blocks)
      feeValue
      avgFee: feeValue(calculate: average)
      minedValue
    }
    outputs(
      options: { asc: "date.date" }
      date: { since: $from, till: $till }
      txIndex: { is: 0 }
      outputDirection: { is: mining }
      outputScriptType: { notIn: ["nulldata", "nonstandard"] }
    ) {
      date: date {
        date(format: $dateFormat)
      }
      count: countBigInt(uniq: addresses)
      value
    }
  }
}"#;

/// A parameterized request against the upstream API
#[derive(Debug, Clone, PartialEq)]
pub enum QueryRequest {
    /// Blocks mined on `date`
    BlocksByDate {
        network: String,
        date: NaiveDate,
        limit: u32,
        offset: u32,
    },
    /// The `limit` most recent blocks
    LatestBlocks { network: String, limit: u32 },
    /// Header and transactions of the block at `height`
    BlockByHeight { network: String, height: u64 },
    /// Per-day aggregates between `from` and `till`
    DailyStats {
        network: String,
        from: DateTime<Utc>,
        till: DateTime<Utc>,
        date_format: String,
    },
}

impl QueryRequest {
    /// Blocks-by-date request with the default page
    pub fn blocks_by_date(network: impl Into<String>, date: NaiveDate) -> Self {
        Self::BlocksByDate {
            network: network.into(),
            date,
            limit: query::BLOCKS_PAGE_SIZE,
            offset: query::BLOCKS_PAGE_OFFSET,
        }
    }

    /// Daily statistics over the `days` days ending at `till`
    pub fn trailing_stats(network: impl Into<String>, till: DateTime<Utc>, days: u32) -> Self {
        Self::DailyStats {
            network: network.into(),
            from: till - chrono::Duration::days(i64::from(days)),
            till,
            date_format: query::STATS_DATE_FORMAT.to_string(),
        }
    }

    /// Short name used in logs and metric labels
    pub fn name(&self) -> &'static str {
        match self {
            Self::BlocksByDate { .. } => "blocks_by_date",
            Self::LatestBlocks { .. } => "latest_blocks",
            Self::BlockByHeight { .. } => "block_by_height",
            Self::DailyStats { .. } => "daily_stats",
        }
    }

    /// The query document
    pub fn document(&self) -> &'static str {
        match self {
            Self::BlocksByDate { .. } => BLOCKS_BY_DATE,
            Self::LatestBlocks { .. } => LATEST_BLOCKS,
            Self::BlockByHeight { .. } => BLOCK_BY_HEIGHT,
            Self::DailyStats { .. } => DAILY_STATS,
        }
    }

    /// The variables object matching [`Self::document`]
    pub fn variables(&self) -> Value {
        match self {
            Self::BlocksByDate {
                network,
                date,
                limit,
                offset,
            } => json!({
                "network": network,
                "date": date.format("%Y-%m-%d").to_string(),
                "limit": limit,
                "offset": offset,
                "timeFormat": query::BLOCK_TIME_FORMAT,
            }),
            Self::LatestBlocks { network, limit } => json!({
                "network": network,
                "limit": limit,
            }),
            Self::BlockByHeight { network, height } => json!({
                "network": network,
                "height": height,
            }),
            Self::DailyStats {
                network,
                from,
                till,
                date_format,
            } => json!({
                "network": network,
                "from": from.to_rfc3339_opts(SecondsFormat::Millis, true),
                "till": till.to_rfc3339_opts(SecondsFormat::Millis, true),
                "dateFormat": date_format,
            }),
        }
    }

    /// The JSON request body
    pub fn body(&self) -> Value {
        json!({
            "query": self.document(),
            "variables": self.variables(),
        })
    }
}
