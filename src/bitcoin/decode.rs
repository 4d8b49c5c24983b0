//! Decoding of upstream `data` payloads into typed records
//!
//! The upstream service delivers `countBigInt`, `*BigInt` and some float
//! fields as numeric strings, so every numeric field accepts either a JSON
//! number or a string holding one.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::models::{
    Block, BlockDetails, BlockSummary, BlockTransaction, DailyStats, DateAggregate,
    OutputAggregate,
};

/// Errors for payloads that do not have the expected shape
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("Response is missing field '{0}'")]
    MissingField(String),

    #[error("Field '{path}' is malformed: {message}")]
    InvalidField { path: String, message: String },

    #[error("No block found at height {0}")]
    NoBlock(u64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flex {
    Number(serde_json::Number),
    Text(String),
}

fn flex_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Flex::deserialize(deserializer)? {
        Flex::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("{n} is out of range"))),
        Flex::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("'{s}' is not a number"))),
    }
}

fn flex_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match Flex::deserialize(deserializer)? {
        Flex::Number(n) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("{n} is not an unsigned integer"))),
        Flex::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| de::Error::custom(format!("'{s}' is not an unsigned integer"))),
    }
}

fn flex_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match Flex::deserialize(deserializer)? {
        Flex::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom(format!("{n} is not an integer"))),
        Flex::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("'{s}' is not an integer"))),
    }
}

fn flex_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Flex::deserialize(deserializer)? {
        Flex::Number(n) => Ok(n.to_string()),
        Flex::Text(s) => Ok(s),
    }
}

#[derive(Deserialize)]
struct DateField {
    date: String,
}

#[derive(Deserialize)]
struct TimeField {
    time: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    timestamp: TimeField,
    #[serde(default)]
    median_time: Option<TimeField>,
    block_hash: String,
    #[serde(deserialize_with = "flex_u64")]
    block_size_big_int: u64,
    #[serde(deserialize_with = "flex_u64")]
    block_stripped_size: u64,
    #[serde(deserialize_with = "flex_i64")]
    block_version: i64,
    #[serde(deserialize_with = "flex_u64")]
    block_weight: u64,
    #[serde(deserialize_with = "flex_string")]
    chainwork: String,
    #[serde(deserialize_with = "flex_f64")]
    difficulty: f64,
    #[serde(deserialize_with = "flex_u64")]
    transaction_count: u64,
    #[serde(deserialize_with = "flex_u64")]
    height: u64,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        Self {
            height: raw.height,
            block_hash: raw.block_hash,
            timestamp: raw.timestamp.time,
            median_time: raw.median_time.map(|t| t.time),
            block_size: raw.block_size_big_int,
            stripped_size: raw.block_stripped_size,
            version: raw.block_version,
            weight: raw.block_weight,
            chainwork: raw.chainwork,
            difficulty: raw.difficulty,
            transaction_count: raw.transaction_count,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlockSummary {
    #[serde(deserialize_with = "flex_u64")]
    height: u64,
    block_hash: String,
    #[serde(deserialize_with = "flex_u64")]
    block_size: u64,
    #[serde(deserialize_with = "flex_u64")]
    transaction_count: u64,
    date: DateField,
    timestamp: TimeField,
}

impl From<RawBlockSummary> for BlockSummary {
    fn from(raw: RawBlockSummary) -> Self {
        Self {
            height: raw.height,
            block_hash: raw.block_hash,
            block_size: raw.block_size,
            transaction_count: raw.transaction_count,
            date: raw.date.date,
            timestamp: raw.timestamp.time,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    #[serde(deserialize_with = "flex_f64")]
    fee_value: f64,
    hash: String,
    #[serde(deserialize_with = "flex_u64")]
    index: u64,
    #[serde(deserialize_with = "flex_f64")]
    fee_value_decimal: f64,
    #[serde(deserialize_with = "flex_u64")]
    tx_locktime: u64,
    #[serde(deserialize_with = "flex_u64")]
    tx_size: u64,
    #[serde(deserialize_with = "flex_i64")]
    tx_version: i64,
    #[serde(deserialize_with = "flex_f64")]
    tx_vsize: f64,
    #[serde(deserialize_with = "flex_u64")]
    tx_weight: u64,
    #[serde(deserialize_with = "flex_f64")]
    mined_value: f64,
    #[serde(deserialize_with = "flex_f64")]
    mined_value_decimal: f64,
}

impl From<RawTransaction> for BlockTransaction {
    fn from(raw: RawTransaction) -> Self {
        Self {
            index: raw.index,
            hash: raw.hash,
            fee_value: raw.fee_value,
            fee_value_decimal: raw.fee_value_decimal,
            locktime: raw.tx_locktime,
            size: raw.tx_size,
            version: raw.tx_version,
            vsize: raw.tx_vsize,
            weight: raw.tx_weight,
            mined_value: raw.mined_value,
            mined_value_decimal: raw.mined_value_decimal,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDateAggregate {
    date: DateField,
    #[serde(deserialize_with = "flex_u64")]
    count: u64,
    #[serde(deserialize_with = "flex_u64")]
    block_count: u64,
    #[serde(deserialize_with = "flex_f64")]
    fee_value: f64,
    #[serde(deserialize_with = "flex_f64")]
    avg_fee: f64,
    #[serde(deserialize_with = "flex_f64")]
    mined_value: f64,
}

impl From<RawDateAggregate> for DateAggregate {
    fn from(raw: RawDateAggregate) -> Self {
        Self {
            date: raw.date.date,
            transaction_count: raw.count,
            distinct_block_count: raw.block_count,
            total_fee_value: raw.fee_value,
            average_fee_value: raw.avg_fee,
            total_mined_value: raw.mined_value,
        }
    }
}

#[derive(Deserialize)]
struct RawOutputAggregate {
    date: DateField,
    #[serde(deserialize_with = "flex_u64")]
    count: u64,
    #[serde(deserialize_with = "flex_f64")]
    value: f64,
}

impl From<RawOutputAggregate> for OutputAggregate {
    fn from(raw: RawOutputAggregate) -> Self {
        Self {
            date: raw.date.date,
            distinct_miner_count: raw.count,
            total_output_value: raw.value,
        }
    }
}

/// Decodes the `data` payloads of the four query shapes
pub struct ResponseDecoder;

impl ResponseDecoder {
    /// Rows of the blocks-by-date query
    pub fn blocks(data: &Value) -> Result<Vec<Block>, DecodeError> {
        let root = Self::bitcoin_root(data)?;
        Self::list::<RawBlock, Block>(root, "blocks")
    }

    /// Rows of the latest-blocks query
    pub fn block_summaries(data: &Value) -> Result<Vec<BlockSummary>, DecodeError> {
        let root = Self::bitcoin_root(data)?;
        Self::list::<RawBlockSummary, BlockSummary>(root, "blocks")
    }

    /// Header and transactions of the block-by-height query
    pub fn block_details(data: &Value, height: u64) -> Result<BlockDetails, DecodeError> {
        let root = Self::bitcoin_root(data)?;
        let block = Self::list::<RawBlockSummary, BlockSummary>(root, "blocks")?
            .into_iter()
            .next()
            .ok_or(DecodeError::NoBlock(height))?;
        let transactions = Self::list::<RawTransaction, BlockTransaction>(root, "transactions")?;

        debug!(
            "Decoded block {} with {} transactions",
            block.height,
            transactions.len()
        );

        Ok(BlockDetails {
            block,
            transactions,
        })
    }

    /// Both aggregate lists of the daily-stats query
    pub fn daily_stats(data: &Value) -> Result<DailyStats, DecodeError> {
        let root = Self::bitcoin_root(data)?;
        let transactions = Self::list::<RawDateAggregate, DateAggregate>(root, "transactions")?;
        let outputs = Self::list::<RawOutputAggregate, OutputAggregate>(root, "outputs")?;

        debug!(
            "Decoded {} transaction aggregates and {} output aggregates",
            transactions.len(),
            outputs.len()
        );

        Ok(DailyStats {
            transactions,
            outputs,
        })
    }

    fn bitcoin_root(data: &Value) -> Result<&Value, DecodeError> {
        match data.get("bitcoin") {
            Some(root) if root.is_object() => Ok(root),
            _ => Err(DecodeError::MissingField("bitcoin".to_string())),
        }
    }

    fn list<R, T>(root: &Value, field: &str) -> Result<Vec<T>, DecodeError>
    where
        R: DeserializeOwned + Into<T>,
    {
        let items = root
            .get(field)
            .and_then(Value::as_array)
            .ok_or_else(|| DecodeError::MissingField(format!("bitcoin.{field}")))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                R::deserialize(item)
                    .map(Into::into)
                    .map_err(|e| DecodeError::InvalidField {
                        path: format!("bitcoin.{field}[{index}]"),
                        message: e.to_string(),
                    })
            })
            .collect()
    }
}
