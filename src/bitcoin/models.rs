use serde::{Deserialize, Serialize};

/// A row of the blocks-per-day table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub height: u64,
    pub block_hash: String,
    /// Block time, formatted as `%Y-%m-%d %H:%M:%S`
    pub timestamp: String,
    pub median_time: Option<String>,
    /// Block size in bytes
    pub block_size: u64,
    /// Size without witness data in bytes
    pub stripped_size: u64,
    pub version: i64,
    pub weight: u64,
    pub chainwork: String,
    pub difficulty: f64,
    pub transaction_count: u64,
}

/// A block as listed by the explorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub height: u64,
    pub block_hash: String,
    pub block_size: u64,
    pub transaction_count: u64,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub timestamp: String,
}

/// A transaction of an expanded block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTransaction {
    pub index: u64,
    pub hash: String,
    pub fee_value: f64,
    pub fee_value_decimal: f64,
    pub locktime: u64,
    pub size: u64,
    pub version: i64,
    pub vsize: f64,
    pub weight: u64,
    pub mined_value: f64,
    pub mined_value_decimal: f64,
}

/// Header and transactions of one block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDetails {
    pub block: BlockSummary,
    pub transactions: Vec<BlockTransaction>,
}

/// Per-day transaction statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateAggregate {
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub transaction_count: u64,
    pub distinct_block_count: u64,
    pub total_fee_value: f64,
    pub average_fee_value: f64,
    pub total_mined_value: f64,
}

/// Per-day mining output statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputAggregate {
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub distinct_miner_count: u64,
    pub total_output_value: f64,
}

/// Both aggregate lists of one statistics fetch, ascending by date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub transactions: Vec<DateAggregate>,
    pub outputs: Vec<OutputAggregate>,
}
