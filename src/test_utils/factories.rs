//! Test data factories for upstream records and payloads

use serde_json::{json, Value};

use crate::bitcoin::models::{DailyStats, DateAggregate, OutputAggregate};

/// Create a per-day transaction aggregate
pub fn date_aggregate(
    date: &str,
    transaction_count: u64,
    distinct_block_count: u64,
    total_fee_value: f64,
    average_fee_value: f64,
    total_mined_value: f64,
) -> DateAggregate {
    DateAggregate {
        date: date.to_string(),
        transaction_count,
        distinct_block_count,
        total_fee_value,
        average_fee_value,
        total_mined_value,
    }
}

/// Create a per-day mining output aggregate
pub fn output_aggregate(date: &str, distinct_miner_count: u64, total_output_value: f64) -> OutputAggregate {
    OutputAggregate {
        date: date.to_string(),
        distinct_miner_count,
        total_output_value,
    }
}

/// Seven aligned days, 2024-01-01 through 2024-01-07, all with blocks
pub fn week_of_stats() -> DailyStats {
    let transactions = (1..=7)
        .map(|day| {
            let blocks = 140 + day;
            date_aggregate(
                &format!("2024-01-{day:02}"),
                400_000 + day * 1_000,
                blocks,
                20.0 + day as f64,
                0.00005 * day as f64,
                blocks as f64 * 6.25,
            )
        })
        .collect();

    let outputs = (1..=7)
        .map(|day| output_aggregate(&format!("2024-01-{day:02}"), 20 + day, (140 + day) as f64 * 6.25))
        .collect();

    DailyStats {
        transactions,
        outputs,
    }
}

/// `data` payload of a blocks-by-date response with one block per height
pub fn blocks_payload(date: &str, heights: &[u64]) -> Value {
    let blocks: Vec<Value> = heights
        .iter()
        .map(|height| {
            json!({
                "timestamp": {"time": format!("{date} 00:00:00")},
                "medianTime": {"time": format!("{date} 00:00:00")},
                "blockHash": format!("hash-{height}"),
                "blockSizeBigInt": "1500000",
                "blockStrippedSize": 800000,
                "blockVersion": 536870912,
                "blockWeight": 3990000,
                "chainwork": "00ff",
                "difficulty": 1.5,
                "transactionCount": 3000,
                "height": height
            })
        })
        .collect();

    json!({"bitcoin": {"blocks": blocks}})
}

/// `data` payload of a latest-blocks response
pub fn latest_blocks_payload(heights: &[u64]) -> Value {
    let blocks: Vec<Value> = heights
        .iter()
        .map(|height| {
            json!({
                "height": height,
                "blockHash": format!("hash-{height}"),
                "blockSize": 1500000,
                "transactionCount": 3000,
                "date": {"date": "2024-01-15"},
                "timestamp": {"time": "2024-01-15 12:00:00"}
            })
        })
        .collect();

    json!({"bitcoin": {"blocks": blocks}})
}

/// `data` payload of a block-by-height response with `tx_count` transactions
pub fn block_details_payload(height: u64, tx_count: u64) -> Value {
    let transactions: Vec<Value> = (0..tx_count)
        .map(|index| {
            json!({
                "feeValue": if index == 0 { 0.0 } else { 0.0001 },
                "hash": format!("tx-{height}-{index}"),
                "index": index,
                "feeValueDecimal": if index == 0 { 0.0 } else { 0.0001 },
                "txLocktime": 0,
                "txSize": 250,
                "txVersion": 2,
                "txVsize": 141.25,
                "txWeight": 565,
                "minedValue": if index == 0 { 6.25 } else { 0.0 },
                "minedValueDecimal": if index == 0 { 6.25 } else { 0.0 }
            })
        })
        .collect();

    json!({
        "bitcoin": {
            "blocks": [{
                "height": height,
                "blockHash": format!("hash-{height}"),
                "blockSize": 1500000,
                "transactionCount": tx_count,
                "date": {"date": "2024-01-15"},
                "timestamp": {"time": "2024-01-15 12:00:00"}
            }],
            "transactions": transactions
        }
    })
}

/// `data` payload of a daily-stats response
pub fn daily_stats_payload(stats: &DailyStats) -> Value {
    let transactions: Vec<Value> = stats
        .transactions
        .iter()
        .map(|d| {
            json!({
                "date": {"date": d.date},
                "count": d.transaction_count.to_string(),
                "blockCount": d.distinct_block_count.to_string(),
                "feeValue": d.total_fee_value,
                "avgFee": d.average_fee_value,
                "minedValue": d.total_mined_value
            })
        })
        .collect();

    let outputs: Vec<Value> = stats
        .outputs
        .iter()
        .map(|o| {
            json!({
                "date": {"date": o.date},
                "count": o.distinct_miner_count.to_string(),
                "value": o.total_output_value
            })
        })
        .collect();

    json!({"bitcoin": {"transactions": transactions, "outputs": outputs}})
}
