#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::bitcoin::decode::{DecodeError, ResponseDecoder};

    mod blocks_tests {
        use super::*;

        #[test]
        fn test_decode_blocks_by_date() {
            let data = json!({
                "bitcoin": {
                    "blocks": [{
                        "timestamp": {"time": "2024-01-15 00:04:12"},
                        "medianTime": {"time": "2024-01-14 23:31:02"},
                        "blockHash": "00000000000000000002a7c4c1e48d76c5a37902165a270156b7a8d72728a054",
                        "blockSizeBigInt": "1645126",
                        "blockStrippedSize": 805432,
                        "blockVersion": 536870912,
                        "blockWeight": 3991422,
                        "chainwork": "000000000000000000000000000000000000000064572e2c3f2e0a3e9d1a1b9c",
                        "difficulty": 73197634206448.34,
                        "transactionCount": 3521,
                        "height": 825814
                    }]
                }
            });

            let blocks = ResponseDecoder::blocks(&data).expect("blocks should decode");
            assert_eq!(blocks.len(), 1);

            let block = &blocks[0];
            assert_eq!(block.height, 825814);
            assert_eq!(block.timestamp, "2024-01-15 00:04:12");
            assert_eq!(block.median_time.as_deref(), Some("2024-01-14 23:31:02"));
            assert_eq!(block.block_size, 1645126);
            assert_eq!(block.stripped_size, 805432);
            assert_eq!(block.version, 536870912);
            assert_eq!(block.weight, 3991422);
            assert_eq!(block.transaction_count, 3521);
            assert_eq!(block.difficulty, 73197634206448.34);
        }

        #[test]
        fn test_decode_blocks_empty_day() {
            let data = json!({"bitcoin": {"blocks": []}});
            let blocks = ResponseDecoder::blocks(&data).expect("empty list is valid");
            assert!(blocks.is_empty());
        }

        #[test]
        fn test_decode_block_summaries() {
            let data = json!({
                "bitcoin": {
                    "blocks": [
                        {
                            "height": 825900,
                            "blockHash": "aa",
                            "blockSize": 1200000,
                            "transactionCount": 2800,
                            "date": {"date": "2024-01-15"},
                            "timestamp": {"time": "2024-01-15 14:00:00"}
                        },
                        {
                            "height": 825899,
                            "blockHash": "bb",
                            "blockSize": "1100000",
                            "transactionCount": "2500",
                            "date": {"date": "2024-01-15"},
                            "timestamp": {"time": "2024-01-15 13:50:00"}
                        }
                    ]
                }
            });

            let summaries = ResponseDecoder::block_summaries(&data).unwrap();
            assert_eq!(summaries.len(), 2);
            assert_eq!(summaries[0].height, 825900);
            assert_eq!(summaries[1].block_size, 1100000);
            assert_eq!(summaries[1].transaction_count, 2500);
            assert_eq!(summaries[1].date, "2024-01-15");
        }

        #[test]
        fn test_decode_block_details() {
            let data = json!({
                "bitcoin": {
                    "blocks": [{
                        "height": 825900,
                        "blockHash": "aa",
                        "blockSize": 1200000,
                        "transactionCount": 2,
                        "date": {"date": "2024-01-15"},
                        "timestamp": {"time": "2024-01-15 14:00:00"}
                    }],
                    "transactions": [
                        {
                            "feeValue": 0.0,
                            "hash": "coinbase",
                            "index": 0,
                            "feeValueDecimal": 0.0,
                            "txLocktime": 0,
                            "txSize": 250,
                            "txVersion": 2,
                            "txVsize": 223.0,
                            "txWeight": 892,
                            "minedValue": 6.43,
                            "minedValueDecimal": 6.43
                        },
                        {
                            "feeValue": "0.00012",
                            "hash": "spend",
                            "index": "1",
                            "feeValueDecimal": 0.00012,
                            "txLocktime": 825899,
                            "txSize": 370,
                            "txVersion": 1,
                            "txVsize": 208.5,
                            "txWeight": 834,
                            "minedValue": 0,
                            "minedValueDecimal": 0
                        }
                    ]
                }
            });

            let details = ResponseDecoder::block_details(&data, 825900).unwrap();
            assert_eq!(details.block.height, 825900);
            assert_eq!(details.transactions.len(), 2);
            assert_eq!(details.transactions[0].mined_value, 6.43);
            assert_eq!(details.transactions[1].index, 1);
            assert_eq!(details.transactions[1].fee_value, 0.00012);
            assert_eq!(details.transactions[1].locktime, 825899);
        }

        #[test]
        fn test_decode_block_details_without_block() {
            let data = json!({"bitcoin": {"blocks": [], "transactions": []}});
            let result = ResponseDecoder::block_details(&data, 42);
            assert_eq!(result.unwrap_err(), DecodeError::NoBlock(42));
        }
    }

    mod stats_tests {
        use super::*;

        #[test]
        fn test_decode_daily_stats_with_string_counts() {
            let data = json!({
                "bitcoin": {
                    "transactions": [{
                        "date": {"date": "2024-01-01"},
                        "count": "100",
                        "blockCount": "5",
                        "feeValue": 2.5,
                        "avgFee": 0.025,
                        "minedValue": 50
                    }],
                    "outputs": [{
                        "date": {"date": "2024-01-01"},
                        "count": "8",
                        "value": 50.0
                    }]
                }
            });

            let stats = ResponseDecoder::daily_stats(&data).unwrap();
            assert_eq!(stats.transactions.len(), 1);
            let day = &stats.transactions[0];
            assert_eq!(day.date, "2024-01-01");
            assert_eq!(day.transaction_count, 100);
            assert_eq!(day.distinct_block_count, 5);
            assert_eq!(day.total_fee_value, 2.5);
            assert_eq!(day.average_fee_value, 0.025);
            assert_eq!(day.total_mined_value, 50.0);

            assert_eq!(stats.outputs.len(), 1);
            assert_eq!(stats.outputs[0].distinct_miner_count, 8);
            assert_eq!(stats.outputs[0].total_output_value, 50.0);
        }

        #[test]
        fn test_missing_bitcoin_root() {
            let data = json!({"ethereum": {}});
            let result = ResponseDecoder::daily_stats(&data);
            assert_eq!(
                result.unwrap_err(),
                DecodeError::MissingField("bitcoin".to_string())
            );
        }

        #[test]
        fn test_null_bitcoin_root() {
            let data = json!({"bitcoin": null});
            assert!(matches!(
                ResponseDecoder::blocks(&data),
                Err(DecodeError::MissingField(_))
            ));
        }

        #[test]
        fn test_missing_outputs_list() {
            let data = json!({"bitcoin": {"transactions": []}});
            let result = ResponseDecoder::daily_stats(&data);
            assert_eq!(
                result.unwrap_err(),
                DecodeError::MissingField("bitcoin.outputs".to_string())
            );
        }

        #[test]
        fn test_invalid_field_reports_path() {
            let data = json!({
                "bitcoin": {
                    "transactions": [
                        {
                            "date": {"date": "2024-01-01"},
                            "count": 1, "blockCount": 1, "feeValue": 0, "avgFee": 0, "minedValue": 0
                        },
                        {
                            "date": {"date": "2024-01-02"},
                            "count": "lots", "blockCount": 1, "feeValue": 0, "avgFee": 0, "minedValue": 0
                        }
                    ],
                    "outputs": []
                }
            });

            match ResponseDecoder::daily_stats(&data) {
                Err(DecodeError::InvalidField { path, message }) => {
                    assert_eq!(path, "bitcoin.transactions[1]");
                    assert!(message.contains("not an unsigned integer"));
                }
                other => panic!("Expected InvalidField, got {other:?}"),
            }
        }

        #[test]
        fn test_negative_count_is_invalid() {
            let data = json!({
                "bitcoin": {
                    "transactions": [],
                    "outputs": [{"date": {"date": "2024-01-01"}, "count": -1, "value": 0}]
                }
            });

            assert!(matches!(
                ResponseDecoder::daily_stats(&data),
                Err(DecodeError::InvalidField { .. })
            ));
        }
    }
}
