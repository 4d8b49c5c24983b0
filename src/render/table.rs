use std::fmt::Write;

use crate::bitcoin::models::{BlockDetails, BlockSummary};
use crate::constants::render::UNDEFINED_VALUE;
use crate::dashboard::BlocksTable;
use crate::series::DailyRow;

/// Left-aligned text table with a header rule
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row; missing cells render empty and extra cells are dropped
    pub fn push_row(&mut self, cells: Vec<String>) {
        let mut cells = cells;
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let _ = writeln!(out, "{}", line(&self.headers));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let _ = writeln!(out, "{}", line(&rule));
        for row in &self.rows {
            let _ = writeln!(out, "{}", line(row));
        }
        out
    }
}

/// Formats a float for display, trimming trailing zeros
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return UNDEFINED_VALUE.to_string();
    }
    let text = format!("{value:.8}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Blocks mined on the selected date
pub fn blocks_table(table: &BlocksTable) -> String {
    let mut out = format!("Blocks mined on {}\n", table.date);
    if table.blocks.is_empty() {
        out.push_str("No blocks found\n");
        return out;
    }

    let mut text = TextTable::new([
        "Height",
        "Time",
        "Hash",
        "Transactions",
        "Size",
        "Weight",
        "Difficulty",
    ]);
    for block in &table.blocks {
        text.push_row(vec![
            block.height.to_string(),
            block.timestamp.clone(),
            block.block_hash.clone(),
            block.transaction_count.to_string(),
            block.block_size.to_string(),
            block.weight.to_string(),
            format_value(block.difficulty),
        ]);
    }
    out.push_str(&text.render());
    out
}

/// The explorer's latest blocks
pub fn latest_blocks(blocks: &[BlockSummary]) -> String {
    let mut out = String::from("Latest blocks\n");
    if blocks.is_empty() {
        out.push_str("No blocks found\n");
        return out;
    }

    let mut text = TextTable::new(["Height", "Date", "Hash", "Transactions", "Size"]);
    for block in blocks {
        text.push_row(vec![
            block.height.to_string(),
            block.timestamp.clone(),
            block.block_hash.clone(),
            block.transaction_count.to_string(),
            block.block_size.to_string(),
        ]);
    }
    out.push_str(&text.render());
    out
}

/// Header of one block followed by its transactions
pub fn block_details(details: &BlockDetails) -> String {
    let block = &details.block;
    let mut out = String::new();
    let _ = writeln!(out, "Block {}", block.height);
    let _ = writeln!(out, "  Hash:         {}", block.block_hash);
    let _ = writeln!(out, "  Time:         {}", block.timestamp);
    let _ = writeln!(out, "  Size:         {}", block.block_size);
    let _ = writeln!(out, "  Transactions: {}", block.transaction_count);

    if details.transactions.is_empty() {
        out.push_str("No transactions\n");
        return out;
    }

    let mut text = TextTable::new([
        "Index", "Hash", "Fee", "Size", "VSize", "Weight", "Locktime", "Mined",
    ]);
    for tx in &details.transactions {
        text.push_row(vec![
            tx.index.to_string(),
            tx.hash.clone(),
            format_value(tx.fee_value),
            tx.size.to_string(),
            format_value(tx.vsize),
            tx.weight.to_string(),
            tx.locktime.to_string(),
            format_value(tx.mined_value),
        ]);
    }
    out.push_str(&text.render());
    out
}

/// Date-joined statistics; a date missing from one side shows `-` there
pub fn daily_rows(rows: &[DailyRow]) -> String {
    let mut text = TextTable::new([
        "Date",
        "Transactions",
        "Blocks",
        "Total Fee",
        "Average Fee",
        "Mined",
        "Mined/Block",
        "Miners",
        "Output",
    ]);

    let missing = || "-".to_string();
    for row in rows {
        let tx = row.transactions.as_ref();
        let outputs = row.outputs.as_ref();
        text.push_row(vec![
            row.date.clone(),
            tx.map_or_else(missing, |t| t.transaction_count.to_string()),
            tx.map_or_else(missing, |t| t.distinct_block_count.to_string()),
            tx.map_or_else(missing, |t| format_value(t.total_fee_value)),
            tx.map_or_else(missing, |t| format_value(t.average_fee_value)),
            tx.map_or_else(missing, |t| format_value(t.total_mined_value)),
            row.avg_mined_value_by_block().map_or_else(missing, format_value),
            outputs.map_or_else(missing, |o| o.distinct_miner_count.to_string()),
            outputs.map_or_else(missing, |o| format_value(o.total_output_value)),
        ]);
    }
    text.render()
}
