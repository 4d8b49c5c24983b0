pub mod decode;
pub mod models;
#[cfg(test)]
mod tests;

pub use decode::{DecodeError, ResponseDecoder};
pub use models::{
    Block, BlockDetails, BlockSummary, BlockTransaction, DailyStats, DateAggregate,
    OutputAggregate,
};
