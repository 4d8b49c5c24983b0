pub mod builder;
pub mod join;

pub use builder::{build_series, NamedSeries, SeriesError, SeriesKey, SeriesPoint, SeriesSet};
pub use join::{join_by_date, DailyRow};
