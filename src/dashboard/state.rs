use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::bitcoin::models::{Block, BlockDetails, BlockSummary};
use crate::series::{DailyRow, SeriesSet};

/// Independently loaded parts of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Blocks,
    Stats,
    Latest,
    Details,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Blocks,
        Section::Stats,
        Section::Latest,
        Section::Details,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::Stats => "stats",
            Self::Latest => "latest",
            Self::Details => "details",
        }
    }
}

/// Load state of one section.
///
/// `Loading` and `Failed` keep the last good value so a section never
/// blanks out because a refresh is pending or failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionState<T> {
    Empty,
    Loading { previous: Option<T> },
    Ready { value: T },
    Failed { previous: Option<T>, message: String },
}

impl<T> Default for SectionState<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> SectionState<T> {
    /// The value to display: the current one, or the last good one
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Loading { previous } | Self::Failed { previous, .. } => previous.as_ref(),
            Self::Ready { value } => Some(value),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    fn take_value(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Empty => None,
            Self::Loading { previous } | Self::Failed { previous, .. } => previous,
            Self::Ready { value } => Some(value),
        }
    }

    pub fn start_loading(&mut self) {
        let previous = self.take_value();
        *self = Self::Loading { previous };
    }

    pub fn set_ready(&mut self, value: T) {
        *self = Self::Ready { value };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        let previous = self.take_value();
        *self = Self::Failed {
            previous,
            message: message.into(),
        };
    }
}

/// Blocks mined on one date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlocksTable {
    pub date: NaiveDate,
    pub blocks: Vec<Block>,
}

/// Chart series and the date-joined table of one statistics window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsCharts {
    pub from: DateTime<Utc>,
    pub till: DateTime<Utc>,
    pub series: SeriesSet,
    pub rows: Vec<DailyRow>,
}

/// Everything the front end renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub selected_date: NaiveDate,
    pub blocks: SectionState<BlocksTable>,
    pub stats: SectionState<StatsCharts>,
    pub latest: SectionState<Vec<BlockSummary>>,
    pub expanded_block: Option<u64>,
    pub details: SectionState<BlockDetails>,
}

impl DashboardState {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            blocks: SectionState::Empty,
            stats: SectionState::Empty,
            latest: SectionState::Empty,
            expanded_block: None,
            details: SectionState::Empty,
        }
    }

    /// Details to show for the expanded block, if they belong to it
    pub fn expanded_details(&self) -> Option<&BlockDetails> {
        let height = self.expanded_block?;
        self.details
            .value()
            .filter(|details| details.block.height == height)
    }
}
