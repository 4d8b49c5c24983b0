pub mod manager;
pub mod sequencer;
pub mod state;

pub use manager::{Dashboard, DashboardSettings, Toggle};
pub use sequencer::{RequestSequencer, Ticket};
pub use state::{BlocksTable, DashboardState, Section, SectionState, StatsCharts};
