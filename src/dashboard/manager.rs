use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::sequencer::RequestSequencer;
use super::state::{BlocksTable, DashboardState, Section, SectionState, StatsCharts};
use crate::bitcoin::decode::ResponseDecoder;
use crate::config::models::DashboardConfig;
use crate::error::DashboardError;
use crate::graphql::executor::QueryExecutor;
use crate::graphql::queries::QueryRequest;
use crate::metrics::SectionMetrics;
use crate::series::{build_series, join_by_date};

/// Query parameters the dashboard needs from the configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub network: String,
    pub page_size: u32,
    pub window_days: u32,
    pub date_format: String,
    pub latest_limit: u32,
}

impl DashboardSettings {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            network: config.network.clone(),
            page_size: config.blocks.page_size,
            window_days: config.stats.window_days,
            date_format: config.stats.date_format.clone(),
            latest_limit: config.explorer.latest_limit,
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

/// Result of [`Dashboard::toggle_block`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Expanded,
    Collapsed,
}

type Slot<T> = fn(&mut DashboardState) -> &mut SectionState<T>;

#[derive(Default)]
struct Sequencers {
    blocks: RequestSequencer,
    stats: RequestSequencer,
    latest: RequestSequencer,
    details: RequestSequencer,
}

struct Shared {
    executor: Arc<dyn QueryExecutor>,
    state: RwLock<DashboardState>,
    sequencers: Sequencers,
}

impl Shared {
    fn sequencer(&self, section: Section) -> &RequestSequencer {
        match section {
            Section::Blocks => &self.sequencers.blocks,
            Section::Stats => &self.sequencers.stats,
            Section::Latest => &self.sequencers.latest,
            Section::Details => &self.sequencers.details,
        }
    }
}

/// Coordinates fetches and state for every dashboard section.
///
/// Each section has its own ticket sequence. Starting a fetch supersedes the
/// previous one for that section: the older task is aborted and, should it
/// finish anyway, its result is discarded. The final state of a section
/// therefore always reflects its most recent request.
pub struct Dashboard {
    shared: Arc<Shared>,
    settings: DashboardSettings,
    tasks: Mutex<HashMap<Section, JoinHandle<()>>>,
}

impl Dashboard {
    pub fn new(executor: Arc<dyn QueryExecutor>, settings: DashboardSettings) -> Self {
        Self::with_date(executor, settings, Utc::now().date_naive())
    }

    /// Creates a dashboard whose blocks table starts at `selected_date`
    pub fn with_date(
        executor: Arc<dyn QueryExecutor>,
        settings: DashboardSettings,
        selected_date: NaiveDate,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                executor,
                state: RwLock::new(DashboardState::new(selected_date)),
                sequencers: Sequencers::default(),
            }),
            settings,
            tasks: Mutex::new(HashMap::new()),
        }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Loads the blocks table, the statistics charts and the explorer list
    pub async fn load(&self) {
        let date = self.shared.state.read().await.selected_date;
        info!("Loading dashboard for {}", date);

        self.select_date(date).await;
        self.refresh_stats_trailing(Utc::now()).await;
        self.refresh_latest().await;
    }

    /// Shows the blocks mined on `date`
    pub async fn select_date(&self, date: NaiveDate) {
        self.shared.state.write().await.selected_date = date;

        let request = QueryRequest::BlocksByDate {
            network: self.settings.network.clone(),
            date,
            limit: self.settings.page_size,
            offset: crate::constants::query::BLOCKS_PAGE_OFFSET,
        };

        self.spawn_fetch(
            Section::Blocks,
            request,
            move |data| {
                Ok(BlocksTable {
                    date,
                    blocks: ResponseDecoder::blocks(data)?,
                })
            },
            |state| &mut state.blocks,
        )
        .await;
    }

    /// Refreshes the charts for the configured window ending at `till`
    pub async fn refresh_stats_trailing(&self, till: DateTime<Utc>) {
        let from = till - chrono::Duration::days(i64::from(self.settings.window_days));
        self.refresh_stats(from, till).await;
    }

    /// Refreshes the charts for `from..till`
    pub async fn refresh_stats(&self, from: DateTime<Utc>, till: DateTime<Utc>) {
        let request = QueryRequest::DailyStats {
            network: self.settings.network.clone(),
            from,
            till,
            date_format: self.settings.date_format.clone(),
        };

        self.spawn_fetch(
            Section::Stats,
            request,
            move |data| {
                let stats = ResponseDecoder::daily_stats(data)?;
                let series = build_series(&stats.transactions, &stats.outputs);

                for (key, named) in series.iter() {
                    SectionMetrics::set_undefined_points(key.name(), named.undefined_points().len());
                }
                if let Err(e) = series.check_defined() {
                    warn!("{}", DashboardError::from(e));
                }

                Ok(StatsCharts {
                    from,
                    till,
                    rows: join_by_date(&stats.transactions, &stats.outputs),
                    series,
                })
            },
            |state| &mut state.stats,
        )
        .await;
    }

    /// Refreshes the explorer's list of latest blocks
    pub async fn refresh_latest(&self) {
        let request = QueryRequest::LatestBlocks {
            network: self.settings.network.clone(),
            limit: self.settings.latest_limit,
        };

        self.spawn_fetch(
            Section::Latest,
            request,
            |data| Ok(ResponseDecoder::block_summaries(data)?),
            |state| &mut state.latest,
        )
        .await;
    }

    /// Expands the block at `height` and fetches its details, or collapses
    /// it when it is already expanded
    pub async fn toggle_block(&self, height: u64) -> Toggle {
        {
            let mut state = self.shared.state.write().await;
            if state.expanded_block == Some(height) {
                state.expanded_block = None;
                state.details = SectionState::Empty;
                self.shared.sequencer(Section::Details).invalidate();
                self.abort(Section::Details);
                debug!("Collapsed block {}", height);
                return Toggle::Collapsed;
            }

            state.expanded_block = Some(height);
            state.details = SectionState::Empty;
        }

        let request = QueryRequest::BlockByHeight {
            network: self.settings.network.clone(),
            height,
        };

        self.spawn_fetch(
            Section::Details,
            request,
            move |data| Ok(ResponseDecoder::block_details(data, height)?),
            |state| &mut state.details,
        )
        .await;

        debug!("Expanded block {}", height);
        Toggle::Expanded
    }

    /// A copy of the current state
    pub async fn snapshot(&self) -> DashboardState {
        self.shared.state.read().await.clone()
    }

    /// Waits until no fetch is in flight
    pub async fn settle(&self) {
        loop {
            let handles: Vec<JoinHandle<()>> = match self.tasks.lock() {
                Ok(mut tasks) => tasks.drain().map(|(_, handle)| handle).collect(),
                Err(_) => return,
            };
            if handles.is_empty() {
                return;
            }
            for handle in handles {
                if let Err(e) = handle.await {
                    if !e.is_cancelled() {
                        error!("Dashboard fetch task failed: {}", e);
                    }
                }
            }
        }
    }

    /// Aborts every in-flight fetch; their results will not be applied
    pub fn shutdown(&self) {
        for section in Section::ALL {
            self.shared.sequencer(section).invalidate();
        }
        if let Ok(mut tasks) = self.tasks.lock() {
            for (_, handle) in tasks.drain() {
                handle.abort();
            }
        }
        debug!("Dashboard fetches cancelled");
    }

    fn abort(&self, section: Section) {
        if let Ok(mut tasks) = self.tasks.lock() {
            if let Some(handle) = tasks.remove(&section) {
                handle.abort();
            }
        }
    }

    async fn spawn_fetch<T, D>(&self, section: Section, request: QueryRequest, decode: D, slot: Slot<T>)
    where
        T: Send + Sync + 'static,
        D: FnOnce(&Value) -> Result<T, DashboardError> + Send + 'static,
    {
        let ticket = {
            let mut state = self.shared.state.write().await;
            slot(&mut state).start_loading();
            self.shared.sequencer(section).issue()
        };

        debug!(
            "Fetching {} for section {} (ticket {})",
            request.name(),
            section.name(),
            ticket.value()
        );

        let shared = self.shared.clone();
        let handle = tokio::spawn(async move {
            let result = shared
                .executor
                .execute(&request)
                .await
                .map_err(DashboardError::from)
                .and_then(|data| decode(&data));

            let mut state = shared.state.write().await;
            if !shared.sequencer(section).is_current(ticket) {
                debug!(
                    "Discarding stale {} response for section {} (ticket {})",
                    request.name(),
                    section.name(),
                    ticket.value()
                );
                SectionMetrics::record_stale(section.name());
                return;
            }

            match result {
                Ok(value) => {
                    slot(&mut state).set_ready(value);
                    SectionMetrics::record_applied(section.name());
                    info!("Section {} updated", section.name());
                }
                Err(e) => {
                    error!("Section {} failed: {}", section.name(), e);
                    SectionMetrics::record_failed(section.name(), e.kind());
                    slot(&mut state).fail(e.to_string());
                }
            }
        });

        if let Ok(mut tasks) = self.tasks.lock() {
            if let Some(previous) = tasks.insert(section, handle) {
                previous.abort();
            }
        }
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            for (_, handle) in tasks.drain() {
                handle.abort();
            }
        }
    }
}
