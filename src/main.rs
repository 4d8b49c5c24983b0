use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing::level_filters::LevelFilter;

use blockdash::cli::{Cli, Commands};
use blockdash::config;
use blockdash::constants::query::MAX_STATS_WINDOW_DAYS;
use blockdash::dashboard::{Dashboard, DashboardSettings, DashboardState, SectionState};
use blockdash::graphql::GraphqlExecutor;
use blockdash::{metrics, render};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so rendered output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Dashboard);

    let config = config::load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    info!(
        "Using {} on network {}",
        config.api.endpoint, config.network
    );

    let mut settings = DashboardSettings::from_config(&config);
    if let Commands::Stats { days: Some(days) } = command {
        if days == 0 || days > MAX_STATS_WINDOW_DAYS {
            bail!("--days must be between 1 and {}", MAX_STATS_WINDOW_DAYS);
        }
        settings.window_days = days;
    }

    let executor = GraphqlExecutor::new(&config.api).context("Failed to create GraphQL client")?;
    let dashboard = Dashboard::new(Arc::new(executor), settings);

    match command {
        Commands::Blocks { date } => {
            dashboard
                .select_date(date.unwrap_or_else(|| Utc::now().date_naive()))
                .await;
        }
        Commands::Stats { .. } => dashboard.refresh_stats_trailing(Utc::now()).await,
        Commands::Explore { expand } => {
            dashboard.refresh_latest().await;
            if let Some(height) = expand {
                dashboard.toggle_block(height).await;
            }
        }
        Commands::Dashboard => dashboard.load().await,
    }

    dashboard.settle().await;
    let state = dashboard.snapshot().await;
    dashboard.shutdown();

    let output = if cli.json {
        json_view(&command, &state)?
    } else {
        text_view(&command, &state)
    };
    println!("{}", output);

    if cli.metrics {
        println!("{}", metrics::gather_text().context("Failed to encode metrics")?);
    }

    let failures = failed_sections(&command, &state);
    if !failures.is_empty() {
        bail!("Failed to load: {}", failures.join(", "));
    }

    Ok(())
}

fn text_view(command: &Commands, state: &DashboardState) -> String {
    match command {
        Commands::Blocks { .. } => render::section("blocks", &state.blocks, render::blocks_table),
        Commands::Stats { .. } => render::section("stats", &state.stats, |charts| {
            format!(
                "{}\n{}",
                render::stats_charts(charts),
                render::daily_rows(&charts.rows)
            )
        }),
        Commands::Explore { .. } => {
            let mut out = render::section("latest", &state.latest, |b| render::latest_blocks(b));
            if let Some(height) = state.expanded_block {
                out.push('\n');
                out.push_str(&render::section(
                    &format!("block {height}"),
                    &state.details,
                    render::block_details,
                ));
            }
            out
        }
        Commands::Dashboard => render::dashboard(state),
    }
}

fn json_view(command: &Commands, state: &DashboardState) -> Result<String> {
    fn pretty<T: Serialize>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).context("Failed to serialize output")
    }

    match command {
        Commands::Blocks { .. } => pretty(&state.blocks),
        Commands::Stats { .. } => pretty(&state.stats),
        Commands::Explore { .. } => pretty(&serde_json::json!({
            "latest": state.latest,
            "expanded_block": state.expanded_block,
            "details": state.details,
        })),
        Commands::Dashboard => pretty(state),
    }
}

fn failed_sections(command: &Commands, state: &DashboardState) -> Vec<&'static str> {
    fn failed<T>(name: &'static str, section: &SectionState<T>) -> Option<&'static str> {
        section.error().map(|_| name)
    }

    let checks = match command {
        Commands::Blocks { .. } => vec![failed("blocks", &state.blocks)],
        Commands::Stats { .. } => vec![failed("stats", &state.stats)],
        Commands::Explore { .. } => vec![
            failed("latest", &state.latest),
            failed("details", &state.details),
        ],
        Commands::Dashboard => vec![
            failed("blocks", &state.blocks),
            failed("stats", &state.stats),
            failed("latest", &state.latest),
        ],
    };
    checks.into_iter().flatten().collect()
}
