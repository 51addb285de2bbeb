use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matchday_stats::api::{build_router, state::AppState};
use matchday_stats::calculate::contributions::{valid_limit, MAX_LIMIT};
use matchday_stats::calculate::{match_report, top_contributions, TouchInferredLineup};
use matchday_stats::config::AppConfig;
use matchday_stats::models::{ClubId, ContributionScope, CountryId, MatchId};
use matchday_stats::storage::{MatchRepository, SqlStore};

#[derive(Parser)]
#[command(name = "matchday-stats")]
#[command(about = "Football match statistics derived from raw event logs")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Database URL (overrides the config file)
    #[arg(long)]
    database_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Create the database schema
    InitDb,

    /// Print the statistics view of a match as JSON
    Report {
        #[arg(long)]
        match_id: i64,
    },

    /// Print the top goal contributors of a club or a country
    Contributors {
        #[arg(long, conflicts_with = "country", required_unless_present = "country")]
        club: Option<i64>,

        #[arg(long)]
        country: Option<i64>,

        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(url) = &cli.database_url {
        config.database.url = url.clone();
    }
    if let Commands::Serve { host, port } = &cli.command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }
    config.validate()?;

    // Initialize tracing
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting matchday-stats v{}", env!("CARGO_PKG_VERSION"));

    let store = SqlStore::connect(&config.database.url, config.database.max_connections)
        .await
        .with_context(|| format!("connecting to {}", config.database.url))?;
    let lineup = TouchInferredLineup {
        lineup_name_max_len: config.display.lineup_name_max_len,
        name_max_len: config.display.name_max_len,
    };

    match cli.command {
        Commands::Serve { .. } => {
            let state = AppState {
                store: Arc::new(store),
                lineup: Arc::new(lineup),
                display: Arc::new(config.display.clone()),
            };
            let app = build_router(state, &config.server.cors_origin);
            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::InitDb => {
            store.init_schema().await?;
            println!("Schema created in {}", config.database.url);
        }
        Commands::Report { match_id } => {
            let match_id = MatchId::new(match_id);
            let Some(view) = match_report(&store, match_id, &lineup, &config.display).await? else {
                bail!("Match {} not found", match_id);
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Commands::Contributors {
            club,
            country,
            limit,
        } => {
            let scope = match (club, country) {
                (Some(club), _) => ContributionScope::Club(ClubId::new(club)),
                (None, Some(country)) => ContributionScope::Country(CountryId::new(country)),
                (None, None) => bail!("Specify --club or --country"),
            };
            let limit = limit.unwrap_or(config.display.top_contributors);
            if !valid_limit(limit) {
                bail!("--limit must be between 1 and {}", MAX_LIMIT);
            }

            let events = store.scope_events(scope).await?;
            let ranked = top_contributions(scope, events, limit);

            println!("\n=== Top contributors ({}) ===", scope);
            for (rank, c) in ranked.iter().enumerate() {
                println!(
                    "{:>3}. {:<28} {:>3} goals {:>3} assists {:>3} total",
                    rank + 1,
                    c.player_name,
                    c.goals,
                    c.assists,
                    c.total
                );
            }
        }
    }

    Ok(())
}
