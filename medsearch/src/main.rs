use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medsearch::api::{create_router, AppState};
use medsearch::catalog::Catalog;
use medsearch::config::Config;
use medsearch::search::{DiscoveryEngineClient, SearchClient};

#[derive(Parser)]
#[command(name = "medsearch")]
#[command(about = "Ask questions about a paper corpus indexed by a managed search service")]
struct Args {
    /// Port to listen on (overrides MEDSEARCH_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the static article catalog (overrides CATALOG_PATH)
    #[arg(long)]
    catalog: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "medsearch=info,tower_http=debug".into());
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let mut config = Config::from_env();
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = args.catalog {
        config.catalog.path = path;
    }

    if !config.search.is_configured() {
        tracing::warn!(
            "PROJECT_ID or SEARCH_ENGINE_ID is not set. Answer and corpus requests will return 503."
        );
    }
    if config.search.access_token.is_none() {
        tracing::warn!("GOOGLE_ACCESS_TOKEN is not set. Requests to the search service are unauthenticated.");
    }

    tracing::info!(
        "Search target: project={} engine={} location={} serving_config={}",
        config.search.project_id,
        config.search.search_engine_id,
        config.search.location,
        config.search.serving_config_id
    );
    let client: Arc<dyn SearchClient> = Arc::new(DiscoveryEngineClient::new(&config.search)?);

    tracing::info!("Loading article catalog from {}...", config.catalog.path);
    let catalog = Catalog::load(&config.catalog.path)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, client, catalog);
    let app = create_router(state);

    tracing::info!("Medsearch starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server...");
}
