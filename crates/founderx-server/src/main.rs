//! FounderX HTTP Server
//!
//! Axum-based server behind the FounderX founder dashboard: investment
//! recommendations, startup-domain recommendations, and a WebSocket
//! growth-trend stream.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_core::LlmProvider;
use advisor_runtime::{GeminiConfig, GeminiProvider};
use founderx_advisor::{AlphaVantageClient, InvestmentAdvisor, MarketDataService, StartupAdvisor};

use crate::config::Config;
use crate::handlers::{
    advise_handler, analytics_handler, health_check, recommend_handler, trend_stream_handler,
};
use crate::state::{AppState, Services};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Resolve configuration. Missing keys put the server into a
    // configuration-error state rather than aborting startup.
    let (state, bind_addr) = match Config::from_env() {
        Ok(config) => {
            let mut gemini = GeminiConfig::new(config.gemini_api_key.clone());
            if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
                gemini.base_url = base_url;
            }
            let provider: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::from_config(gemini)?);

            match provider.health_check().await {
                Ok(true) => tracing::info!("✓ Connected to {}", provider.name()),
                Ok(false) | Err(_) => {
                    tracing::warn!("⚠ {} not reachable - advisory calls will fail", provider.name());
                }
            }

            let market = MarketDataService::new(Arc::new(AlphaVantageClient::new(
                config.alpha_vantage_api_key.clone(),
            )));

            let services = Services {
                provider: provider.clone(),
                investment: InvestmentAdvisor::new(
                    provider.clone(),
                    market,
                    config.model.clone(),
                ),
                startup: StartupAdvisor::new(provider, config.model.clone()),
            };

            tracing::info!("✓ Advisory services configured (model: {})", config.model);
            (AppState::configured(Arc::new(services)), config.bind_addr)
        }
        Err(missing) => {
            tracing::error!("⚠ {}", missing);
            tracing::error!("  Advisory endpoints will answer 503 until keys are set in .env");
            let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
            (AppState::unconfigured(missing.to_string()), bind_addr)
        }
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health & info
        .route("/health", get(health_check))

        // Advisory API
        .route("/api/investment/advise", post(advise_handler))
        .route("/api/startup/recommend", post(recommend_handler))
        .route("/api/startup/trend", get(trend_stream_handler))
        .route("/api/analytics", post(analytics_handler))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 FounderX server running on http://{}", bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                - Health check");
    tracing::info!("  POST /api/investment/advise - Investment recommendations");
    tracing::info!("  POST /api/startup/recommend - Startup domain recommendations");
    tracing::info!("  GET  /api/startup/trend     - WebSocket growth trend");
    tracing::info!("  POST /api/analytics         - Business metrics analysis");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
