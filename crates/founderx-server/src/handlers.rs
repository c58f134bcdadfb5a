//! HTTP/WebSocket Handlers

use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    http::StatusCode,
    response::Response,
    Json,
};
use futures::{stream::SplitSink, SinkExt, StreamExt};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use advisor_core::AiError;
use founderx_advisor::{
    analytics, startup, AdvisorError, AnalyticsReport, BusinessMetrics, Horizon,
    RecommendationSet, RiskTolerance, Sector, TrendSeries, TrendSimulator, UserProfile,
};
use tokio::sync::watch;

use crate::state::{AppState, Services};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub configured: bool,
    pub provider_connected: bool,
}

#[derive(Debug, Deserialize)]
pub struct AdviseRequest {
    pub budget: Decimal,
    pub horizon: Horizon,
    pub risk: RiskTolerance,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub sector: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<founderx_advisor::DomainRecommendation>,
    pub growth_score: u8,
    pub ideas: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// First (and any subsequent) client message on the trend socket
#[derive(Debug, Deserialize)]
pub struct TrendRequest {
    pub sector: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (configured, provider_connected) = match &state.services {
        Some(services) => (
            true,
            services.provider.health_check().await.unwrap_or(false),
        ),
        None => (false, false),
    };

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        configured,
        provider_connected,
    })
}

/// Investment advisor endpoint
pub async fn advise_handler(
    State(state): State<AppState>,
    Json(payload): Json<AdviseRequest>,
) -> Result<Json<RecommendationSet>, HandlerError> {
    let services = require_services(&state)?;

    let profile = UserProfile::new(payload.budget, payload.horizon, payload.risk);

    let set = services.investment.advise(&profile).await.map_err(|e| {
        tracing::error!("investment submission failed: {}", e);
        error_response(&e)
    })?;

    Ok(Json(set))
}

/// Startup domain recommendation endpoint
pub async fn recommend_handler(
    State(state): State<AppState>,
    Json(payload): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, HandlerError> {
    let services = require_services(&state)?;

    let sector: Sector = payload.sector.parse().map_err(|e: AdvisorError| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.user_message(),
                code: "UNKNOWN_SECTOR".into(),
            }),
        )
    })?;

    Ok(Json(RecommendResponse {
        recommendations: services.startup.recommend(sector),
        growth_score: startup::growth_score(sector),
        ideas: startup::suggest_ideas(Some(sector)),
    }))
}

/// Business analytics endpoint
///
/// Pure computation over self-reported metrics; works even while the
/// AI/market keys are missing, so it is not gated on `Services`.
pub async fn analytics_handler(Json(payload): Json<BusinessMetrics>) -> Json<AnalyticsReport> {
    Json(analytics::analyze(&payload))
}

/// WebSocket live growth trend
///
/// The client sends `{"sector": "AI"}`; the server resolves the top
/// domain, seeds the series from the AI, then streams one snapshot per
/// simulator tick. A new request tears the running simulator down before
/// seeding again; closing the socket cancels everything.
pub async fn trend_stream_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Result<Response, HandlerError> {
    let services = require_services(&state)?;
    Ok(ws.on_upgrade(move |socket| handle_trend_stream(socket, services)))
}

async fn handle_trend_stream(socket: WebSocket, services: Arc<Services>) {
    let (mut sender, mut receiver) = socket.split();
    let mut active: Option<(TrendSimulator, watch::Receiver<TrendSeries>)> = None;

    loop {
        tokio::select! {
            msg = receiver.next() => {
                let text = match msg {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::error!("trend socket error: {}", e);
                        break;
                    }
                    _ => continue,
                };

                // teardown-then-create: at most one simulator per socket,
                // and the old one must stop before the new seed begins
                if let Some((simulator, _)) = active.take() {
                    simulator.stop();
                }

                let request: TrendRequest = match serde_json::from_str(&text) {
                    Ok(r) => r,
                    Err(e) => {
                        if send_ws_error(&mut sender, &e.to_string(), "BAD_REQUEST").await.is_err() {
                            break;
                        }
                        continue;
                    }
                };

                let sector: Sector = match request.sector.parse::<Sector>() {
                    Ok(s) => s,
                    Err(e) => {
                        if send_ws_error(&mut sender, &e.user_message(), "UNKNOWN_SECTOR").await.is_err() {
                            break;
                        }
                        continue;
                    }
                };

                let Some(top) = services.startup.recommend(sector).into_iter().next() else {
                    continue;
                };

                // seed from the AI; if the client goes away mid-call the
                // stale result is discarded, never written anywhere
                let seed_fut = services.startup.seed_trend(&top.domain);
                tokio::pin!(seed_fut);
                let seed = loop {
                    tokio::select! {
                        result = &mut seed_fut => break result,
                        closed = receiver.next() => match closed {
                            Some(Ok(Message::Close(_))) | Some(Err(_)) | None => return,
                            _ => tracing::debug!("ignoring client message while seeding"),
                        },
                    }
                };

                match seed {
                    Ok(series) => {
                        let payload = serde_json::json!({
                            "type": "series",
                            "domain": top.domain,
                            "series": series,
                        });
                        if sender.send(Message::Text(payload.to_string().into())).await.is_err() {
                            break;
                        }
                        let simulator = TrendSimulator::spawn(series);
                        let rx = simulator.subscribe();
                        active = Some((simulator, rx));
                    }
                    Err(e) => {
                        tracing::error!("trend seed failed: {}", e);
                        if send_ws_error(&mut sender, &e.user_message(), "TREND_SEED_FAILED").await.is_err() {
                            break;
                        }
                    }
                }
            }

            changed = watch_tick(&mut active) => {
                match changed {
                    Ok(series) => {
                        let payload = serde_json::json!({
                            "type": "series",
                            "series": series,
                        });
                        if sender.send(Message::Text(payload.to_string().into())).await.is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        active = None;
                    }
                }
            }
        }
    }

    // dropping `active` aborts any running simulator
}

/// Wait for the next simulator tick, or forever when none is running
async fn watch_tick(
    active: &mut Option<(TrendSimulator, watch::Receiver<TrendSeries>)>,
) -> Result<TrendSeries, watch::error::RecvError> {
    match active {
        Some((_, rx)) => {
            rx.changed().await?;
            Ok(rx.borrow().clone())
        }
        None => std::future::pending().await,
    }
}

async fn send_ws_error(
    sender: &mut SplitSink<WebSocket, Message>,
    error: &str,
    code: &str,
) -> Result<(), axum::Error> {
    let payload = serde_json::json!({"type": "error", "error": error, "code": code});
    sender
        .send(Message::Text(payload.to_string().into()))
        .await
}

// ============================================================================
// Error Mapping
// ============================================================================

fn require_services(state: &AppState) -> Result<Arc<Services>, HandlerError> {
    state.services.clone().ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: state
                    .config_error
                    .clone()
                    .unwrap_or_else(|| "Server is not configured".into()),
                code: "CONFIG_MISSING".into(),
            }),
        )
    })
}

fn error_response(err: &AdvisorError) -> HandlerError {
    let (status, code) = match err {
        AdvisorError::Ai(AiError::RateLimited(_)) | AdvisorError::RateLimited(_) => {
            (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED")
        }
        AdvisorError::Ai(AiError::Api { .. }) => (StatusCode::BAD_GATEWAY, "AI_API_ERROR"),
        AdvisorError::Ai(AiError::MalformedResponse(_))
        | AdvisorError::MalformedTrend(_)
        | AdvisorError::TrendShape { .. }
        | AdvisorError::EmptyTrend => (StatusCode::BAD_GATEWAY, "AI_MALFORMED"),
        AdvisorError::Ai(AiError::Network(_)) | AdvisorError::Network(_) => {
            (StatusCode::BAD_GATEWAY, "NETWORK_ERROR")
        }
        AdvisorError::UnknownSector(_) => (StatusCode::UNPROCESSABLE_ENTITY, "UNKNOWN_SECTOR"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "ADVISOR_ERROR"),
    };

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping_statuses() {
        let (status, body) = error_response(&AdvisorError::Ai(AiError::Api {
            status: 500,
            message: String::new(),
        }));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.0.code, "AI_API_ERROR");

        let (status, _) = error_response(&AdvisorError::MalformedTrend("bad json".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _) = error_response(&AdvisorError::UnknownSector("SpaceTech".into()));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unconfigured_state_refuses_calls() {
        let state = AppState::unconfigured("missing required environment variables: GEMINI_API_KEY");
        let Err((status, body)) = require_services(&state) else {
            panic!("unconfigured state must refuse service access");
        };
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.0.code, "CONFIG_MISSING");
        assert!(body.0.error.contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_analytics_endpoint_is_not_gated_on_services() {
        let payload = r#"{
            "revenue": "5000",
            "expenses": "7500",
            "tasks_completed": 0,
            "tasks_total": 0
        }"#;
        let metrics: BusinessMetrics = serde_json::from_str(payload).unwrap();

        let Json(report) = analytics_handler(Json(metrics)).await;
        assert!(report.profitability < rust_decimal::Decimal::ZERO);
        assert_eq!(report.productivity, 0.0);
        assert_eq!(
            report.suggestion,
            "Cut costs or increase revenue to improve profitability."
        );
    }

    #[test]
    fn test_advise_request_accepts_form_labels() {
        let payload = r#"{"budget": "10000", "horizon": "6 months", "risk": "Moderate"}"#;
        let request: AdviseRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(request.horizon, Horizon::SixMonths);
        assert_eq!(request.risk, RiskTolerance::Moderate);
    }
}
