//! HTTP endpoint server using Axum

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config;
use crate::engine::EngineError;
use crate::metrics::Metrics;
use crate::services::entry_service::{EntryOutcome, EntryRequest, EntryService, ServiceError};
use crate::services::mexc::MexcMarketDataProvider;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub entry_service: Option<Arc<EntryService>>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "dipline-entry-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Status code for a failed recompute
pub fn error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        ServiceError::MarketData(_) => StatusCode::BAD_GATEWAY,
        ServiceError::Engine(EngineError::InvalidCandle(_)) => StatusCode::BAD_GATEWAY,
        ServiceError::Engine(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// Compute (or skip, if already done this week) the entries for a symbol
async fn compute_entries(
    State(state): State<AppState>,
    payload: Result<Json<EntryRequest>, JsonRejection>,
) -> Result<Json<EntryOutcome>, (StatusCode, Json<Value>)> {
    let service = state.entry_service.as_ref().ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "error": "entry service not configured" })),
    ))?;

    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("invalid request: {}", rejection.body_text()) })),
        )
    })?;

    service.compute(&request).await.map(Json).map_err(|e| {
        let status = error_status(&e);
        if status.is_server_error() {
            error!(symbol = %request.symbol, error = %e, "entry request failed");
        }
        (status, Json(json!({ "error": e.to_string() })))
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/entries", post(compute_entries))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Serve the API on `0.0.0.0:{port}` with MEXC market data.
///
/// No settings store is wired here, so every request runs without a user discount.
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let market_data = Arc::new(MexcMarketDataProvider::new()?);
    let entry_service = EntryService::new(market_data, None, Some(metrics.clone()));

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        entry_service: Some(Arc::new(entry_service)),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(
        port = port,
        market_data = %config::get_mexc_base_url(),
        "HTTP server listening on port {}",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
