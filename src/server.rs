use crate::chart::ChartPayload;
use crate::config::AppConfig;
use crate::controller::SelectionController;
use crate::render::build_map;
use crate::types::{Dataset, Selection};
use anyhow::{Context, Result};
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{info, warn};

pub struct AppState {
    pub map: ChartPayload,
    pub controller: SelectionController,
}

impl AppState {
    pub fn new(config: &AppConfig, dataset: Dataset) -> Self {
        let dataset = Arc::new(dataset);
        Self {
            map: build_map(&config.chart, &dataset),
            controller: SelectionController::new(dataset, config.chart.clone()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    countries: Selection,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CountryOption {
    label: String,
    value: String,
}

pub fn build_router(config: &AppConfig, state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/api/map", get(map_handler))
        .route("/api/countries", get(countries_handler))
        .route("/api/selection", post(selection_handler))
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(config: AppConfig, dataset: Dataset) -> Result<()> {
    if dataset.is_empty() {
        warn!("No countries with migration data; charts will be empty");
    }
    info!("Building map for {} countries...", dataset.len());
    let state = Arc::new(AppState::new(&config, dataset));

    let addr = config.bind_addr();
    let app = build_router(&config, state);

    let listener = tokio::net::TcpListener::bind(&addr).await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn map_handler(State(state): State<Arc<AppState>>) -> Json<ChartPayload> {
    Json(state.map.clone())
}

async fn countries_handler(State(state): State<Arc<AppState>>) -> Json<Vec<CountryOption>> {
    let options = state.controller.dataset().records().iter()
        .map(|r| CountryOption { label: r.country.clone(), value: r.country.clone() })
        .collect();
    Json(options)
}

async fn selection_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectionRequest>,
) -> Json<ChartPayload> {
    Json(state.controller.on_selection_change(&request.countries))
}
