use crate::app::dto::*;
use crate::app::engine::ImpactEngine;
use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Clone)]
pub struct HttpState {
    pub engine: ImpactEngine,
}

#[derive(Debug, Clone, Deserialize)]
struct NeighborsQuery {
    resource: String,
}

#[derive(Debug, Clone, Serialize)]
struct ApiErrorBody {
    error: String,
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(ApiErrorBody { error: msg.into() })).into_response()
}

pub fn build_router(engine: ImpactEngine) -> Router {
    let state = Arc::new(HttpState { engine });

    Router::new()
        .route("/health", get(health))
        .route("/impact", post(impact))
        .route("/neighbors", get(neighbors))
        .route("/scene", post(scene))
        .route("/reload", post(reload))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve(engine: ImpactEngine, addr: SocketAddr) -> Result<()> {
    let app = build_router(engine);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Run a blocking engine call and map its outcome to a JSON response.
async fn run_blocking<T, F>(failure_status: StatusCode, f: F) -> Response
where
    T: Serialize + Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    match spawn_blocking(f).await {
        Ok(Ok(res)) => Json(res).into_response(),
        Ok(Err(e)) => api_error(failure_status, format!("{e:#}")),
        Err(e) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("task join error: {e}"),
        ),
    }
}

async fn health(State(state): State<Arc<HttpState>>) -> Response {
    match state.engine.health() {
        Ok(res) => Json(res).into_response(),
        Err(e) => api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

async fn reload(State(state): State<Arc<HttpState>>) -> Response {
    let engine = state.engine.clone();
    run_blocking(StatusCode::INTERNAL_SERVER_ERROR, move || engine.reload()).await
}

async fn impact(
    State(state): State<Arc<HttpState>>,
    Json(req): Json<ImpactRequest>,
) -> Response {
    let engine = state.engine.clone();
    run_blocking(StatusCode::BAD_REQUEST, move || engine.impact(req)).await
}

async fn neighbors(
    State(state): State<Arc<HttpState>>,
    Query(q): Query<NeighborsQuery>,
) -> Response {
    let engine = state.engine.clone();
    run_blocking(StatusCode::BAD_REQUEST, move || engine.neighbors(&q.resource)).await
}

async fn scene(State(state): State<Arc<HttpState>>, Json(req): Json<SceneRequest>) -> Response {
    let engine = state.engine.clone();
    run_blocking(StatusCode::BAD_REQUEST, move || engine.scene(req)).await
}
