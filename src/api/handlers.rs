//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Json},
};
use tracing::{debug, info};

use crate::{
    engine::{BrewOutcome, BrewRequest, CleanOutcome, CustomRecipeRequest, RefillOutcome, ResourceReport},
    state::AppState,
};
use super::{
    error::{ApiError, ApiResult},
    responses::{CleanLevelResponse, HealthResponse, RefillRequest, StatusMessage, StatusResponse},
};

/// Handle GET /auth - Token placeholder, reports the machine as online
pub async fn auth_handler() -> impl IntoResponse {
    ([(header::SET_COOKIE, "lang=en-US")], "Coffee machine is online.")
}

/// Handle POST /coffee - Brew a coffee
pub async fn coffee_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BrewRequest>, JsonRejection>,
) -> ApiResult<BrewOutcome> {
    let Json(request) = payload?;
    debug!("Brew request: {:?}", request);

    Ok(Json(state.make_coffee(&request)?))
}

/// Handle POST /recipes/custom - Register the custom recipe
pub async fn custom_recipe_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CustomRecipeRequest>, JsonRejection>,
) -> ApiResult<StatusMessage> {
    let Json(request) = payload?;
    debug!("Custom recipe request: {:?}", request);

    let status = state.register_custom_recipe(&request)?;
    info!("Custom recipe endpoint called - recipe {}", status);
    Ok(Json(StatusMessage { status }))
}

/// Handle GET /clean - Report the cleanliness band
pub async fn clean_level_handler(State(state): State<Arc<AppState>>) -> ApiResult<CleanLevelResponse> {
    let (band, level) = state.clean_level()?;
    Ok(Json(CleanLevelResponse::new(band, level)))
}

/// Handle POST /clean - Clean the machine if needed
pub async fn clean_handler(State(state): State<Arc<AppState>>) -> ApiResult<CleanOutcome> {
    Ok(Json(state.clean()?))
}

/// Handle GET /resources - Report container levels
pub async fn resources_handler(State(state): State<Arc<AppState>>) -> ApiResult<ResourceReport> {
    Ok(Json(state.resource_report()?))
}

/// Handle POST /resources/refill - Refill one container
pub async fn refill_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RefillRequest>, JsonRejection>,
) -> ApiResult<RefillOutcome> {
    let Json(request) = payload?;
    Ok(Json(state.refill(&request.resource_type)?))
}

/// Handle GET /status - Return the full machine status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, ApiError> {
    let machine = state.snapshot()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        machine,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
