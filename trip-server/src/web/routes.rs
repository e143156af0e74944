//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::domain::{DomainError, TripQuery};
use crate::planner::PlanError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trip/plan", post(plan_trip))
        .route("/trip/preview", get(preview))
        .route("/strategy", get(get_strategy).put(set_strategy))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a trip end to end.
async fn plan_trip(
    State(state): State<AppState>,
    Json(req): Json<PlanTripRequest>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let query = TripQuery::new(
        req.origin,
        req.destination,
        req.depart_date,
        req.return_date,
        req.passengers,
    )
    .map_err(AppError::from)?;

    let mut planner = state.planner.lock().await;
    let itinerary = planner.plan_trip(&query)?;

    Ok(Json(ItineraryResponse::from_itinerary(
        &itinerary,
        planner.last_score(),
        planner.active_strategy_name(),
    )))
}

/// Rebuild the itinerary from the latest search results, without
/// re-querying the catalog.
async fn preview(State(state): State<AppState>) -> Result<Json<ItineraryResponse>, AppError> {
    let mut planner = state.planner.lock().await;
    let itinerary = planner.preview()?;

    Ok(Json(ItineraryResponse::from_itinerary(
        &itinerary,
        planner.last_score(),
        planner.active_strategy_name(),
    )))
}

/// Report the active strategy and everything registered.
async fn get_strategy(State(state): State<AppState>) -> Json<StrategyResponse> {
    let planner = state.planner.lock().await;

    Json(StrategyResponse {
        active: planner.active_strategy_name().to_string(),
        available: planner
            .strategy_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// Switch the active ranking strategy.
async fn set_strategy(
    State(state): State<AppState>,
    Json(req): Json<SetStrategyRequest>,
) -> Result<Json<StrategyResponse>, AppError> {
    let mut planner = state.planner.lock().await;
    planner.set_ranking_strategy(&req.strategy)?;

    Ok(Json(StrategyResponse {
        active: planner.active_strategy_name().to_string(),
        available: planner
            .strategy_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        let message = e.to_string();
        match e {
            PlanError::UnknownStrategy(_) => AppError::BadRequest { message },
            PlanError::NoViableCombination { .. } => AppError::NotFound { message },
            PlanError::PlanNotYetExecuted => AppError::Conflict { message },
            PlanError::Search(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
