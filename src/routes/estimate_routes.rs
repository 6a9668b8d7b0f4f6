use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::EstimatesController;
use crate::models::Estimate;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_estimate_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_estimate))
        .route("/:id", get(get_estimate))
        .route("/:id", put(update_estimate))
}

async fn create_estimate(
    State(state): State<AppState>,
    Json(estimate): Json<Estimate>,
) -> Result<impl IntoResponse, AppError> {
    let controller = EstimatesController::new(state.store.clone());
    let created = controller.create(estimate).await?;

    // 201 con header Location apuntando al get-by-id
    let location = format!("/estimates/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

async fn get_estimate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Estimate>, AppError> {
    let controller = EstimatesController::new(state.store.clone());
    let estimate = controller.get_by_id(id).await?;
    Ok(Json(estimate))
}

async fn update_estimate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(estimate): Json<Estimate>,
) -> Result<Json<Estimate>, AppError> {
    let controller = EstimatesController::new(state.store.clone());
    let updated = controller.update(id, estimate).await?;
    Ok(Json(updated))
}
