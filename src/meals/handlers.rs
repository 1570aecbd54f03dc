use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderName, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{auth::AuthUser, error::ApiError, state::AppState};

use super::dto::{
    CreateMealRequest, CreatedMealResponse, ListQuery, MealListResponse, MealResponse,
    SummaryResponse, UpdateMealRequest,
};
use super::services::summary_for;
use super::validate::{validate_create, validate_update};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(create_meal))
        .route("/meals/summary", get(get_summary))
        .route("/meals/:id", get(get_meal).put(update_meal).delete(delete_meal))
}

#[instrument(skip(state, query))]
pub async fn list_meals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<MealListResponse>, ApiError> {
    let Query(q) = query.map_err(|e| {
        warn!(error = %e, "malformed query");
        ApiError::Validation(vec![e.body_text()])
    })?;
    let meals = state.store.list(user_id, q.order).await?;
    Ok(Json(MealListResponse { meals }))
}

#[instrument(skip(state, id))]
pub async fn get_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MealResponse>, ApiError> {
    let id = meal_id(id)?;
    let meal = state.store.get(user_id, id).await?;
    Ok(Json(MealResponse { meal }))
}

#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = summary_for(state.store.as_ref(), user_id).await?;
    Ok(Json(summary.into()))
}

#[instrument(skip(state, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<CreateMealRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<CreatedMealResponse>), ApiError> {
    let Json(body) = payload.map_err(bad_body)?;
    let meal = validate_create(body).into_result().map_err(|reasons| {
        warn!(?reasons, "create rejected");
        ApiError::Validation(reasons)
    })?;

    let id = state.store.create(user_id, meal).await?;
    info!(%user_id, meal_id = %id, "meal created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/meals/{id}"))],
        Json(CreatedMealResponse { id }),
    ))
}

#[instrument(skip(state, id, payload))]
pub async fn update_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateMealRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = meal_id(id)?;
    let Json(body) = payload.map_err(bad_body)?;
    let patch = validate_update(body).into_result().map_err(|reasons| {
        warn!(?reasons, "update rejected");
        ApiError::Validation(reasons)
    })?;

    state.store.update(user_id, id, patch).await?;
    info!(%user_id, meal_id = %id, "meal updated");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, id))]
pub async fn delete_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = meal_id(id)?;
    state.store.delete(user_id, id).await?;
    info!(%user_id, meal_id = %id, "meal deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn meal_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::Validation(vec![format!("id: {}", e.body_text())]))
}

fn bad_body(e: JsonRejection) -> ApiError {
    warn!(error = %e, "malformed body");
    ApiError::Validation(vec![e.body_text()])
}
