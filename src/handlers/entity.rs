//! Entity CRUD handlers: list, create, read, update, delete, and rent traversal.
//! Generic over the entity; routes instantiate one set per resource.

use crate::entity::{Entity, Fields, Rent, RentOwner};
use crate::error::AppError;
use crate::service::{CrudService, Payload};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

fn not_found<E: Entity>(id: i64) -> AppError {
    AppError::NotFound { entity: E::NAME, id }
}

/// GET /{collection}
pub async fn list<E: Entity>(State(state): State<AppState>) -> Result<Json<Vec<E>>, AppError> {
    let rows = CrudService::list::<E>(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /{collection}
pub async fn create<E: Entity>(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<E>, AppError> {
    let input = <E::New as Fields>::from_payload(&Payload::from_value(body)?)?;
    let row = CrudService::create::<E>(&state.pool, input).await?;
    Ok(Json(row))
}

/// GET /{name}/:id
pub async fn read<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<E>, AppError> {
    let row = CrudService::read::<E>(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    Ok(Json(row))
}

/// PUT /{name}/:id. Merge-patch: only keys present in the body are written.
pub async fn update<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<E>, AppError> {
    let patch = <E::Patch as Fields>::from_payload(&Payload::from_value(body)?)?;
    let row = CrudService::update::<E>(&state.pool, id, patch)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    Ok(Json(row))
}

/// DELETE /{name}/:id
pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !CrudService::delete::<E>(&state.pool, id).await? {
        return Err(not_found::<E>(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /{name}/:id/rents: rents pointing at an existing owner row.
pub async fn owned_rents<E: RentOwner>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Rent>>, AppError> {
    CrudService::read::<E>(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    let rents = CrudService::list_where::<Rent>(&state.pool, E::RENT_KEY, id).await?;
    Ok(Json(rents))
}
