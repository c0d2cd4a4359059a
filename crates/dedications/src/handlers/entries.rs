//! Entry CRUD handlers.
//!
//! Thin adapters: extract, call [`EntryService`](crate::service::EntryService),
//! wrap the result in the response envelope.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use dedications_core::entry::{CreateEntryRequest, ListEntriesQuery, UpdateEntryRequest};

use crate::{
    handlers::error::invalid_json_response,
    service::{parse_entry_id, ServiceError},
    state::AppState,
};

/// Decode a JSON request body.
///
/// The content type is not checked, and an empty body reads as `{}`.
fn parse_body<T>(body: &Bytes) -> Result<T, Response>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(invalid_json_response)
}

/// List entries (GET /api/entries?status=...).
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<ListEntriesQuery>,
) -> Result<Json<Value>, ServiceError> {
    let entries = state.entries.list(&query).await?;
    tracing::debug!(count = entries.len(), status = ?query.status, "Listed entries");
    Ok(Json(json!({ "entries": entries })))
}

/// Get a single entry by ID (GET /api/entries/{id}).
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServiceError> {
    let id = parse_entry_id(&id)?;
    let entry = state.entries.get(id).await?;
    Ok(Json(json!({ "entry": entry })))
}

/// Create a new entry (POST /api/entries).
pub async fn create_entry(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), Response> {
    let request: CreateEntryRequest = parse_body(&body)?;

    let entry = state
        .entries
        .create(request)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok((StatusCode::CREATED, Json(json!({ "entry": entry }))))
}

/// Update status and/or assigned date (PATCH /api/entries/{id}).
///
/// The entry must exist before the body is even looked at.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, Response> {
    let id = parse_entry_id(&id).map_err(IntoResponse::into_response)?;
    state
        .entries
        .get(id)
        .await
        .map_err(IntoResponse::into_response)?;

    let request: UpdateEntryRequest = parse_body(&body)?;

    let entry = state
        .entries
        .update(id, request)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(Json(json!({ "entry": entry })))
}

/// Delete an entry (DELETE /api/entries/{id}).
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServiceError> {
    let id = parse_entry_id(&id)?;
    state.entries.delete(id).await?;
    Ok(Json(json!({ "message": "Entry deleted successfully" })))
}
