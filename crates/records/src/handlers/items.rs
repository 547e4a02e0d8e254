//! Item handlers.
//!
//! Each handler makes exactly one repository call.

use axum::{
    extract::{Path, State},
    Json,
};

use stash_core::record::{
    created_message, key_to_string, updated_message, validate_new_record, Record,
};

use crate::{
    handlers::{extract::JsonBody, AppError},
    models::MessageResponse,
    state::AppState,
};

/// Create or replace an item (POST /items).
///
/// The body must contain `id` and `value`. Any existing item with the same
/// `id` is overwritten.
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(item): JsonBody<Record>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(attributes = item.len(), "Received create item request");

    let key = key_to_string(validate_new_record(&item)?);

    state.record_repo.put_record(&item).await?;

    tracing::info!(item_id = %key, "Created item");
    Ok(Json(MessageResponse::new(created_message(&key))))
}

/// Overwrite attributes of an item (PUT /items/{item_id}).
///
/// Every attribute in the body replaces the stored one; others are kept.
/// There is no existence check, so a missing item is created.
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    JsonBody(attributes): JsonBody<Record>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(%item_id, attributes = attributes.len(), "Received update item request");

    state.record_repo.update_record(&item_id, &attributes).await?;

    tracing::info!(%item_id, "Updated item");
    Ok(Json(MessageResponse::new(updated_message(&item_id))))
}

/// Get an item by its id (GET /items/{item_id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<Record>, AppError> {
    state
        .record_repo
        .get_record(&item_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))
}
