use crate::dtos::{delete_ack, document_to_json, documents_to_json, insert_ack, DeleteContactsRequest};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::{SecondsFormat, Utc};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson};
use serde_json::Value;

const ADD_FAILED: &str = "Failed to contact us:";
const SERVER_ERROR: &str = "Server error";

/// Inserts the payload with a server-stamped `timestamp` (ISO-8601 with
/// millisecond precision, `Z` suffix).
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let mut document = mongodb::bson::to_document(&payload).map_err(|e| {
        tracing::error!(error = %e, "Contact payload is not a document");
        AppError::Internal(ADD_FAILED.to_string())
    })?;
    document.insert(
        "timestamp",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    );

    let result = state
        .db
        .contacts()
        .insert_one(document, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to insert contact");
            AppError::Internal(ADD_FAILED.to_string())
        })?;

    Ok(Json(insert_ack(&result.inserted_id)))
}

/// On failure this route has never answered with a body: the error is
/// logged and the client gets an empty 500.
pub async fn list_contacts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state.db.contacts().find(None, None).await.map_err(|e| {
        tracing::error!(error = %e, "Contact fetch failed");
        AppError::Silent
    })?;

    let mut documents = Vec::new();
    while let Some(document) = cursor.try_next().await.map_err(|e| {
        tracing::error!(error = %e, "Contact fetch failed");
        AppError::Silent
    })? {
        documents.push(document);
    }

    Ok(Json(documents_to_json(documents)))
}

/// Failure body is plain text here, unlike the JSON bodies elsewhere.
/// Inconsistent, but part of the published contract.
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| AppError::InternalText(SERVER_ERROR.to_string()))?;

    let document = state
        .db
        .contacts()
        .find_one(doc! { "_id": oid }, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Contact fetch failed");
            AppError::InternalText(SERVER_ERROR.to_string())
        })?;

    Ok(Json(match document {
        Some(document) => document_to_json(document),
        None => Value::Null,
    }))
}

/// Deletes every contact whose id appears in the request, in one store
/// operation. A single malformed id fails the whole request.
pub async fn delete_contacts(
    State(state): State<AppState>,
    Json(payload): Json<DeleteContactsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let ids = payload
        .ids
        .iter()
        .map(|id| ObjectId::parse_str(id).map(Bson::ObjectId))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::error!(error = %e, "Contacts failed to delete");
            AppError::InternalText(SERVER_ERROR.to_string())
        })?;

    let result = state
        .db
        .contacts()
        .delete_many(doc! { "_id": { "$in": ids } }, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Contacts failed to delete");
            AppError::InternalText(SERVER_ERROR.to_string())
        })?;

    Ok(Json(delete_ack(result.deleted_count)))
}
