use crate::dtos::{document_to_json, documents_to_json, insert_ack};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde_json::Value;

const ADD_FAILED: &str = "Failed to add property. Please try again.";
const LIST_FAILED: &str = "Failed to get properties";
const DETAILS_FAILED: &str = "Failed to get property details";

/// Inserts the payload verbatim; any shape of JSON object is accepted.
pub async fn create_property(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let document = mongodb::bson::to_document(&payload).map_err(|e| {
        tracing::error!(error = %e, "Property payload is not a document");
        AppError::Internal(ADD_FAILED.to_string())
    })?;

    let result = state
        .db
        .properties()
        .insert_one(document, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to insert property");
            AppError::Internal(ADD_FAILED.to_string())
        })?;

    Ok(Json(insert_ack(&result.inserted_id)))
}

pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state.db.properties().find(None, None).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to query properties");
        AppError::Internal(LIST_FAILED.to_string())
    })?;

    let mut documents = Vec::new();
    while let Some(document) = cursor.try_next().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read properties cursor");
        AppError::Internal(LIST_FAILED.to_string())
    })? {
        documents.push(document);
    }

    Ok(Json(documents_to_json(documents)))
}

/// A malformed id and a store failure both take the 500 path; the two have
/// never been distinguished on this route.
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| AppError::Internal(DETAILS_FAILED.to_string()))?;

    let document = state
        .db
        .properties()
        .find_one(doc! { "_id": oid }, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch property");
            AppError::Internal(DETAILS_FAILED.to_string())
        })?;

    Ok(Json(match document {
        Some(document) => document_to_json(document),
        None => Value::Null,
    }))
}
