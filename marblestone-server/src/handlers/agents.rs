use crate::dtos::{document_to_json, documents_to_json, insert_ack};
use crate::error::AppError;
use crate::models::ROLE_AGENT;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde_json::Value;

const ADD_FAILED: &str = "Failed to add agent. Please try again.";
const LIST_FAILED: &str = "Failed to get agents. Please try again.";
const DETAILS_FAILED: &str = "Failed to get agent details";

/// Inserts the payload with `role` forced to `"agent"`, overwriting any
/// value the client submitted.
pub async fn create_agent(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let mut document = mongodb::bson::to_document(&payload).map_err(|e| {
        tracing::error!(error = %e, "Agent payload is not a document");
        AppError::Internal(ADD_FAILED.to_string())
    })?;
    document.insert("role", ROLE_AGENT);

    let result = state
        .db
        .agents()
        .insert_one(document, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to insert agent");
            AppError::Internal(ADD_FAILED.to_string())
        })?;

    Ok(Json(insert_ack(&result.inserted_id)))
}

pub async fn list_agents(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state.db.agents().find(None, None).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to query agents");
        AppError::Internal(LIST_FAILED.to_string())
    })?;

    let mut documents = Vec::new();
    while let Some(document) = cursor.try_next().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read agents cursor");
        AppError::Internal(LIST_FAILED.to_string())
    })? {
        documents.push(document);
    }

    Ok(Json(documents_to_json(documents)))
}

pub async fn get_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| AppError::Internal(DETAILS_FAILED.to_string()))?;

    let document = state
        .db
        .agents()
        .find_one(doc! { "_id": oid }, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch agent");
            AppError::Internal(DETAILS_FAILED.to_string())
        })?;

    Ok(Json(match document {
        Some(document) => document_to_json(document),
        None => Value::Null,
    }))
}
