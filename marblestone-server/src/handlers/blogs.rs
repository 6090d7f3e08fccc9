use crate::dtos::{document_to_json, documents_to_json, insert_ack};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde_json::Value;

const POST_FAILED: &str = "Failed to post blog";
const LIST_FAILED: &str = "Failed to fetch or Data not found";

pub async fn create_blog(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let document = mongodb::bson::to_document(&payload).map_err(|e| {
        tracing::error!(error = %e, "Blog payload is not a document");
        AppError::InternalMessage(POST_FAILED.to_string())
    })?;

    let result = state
        .db
        .blogs()
        .insert_one(document, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to insert blog post");
            AppError::InternalMessage(POST_FAILED.to_string())
        })?;

    Ok((StatusCode::CREATED, Json(insert_ack(&result.inserted_id))))
}

pub async fn list_blogs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state.db.blogs().find(None, None).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to query blogs");
        AppError::InternalMessage(LIST_FAILED.to_string())
    })?;

    let mut documents = Vec::new();
    while let Some(document) = cursor.try_next().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read blogs cursor");
        AppError::InternalMessage(LIST_FAILED.to_string())
    })? {
        documents.push(document);
    }

    Ok(Json(documents_to_json(documents)))
}

/// On failure this route has never answered with a body: the error is
/// logged and the client gets an empty 500.
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let oid = ObjectId::parse_str(&id).map_err(|e| {
        tracing::error!(error = %e, id = %id, "Blog id is not a valid ObjectId");
        AppError::Silent
    })?;

    let document = state
        .db
        .blogs()
        .find_one(doc! { "_id": oid }, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch blog post");
            AppError::Silent
        })?;

    Ok(Json(match document {
        Some(document) => document_to_json(document),
        None => Value::Null,
    }))
}
