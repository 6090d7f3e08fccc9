use crate::dtos::{documents_to_json, insert_ack, CreateUserRequest};
use crate::error::AppError;
use crate::models::UserRecord;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;

const ADD_FAILED: &str = "Failed to add user:";
const LIST_FAILED: &str = "Failed to get user:";
const DUPLICATE_EMAIL: &str = "Email Already in use ";

/// Creates a user from exactly `name`, `email` and `photoURL`, stamping
/// `role: "user"`. Uniqueness of `email` is a find-then-insert check with
/// no atomicity: two concurrent creates for the same email can both pass
/// the lookup and both insert. Accepted behavior, not guarded against.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let existing = state
        .db
        .users()
        .find_one(doc! { "email": &payload.email }, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to look up user by email");
            AppError::Internal(ADD_FAILED.to_string())
        })?;

    if existing.is_some() {
        return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
    }

    let record = UserRecord::new(payload.name, payload.email, payload.photo_url);
    let document = mongodb::bson::to_document(&record).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize user record");
        AppError::Internal(ADD_FAILED.to_string())
    })?;

    let result = state
        .db
        .users()
        .insert_one(document, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to insert user");
            AppError::Internal(ADD_FAILED.to_string())
        })?;

    Ok((StatusCode::CREATED, Json(insert_ack(&result.inserted_id))))
}

/// 201 on a read is non-standard but has always been this route's
/// observable contract; existing clients depend on it.
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state.db.users().find(None, None).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to query users");
        AppError::Internal(LIST_FAILED.to_string())
    })?;

    let mut documents = Vec::new();
    while let Some(document) = cursor.try_next().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read users cursor");
        AppError::Internal(LIST_FAILED.to_string())
    })? {
        documents.push(document);
    }

    Ok((StatusCode::CREATED, Json(documents_to_json(documents))))
}
