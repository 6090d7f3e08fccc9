//! Bearer-token guard for routes that want authentication. No route in
//! the current table opts in; the guard is kept (and tested) so it can be
//! layered onto individual routes without further plumbing.

use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(token_data.claims)
}

/// Missing header: 401. Bad token: 403. On success the decoded claims are
/// stored in request extensions for downstream handlers.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Access denied".to_string()))?;

    let token = token.strip_prefix("Bearer ").unwrap_or(token);

    let claims = verify_token(token, &state.config.auth.access_token_secret).map_err(|e| {
        tracing::error!(error = %e, "Token verification failed");
        AppError::Forbidden("Invalid token".to_string())
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
