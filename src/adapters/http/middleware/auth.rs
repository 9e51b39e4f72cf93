//! Bearer-token authentication for the club API.
//!
//! `auth_middleware` validates the token through the `SessionValidator` port
//! and stores the resulting `AuthenticatedUser` in request extensions.
//! Handlers pick it up with `RequireAuth` or `OptionalAuth`.
//!
//! ```text
//! Request → auth_middleware → extensions[AuthenticatedUser]
//!                                      ↓
//!                              Handler → RequireAuth
//! ```
//!
//! Requests without a token pass through untouched; public pages never ask
//! for a user, staff pages reject with 401 at the extractor.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, AuthenticatedUser, ErrorCode};
use crate::ports::SessionValidator;

/// Auth middleware state.
pub type AuthState = Arc<dyn SessionValidator>;

fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Validates `Authorization: Bearer <token>` when present.
///
/// An invalid or expired token is rejected with 401 even on public routes.
/// A validator outage answers 503.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&request) else {
        return next.run(request).await;
    };

    match validator.validate(&token).await {
        Ok(user) => {
            tracing::debug!(user_id = %user.id, "request authenticated");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => auth_error_response(&e),
    }
}

fn auth_error_response(error: &AuthError) -> Response {
    let (status, code, message) = match error {
        AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, "Token expired"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, "Invalid token"),
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("Auth service unavailable: {}", msg);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::InternalError,
                "Authentication service unavailable",
            )
        }
    };

    (status, Json(ErrorResponse::new(code, message))).into_response()
}

/// Extractor that requires an authenticated user.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Extractor for pages that adapt to a signed-in user but do not need one.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(parts.extensions.get::<AuthenticatedUser>().cloned()))
    }
}

#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(
                    ErrorCode::Unauthorized,
                    "Authentication required",
                )),
            )
                .into_response(),
        }
    }
}
