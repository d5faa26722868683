//! Admin session middleware and extractor for axum.
//!
//! This module provides:
//! - `admin_auth_middleware` - Layer that checks bearer tokens against the
//!   session guard and injects the session into extensions
//! - `RequireAdmin` - Extractor that requires an authenticated session
//!
//! # Architecture
//!
//! The middleware uses the `AdminSessions` port, so the only way into the
//! admin surface is a token the session store issued at login.
//!
//! ```text
//! Request → admin_auth_middleware → injects AdminSession into extensions
//!                                      ↓
//!                              Handler → RequireAdmin extractor reads from extensions
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::auth::SessionToken;
use crate::ports::AdminSessions;

/// Middleware state - the session store.
pub type AdminAuthState = Arc<dyn AdminSessions>;

/// An authenticated admin session, injected into request extensions.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession(pub SessionToken);

/// Admin session middleware.
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Checks it against the session guard
/// 3. On success, injects `AdminSession` into request extensions
/// 4. On missing token, continues without injecting (public routes)
/// 5. On unknown or malformed token, returns 401 Unauthorized
///
/// # Token Extraction
///
/// Expects the token in the `Authorization` header with `Bearer` prefix:
/// ```text
/// Authorization: Bearer <token>
/// ```
pub async fn admin_auth_middleware(
    State(guard): State<AdminAuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header_token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match header_token {
        Some(raw) => {
            let token = match raw.parse::<SessionToken>() {
                Ok(token) => token,
                Err(_) => return unauthorized("Invalid session token"),
            };

            if guard.is_authenticated(&token).await {
                request.extensions_mut().insert(AdminSession(token));
                next.run(request).await
            } else {
                unauthorized("Unknown session token")
            }
        }
        None => {
            // No token provided - continue without a session.
            // Handlers use RequireAdmin to enforce authentication.
            next.run(request).await
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "error": message,
            "code": "AUTH_ERROR"
        })),
    )
        .into_response()
}

/// Extractor that requires an authenticated admin session.
///
/// If no session is in the request extensions (i.e., the middleware didn't
/// accept a token), returns 401 Unauthorized.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireAdmin(session): RequireAdmin) -> impl IntoResponse {
///     format!("session {}", session.0)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin(pub AdminSession);

impl<S> axum::extract::FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AdminSession>()
                .copied()
                .map(RequireAdmin)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid session token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn require_admin_rejects_without_session() {
        let request = HttpRequest::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result =
            <RequireAdmin as axum::extract::FromRequestParts<()>>::from_request_parts(
                &mut parts, &(),
            )
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn require_admin_accepts_injected_session() {
        let request = HttpRequest::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        let token = SessionToken::new();
        parts.extensions.insert(AdminSession(token));

        let result =
            <RequireAdmin as axum::extract::FromRequestParts<()>>::from_request_parts(
                &mut parts, &(),
            )
            .await
            .unwrap();

        assert_eq!(result.0 .0, token);
    }
}
