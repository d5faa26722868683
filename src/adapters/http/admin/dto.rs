//! HTTP DTOs for the admin endpoints.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::adapters::http::dto::PostResponse;
use crate::application::handlers::auth::LoginResult;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: SecretString,
}

/// Query parameters for deleting a post.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeletePostQuery {
    /// The caller's yes/no confirmation; deletion is rejected without it.
    #[serde(default)]
    pub confirm: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a successful login.
///
/// Includes the refreshed post list and custom-category labels so the
/// console renders with current data immediately.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub posts: Vec<PostResponse>,
    pub custom_categories: Vec<String>,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token.to_string(),
            posts: result.posts.iter().map(PostResponse::from).collect(),
            custom_categories: result.custom_categories,
        }
    }
}

/// The admin console's post list.
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub items: Vec<PostResponse>,
    pub total: usize,
}

/// Registered custom-category labels.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub items: Vec<String>,
}

/// Response for post commands (create, delete).
#[derive(Debug, Serialize)]
pub struct PostCommandResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<PostResponse>,
    pub message: String,
}
