//! HTTP middleware for axum.
//!
//! - `auth` - Admin session middleware and extractor

pub mod auth;

pub use auth::{admin_auth_middleware, AdminAuthState, AuthRejection, RequireAdmin};
