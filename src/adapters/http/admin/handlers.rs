//! HTTP handlers for the admin endpoints.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::dto::{ErrorResponse, PostResponse};
use crate::adapters::http::middleware::RequireAdmin;
use crate::application::handlers::auth::{LoginCommand, LoginHandler};
use crate::application::handlers::post::{
    CreatePostCommand, CreatePostHandler, DeletePostCommand, DeletePostHandler,
    ListCategoriesHandler, ListPostsHandler, PdfUpload,
};
use crate::domain::auth::AuthError;
use crate::domain::foundation::PostId;
use crate::domain::post::{Category, PostDraft, PostError};

use super::dto::{
    CategoryListResponse, DeletePostQuery, LoginRequest, LoginResponse, PostCommandResponse,
    PostListResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AdminHandlers {
    login_handler: Arc<LoginHandler>,
    create_handler: Arc<CreatePostHandler>,
    delete_handler: Arc<DeletePostHandler>,
    list_handler: Arc<ListPostsHandler>,
    categories_handler: Arc<ListCategoriesHandler>,
}

impl AdminHandlers {
    pub fn new(
        login_handler: Arc<LoginHandler>,
        create_handler: Arc<CreatePostHandler>,
        delete_handler: Arc<DeletePostHandler>,
        list_handler: Arc<ListPostsHandler>,
        categories_handler: Arc<ListCategoriesHandler>,
    ) -> Self {
        Self {
            login_handler,
            create_handler,
            delete_handler,
            list_handler,
            categories_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/admin/login - Verify the admin password and open a session
pub async fn login(
    State(handlers): State<AdminHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginCommand {
        password: req.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => {
            let response: LoginResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_auth_error(e),
    }
}

/// GET /api/admin/posts - List every post, newest first
pub async fn list_posts(
    State(handlers): State<AdminHandlers>,
    RequireAdmin(_session): RequireAdmin,
) -> Response {
    match handlers.list_handler.handle().await {
        Ok(posts) => {
            let response = PostListResponse {
                total: posts.len(),
                items: posts.iter().map(PostResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_post_error(e),
    }
}

/// GET /api/admin/categories - List registered custom-category labels
pub async fn list_categories(
    State(handlers): State<AdminHandlers>,
    RequireAdmin(_session): RequireAdmin,
) -> Response {
    match handlers.categories_handler.handle().await {
        Ok(items) => (StatusCode::OK, Json(CategoryListResponse { items })).into_response(),
        Err(e) => handle_post_error(e),
    }
}

/// POST /api/admin/posts - Create a post from the multipart creation form
pub async fn create_post(
    State(handlers): State<AdminHandlers>,
    RequireAdmin(_session): RequireAdmin,
    multipart: Multipart,
) -> Response {
    let cmd = match read_create_command(multipart).await {
        Ok(cmd) => cmd,
        Err(response) => return response,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(post) => {
            let response = PostCommandResponse {
                post: Some(PostResponse::from(&post)),
                message: "Post created".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_post_error(e),
    }
}

/// DELETE /api/admin/posts/:id - Delete a post (requires ?confirm=true)
pub async fn delete_post(
    State(handlers): State<AdminHandlers>,
    RequireAdmin(_session): RequireAdmin,
    Path(post_id): Path<String>,
    Query(query): Query<DeletePostQuery>,
) -> Response {
    let post_id = match post_id.parse::<PostId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid post ID")),
            )
                .into_response()
        }
    };

    let cmd = DeletePostCommand {
        id: post_id,
        confirmed: query.confirm,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => {
            let response = PostCommandResponse {
                post: None,
                message: "Post deleted".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_post_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Multipart form parsing
// ════════════════════════════════════════════════════════════════════════════

/// Read the creation form into a command.
///
/// Text parts: title, excerpt, content, category, subcategory, industry,
/// custom_category, author. File part: pdf. Unknown parts are ignored.
async fn read_create_command(mut multipart: Multipart) -> Result<CreatePostCommand, Response> {
    let mut title = None;
    let mut excerpt = None;
    let mut content = None;
    let mut category = None;
    let mut subcategory = None;
    let mut industry = None;
    let mut custom_category = None;
    let mut author = None;
    let mut pdf = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(bad_request(format!("Malformed form data: {}", e))),
        };

        let Some(name) = field.name().map(String::from) else {
            continue;
        };

        match name.as_str() {
            "pdf" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read PDF part: {}", e)))?;
                // An empty file input means no attachment was chosen.
                if !bytes.is_empty() {
                    pdf = Some(PdfUpload {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read form field: {}", e)))?;
                match name.as_str() {
                    "title" => title = Some(value),
                    "excerpt" => excerpt = Some(value),
                    "content" => content = Some(value),
                    "category" => category = Some(value),
                    "subcategory" => subcategory = Some(value),
                    "industry" => industry = Some(value),
                    "custom_category" => custom_category = Some(value),
                    "author" => author = Some(value),
                    _ => {}
                }
            }
        }
    }

    // Category is required by the form but defaults to valuation reports.
    let category = match category {
        Some(value) => value
            .parse::<Category>()
            .map_err(|e| bad_request(e.to_string()))?,
        None => Category::default(),
    };

    let draft = PostDraft::new(
        title.unwrap_or_default(),
        excerpt.unwrap_or_default(),
        content.unwrap_or_default(),
        category,
        subcategory,
        industry,
        custom_category,
        author,
    )
    .map_err(|e| handle_post_error(e))?;

    Ok(CreatePostCommand { draft, pdf })
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn handle_post_error(e: PostError) -> Response {
    tracing::error!(error = %e, "Admin post operation failed");

    let status = match &e {
        PostError::ValidationFailed { .. } | PostError::ConfirmationRequired => {
            StatusCode::BAD_REQUEST
        }
        PostError::NotFound(_) => StatusCode::NOT_FOUND,
        PostError::Upload(_) | PostError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse::new(e.code().to_string(), e.message())),
    )
        .into_response()
}

fn handle_auth_error(e: AuthError) -> Response {
    // The response stays generic; only the diagnostic log says which way
    // the login failed.
    tracing::error!(error = %e, "Admin login failed");

    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new("AUTH_ERROR", e.user_message())),
    )
        .into_response()
}
