//! HTTP handlers for the public listing endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::dto::ErrorResponse;
use crate::application::handlers::post::GetListingHandler;
use crate::domain::post::{Category, PostError};

use super::dto::ListingResponse;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ListingHandlers {
    listing_handler: Arc<GetListingHandler>,
}

impl ListingHandlers {
    pub fn new(listing_handler: Arc<GetListingHandler>) -> Self {
        Self { listing_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/listings/valuation - Valuation reports grouped by industry
pub async fn valuation_listing(State(handlers): State<ListingHandlers>) -> Response {
    listing(handlers, Category::ValuationReports).await
}

/// GET /api/listings/finance - Corporate finance grouped by decision type
pub async fn finance_listing(State(handlers): State<ListingHandlers>) -> Response {
    listing(handlers, Category::CorporateFinance).await
}

/// GET /api/listings/insights - Investment insights, ungrouped
pub async fn insights_listing(State(handlers): State<ListingHandlers>) -> Response {
    listing(handlers, Category::InvestmentInsights).await
}

async fn listing(handlers: ListingHandlers, category: Category) -> Response {
    match handlers.listing_handler.handle(category).await {
        Ok(listing) => {
            let response: ListingResponse = listing.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_listing_error(category, e),
    }
}

fn handle_listing_error(category: Category, e: PostError) -> Response {
    tracing::error!(error = %e, category = %category, "Listing fetch failed");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(
            e.code().to_string(),
            format!("Failed to load {} articles", category.label()),
        )),
    )
        .into_response()
}
