//! HTTP routes for the public listing endpoints.

use axum::{routing::get, Router};

use super::handlers::{finance_listing, insights_listing, valuation_listing, ListingHandlers};

/// Creates the public listing router.
pub fn listing_routes(handlers: ListingHandlers) -> Router {
    Router::new()
        .route("/valuation", get(valuation_listing))
        .route("/finance", get(finance_listing))
        .route("/insights", get(insights_listing))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_routes_compiles() {
        // This test just ensures the route definitions compile correctly
        // Actual HTTP testing would require integration tests
    }
}
