//! HTTP DTOs for the public listing endpoints.

use serde::Serialize;

use crate::adapters::http::dto::PostResponse;
use crate::domain::post::{Category, CategoryListing, ListingTab};

/// One tab on a listing page.
///
/// Empty tabs are emitted with their explicit empty-state copy so the page
/// renders "no articles" instead of a bare empty list.
#[derive(Debug, Serialize)]
pub struct ListingTabResponse {
    pub label: String,
    pub posts: Vec<PostResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl From<&ListingTab> for ListingTabResponse {
    fn from(tab: &ListingTab) -> Self {
        let empty_message = if tab.posts.is_empty() {
            Some(format!("No articles available for {}.", tab.label))
        } else {
            None
        };
        Self {
            label: tab.label.clone(),
            posts: tab.posts.iter().map(PostResponse::from).collect(),
            empty_message,
        }
    }
}

/// A fully assembled listing page.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub category: String,
    pub category_label: String,
    pub posts: Vec<PostResponse>,
    pub tabs: Vec<ListingTabResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl From<CategoryListing> for ListingResponse {
    fn from(listing: CategoryListing) -> Self {
        let empty_message = if listing.posts.is_empty() {
            Some(empty_copy(listing.category).to_string())
        } else {
            None
        };
        Self {
            category: listing.category.as_str().to_string(),
            category_label: listing.category.label().to_string(),
            posts: listing.posts.iter().map(PostResponse::from).collect(),
            tabs: listing.tabs.iter().map(ListingTabResponse::from).collect(),
            empty_message,
        }
    }
}

/// Page-level empty-state copy per category.
fn empty_copy(category: Category) -> &'static str {
    match category {
        Category::ValuationReports => "No valuation reports available yet.",
        Category::CorporateFinance => "No corporate finance articles available yet.",
        Category::InvestmentInsights => "No investment insights available yet.",
    }
}
