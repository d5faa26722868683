//! HTTP DTOs shared across endpoint modules.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution.

use serde::Serialize;

use crate::domain::post::Post;

/// A post as rendered in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub category_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub author: String,
    pub published_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id().to_string(),
            title: post.title().to_string(),
            excerpt: post.excerpt().to_string(),
            content: post.content().to_string(),
            category: post.category().as_str().to_string(),
            category_label: post.category().label().to_string(),
            subcategory: post.subcategory().map(String::from),
            industry: post.industry().map(String::from),
            author: post.author().to_string(),
            published_date: post.published_date().as_datetime().to_rfc3339(),
            pdf_url: post.pdf_url().map(String::from),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PostId, Timestamp};
    use crate::domain::post::Category;
    use uuid::Uuid;

    #[test]
    fn post_response_carries_wire_name_and_label() {
        let post = Post::reconstitute(
            PostId::from_uuid(Uuid::new_v4()),
            "title".to_string(),
            "excerpt".to_string(),
            "content".to_string(),
            Category::ValuationReports,
            None,
            Some("Technology".to_string()),
            "Hamilton Investment".to_string(),
            Timestamp::now(),
            None,
        );

        let response = PostResponse::from(&post);
        assert_eq!(response.category, "valuation_reports");
        assert_eq!(response.category_label, "Valuation Report");
        assert_eq!(response.industry.as_deref(), Some("Technology"));

        // Absent optionals are omitted from the JSON entirely.
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("subcategory"));
        assert!(!json.contains("pdf_url"));
    }
}
