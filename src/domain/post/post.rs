//! Post entity and the draft submitted by the admin creation form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PostId, Timestamp};
use crate::domain::post::{Category, PostError};

/// Author used when the creation form leaves the field untouched.
pub const DEFAULT_AUTHOR: &str = "Hamilton Investment";

/// Maximum length for a post title.
pub const MAX_TITLE_LENGTH: usize = 500;

/// A published blog post.
///
/// # Invariants
///
/// - `id` and `published_date` are assigned by the content store at insert
/// - `category` is always one of the three fixed values
/// - `subcategory` and `industry` are advisory metadata with no referential
///   integrity beyond the custom-category registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned unique identifier.
    id: PostId,

    /// Post title.
    title: String,

    /// Short teaser shown on listing cards.
    excerpt: String,

    /// Full article body.
    content: String,

    /// Main category.
    category: Category,

    /// Advisory subcategory tag.
    subcategory: Option<String>,

    /// Advisory industry tag (valuation reports).
    industry: Option<String>,

    /// Display author.
    author: String,

    /// Store-assigned publish timestamp.
    published_date: Timestamp,

    /// Public URL of the attached PDF report, if one was uploaded.
    pdf_url: Option<String>,
}

impl Post {
    /// Reconstitute a post from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: PostId,
        title: String,
        excerpt: String,
        content: String,
        category: Category,
        subcategory: Option<String>,
        industry: Option<String>,
        author: String,
        published_date: Timestamp,
        pdf_url: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            excerpt,
            content,
            category,
            subcategory,
            industry,
            author,
            published_date,
            pdf_url,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn published_date(&self) -> Timestamp {
        self.published_date
    }

    pub fn pdf_url(&self) -> Option<&str> {
        self.pdf_url.as_deref()
    }
}

/// The admin creation form, validated before anything touches the store.
///
/// Optional fields arrive as empty strings from the form and are normalized
/// to `None`. A custom category label, when present, wins over the selected
/// subcategory and is registered as a new label after the insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub subcategory: Option<String>,
    pub industry: Option<String>,
    pub custom_category: Option<String>,
    pub author: String,
}

impl PostDraft {
    /// Create a validated draft.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title, excerpt, or content is empty or the
    ///   title exceeds [`MAX_TITLE_LENGTH`]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        excerpt: impl Into<String>,
        content: impl Into<String>,
        category: Category,
        subcategory: Option<String>,
        industry: Option<String>,
        custom_category: Option<String>,
        author: Option<String>,
    ) -> Result<Self, PostError> {
        let title = title.into();
        let excerpt = excerpt.into();
        let content = content.into();

        Self::require_non_empty("title", &title)?;
        Self::require_non_empty("excerpt", &excerpt)?;
        Self::require_non_empty("content", &content)?;
        if title.len() > MAX_TITLE_LENGTH {
            return Err(PostError::validation(
                "title",
                format!("must be at most {} characters", MAX_TITLE_LENGTH),
            ));
        }

        let author = author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

        Ok(Self {
            title,
            excerpt,
            content,
            category,
            subcategory: normalize_optional(subcategory),
            industry: normalize_optional(industry),
            custom_category: normalize_optional(custom_category),
            author,
        })
    }

    /// The subcategory that ends up on the stored row: a custom category
    /// label takes precedence over the selected subcategory.
    pub fn effective_subcategory(&self) -> Option<&str> {
        self.custom_category
            .as_deref()
            .or(self.subcategory.as_deref())
    }

    /// The brand-new label to register, if the admin introduced one.
    pub fn new_category_label(&self) -> Option<&str> {
        self.custom_category.as_deref()
    }

    fn require_non_empty(field: &str, value: &str) -> Result<(), PostError> {
        if value.trim().is_empty() {
            Err(PostError::validation(field, "cannot be empty"))
        } else {
            Ok(())
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(custom: Option<&str>, sub: Option<&str>) -> PostDraft {
        PostDraft::new(
            "Q3 Outlook",
            "A look ahead.",
            "Full analysis body.",
            Category::CorporateFinance,
            sub.map(String::from),
            None,
            custom.map(String::from),
            None,
        )
        .unwrap()
    }

    #[test]
    fn valid_draft_is_accepted() {
        let draft = draft(None, Some("Dividend Decisions"));
        assert_eq!(draft.author, DEFAULT_AUTHOR);
        assert_eq!(draft.effective_subcategory(), Some("Dividend Decisions"));
    }

    #[test]
    fn empty_required_fields_are_rejected() {
        for (title, excerpt, content) in [
            ("", "e", "c"),
            ("t", "   ", "c"),
            ("t", "e", ""),
        ] {
            let result = PostDraft::new(
                title,
                excerpt,
                content,
                Category::default(),
                None,
                None,
                None,
                None,
            );
            assert!(matches!(result, Err(PostError::ValidationFailed { .. })));
        }
    }

    #[test]
    fn overlong_title_is_rejected() {
        let result = PostDraft::new(
            "x".repeat(MAX_TITLE_LENGTH + 1),
            "e",
            "c",
            Category::default(),
            None,
            None,
            None,
            None,
        );
        assert!(matches!(result, Err(PostError::ValidationFailed { .. })));
    }

    #[test]
    fn custom_category_wins_over_subcategory() {
        let draft = draft(Some("ESG Screening"), Some("Finance Decisions"));
        assert_eq!(draft.effective_subcategory(), Some("ESG Screening"));
        assert_eq!(draft.new_category_label(), Some("ESG Screening"));
    }

    #[test]
    fn empty_optionals_normalize_to_none() {
        let draft = draft(Some("   "), Some(""));
        assert_eq!(draft.subcategory, None);
        assert_eq!(draft.custom_category, None);
        assert_eq!(draft.effective_subcategory(), None);
        assert_eq!(draft.new_category_label(), None);
    }

    #[test]
    fn explicit_author_is_kept() {
        let draft = PostDraft::new(
            "t",
            "e",
            "c",
            Category::default(),
            None,
            None,
            None,
            Some("Research Desk".to_string()),
        )
        .unwrap();
        assert_eq!(draft.author, "Research Desk");
    }
}
