//! Pure partition logic behind the public listing pages.
//!
//! Each page fetches one category's posts (already sorted newest-first) and
//! groups them into tabs: corporate finance by the fixed subcategory set,
//! valuation reports by the industries actually present. The insights page
//! has no partitioning and needs nothing from here.

use crate::domain::post::{Category, Post, FINANCE_SUBCATEGORIES};

/// One tab on a listing page.
///
/// A tab with an empty `posts` vector is still emitted so the page can show
/// its explicit "no articles" message instead of dropping the tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTab {
    pub label: String,
    pub posts: Vec<Post>,
}

/// One public listing page, fully assembled: the category's posts
/// newest-first plus the page's tab partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub category: Category,
    pub posts: Vec<Post>,
    pub tabs: Vec<ListingTab>,
}

impl CategoryListing {
    /// Assemble the listing for a category from its fetched posts.
    ///
    /// Finance pages get the fixed subcategory tabs, valuation pages the
    /// industries present in the data, insights pages no tabs at all.
    pub fn assemble(category: Category, posts: Vec<Post>) -> Self {
        let tabs = match category {
            Category::CorporateFinance => finance_listing(&posts),
            Category::ValuationReports => valuation_listing(&posts),
            Category::InvestmentInsights => Vec::new(),
        };
        Self {
            category,
            posts,
            tabs,
        }
    }
}

/// Partition corporate finance posts into the fixed subcategory tabs.
///
/// Always returns all three tabs, empty ones included. Posts whose
/// subcategory is not one of the fixed labels (custom categories) appear
/// only in the page's "all" view, which callers render from the full list.
pub fn finance_listing(posts: &[Post]) -> Vec<ListingTab> {
    FINANCE_SUBCATEGORIES
        .iter()
        .map(|label| ListingTab {
            label: (*label).to_string(),
            posts: posts
                .iter()
                .filter(|post| post.subcategory() == Some(*label))
                .cloned()
                .collect(),
        })
        .collect()
}

/// Partition valuation posts by the distinct industries present.
///
/// Tab order is first-seen order over the date-sorted input, so the most
/// recently active industry leads. Posts without an industry tag appear only
/// in the "all" view. No industries means no tabs.
pub fn valuation_listing(posts: &[Post]) -> Vec<ListingTab> {
    let mut industries: Vec<&str> = Vec::new();
    for post in posts {
        if let Some(industry) = post.industry() {
            if !industries.contains(&industry) {
                industries.push(industry);
            }
        }
    }

    industries
        .into_iter()
        .map(|industry| ListingTab {
            label: industry.to_string(),
            posts: posts
                .iter()
                .filter(|post| post.industry() == Some(industry))
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PostId, Timestamp};
    use crate::domain::post::Category;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn post(
        category: Category,
        subcategory: Option<&str>,
        industry: Option<&str>,
        day: u32,
    ) -> Post {
        Post::reconstitute(
            PostId::from_uuid(Uuid::new_v4()),
            format!("Post {}", day),
            "excerpt".to_string(),
            "content".to_string(),
            category,
            subcategory.map(String::from),
            industry.map(String::from),
            "Hamilton Investment".to_string(),
            Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 6, day, 0, 0, 0).unwrap()),
            None,
        )
    }

    #[test]
    fn finance_listing_always_has_three_tabs() {
        let tabs = finance_listing(&[]);
        assert_eq!(tabs.len(), 3);
        assert!(tabs.iter().all(|tab| tab.posts.is_empty()));
        assert_eq!(tabs[0].label, "Investment Decisions");
        assert_eq!(tabs[1].label, "Finance Decisions");
        assert_eq!(tabs[2].label, "Dividend Decisions");
    }

    #[test]
    fn finance_posts_land_only_in_their_tab() {
        let posts = vec![
            post(Category::CorporateFinance, Some("Dividend Decisions"), None, 3),
            post(Category::CorporateFinance, Some("Investment Decisions"), None, 2),
        ];
        let tabs = finance_listing(&posts);

        assert_eq!(tabs[2].posts.len(), 1);
        assert_eq!(tabs[2].posts[0].title(), "Post 3");
        assert_eq!(tabs[0].posts.len(), 1);
        assert!(tabs[1].posts.is_empty());
    }

    #[test]
    fn custom_subcategory_appears_in_no_fixed_tab() {
        let posts = vec![post(
            Category::CorporateFinance,
            Some("ESG Screening"),
            None,
            1,
        )];
        let tabs = finance_listing(&posts);
        assert!(tabs.iter().all(|tab| tab.posts.is_empty()));
    }

    #[test]
    fn valuation_tabs_follow_first_seen_industry_order() {
        // Input is date-sorted descending, as the repository returns it.
        let posts = vec![
            post(Category::ValuationReports, None, Some("Healthcare"), 9),
            post(Category::ValuationReports, None, Some("Technology"), 7),
            post(Category::ValuationReports, None, Some("Healthcare"), 5),
        ];
        let tabs = valuation_listing(&posts);

        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].label, "Healthcare");
        assert_eq!(tabs[0].posts.len(), 2);
        assert_eq!(tabs[1].label, "Technology");
        assert_eq!(tabs[1].posts.len(), 1);
    }

    #[test]
    fn valuation_posts_without_industry_get_no_tab() {
        let posts = vec![post(Category::ValuationReports, None, None, 1)];
        let tabs = valuation_listing(&posts);
        assert!(tabs.is_empty());
    }

    #[test]
    fn assemble_dispatches_on_category() {
        let finance = CategoryListing::assemble(
            Category::CorporateFinance,
            vec![post(Category::CorporateFinance, Some("Finance Decisions"), None, 1)],
        );
        assert_eq!(finance.tabs.len(), 3);

        let valuation = CategoryListing::assemble(
            Category::ValuationReports,
            vec![post(Category::ValuationReports, None, Some("Energy"), 1)],
        );
        assert_eq!(valuation.tabs.len(), 1);
        assert_eq!(valuation.tabs[0].label, "Energy");

        let insights = CategoryListing::assemble(
            Category::InvestmentInsights,
            vec![post(Category::InvestmentInsights, None, None, 1)],
        );
        assert!(insights.tabs.is_empty());
        assert_eq!(insights.posts.len(), 1);
    }
}
