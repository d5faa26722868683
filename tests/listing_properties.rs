//! Property tests for the listing partition functions.

use proptest::prelude::*;
use uuid::Uuid;

use hamilton_insights::domain::foundation::{PostId, Timestamp};
use hamilton_insights::domain::post::{
    finance_listing, valuation_listing, Category, Post, FINANCE_SUBCATEGORIES,
};

fn post(category: Category, subcategory: Option<String>, industry: Option<String>) -> Post {
    Post::reconstitute(
        PostId::from_uuid(Uuid::new_v4()),
        "title".to_string(),
        "excerpt".to_string(),
        "content".to_string(),
        category,
        subcategory,
        industry,
        "Hamilton Investment".to_string(),
        Timestamp::now(),
        None,
    )
}

/// Subcategories as the form produces them: a fixed label, a custom one,
/// or nothing.
fn subcategory_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(FINANCE_SUBCATEGORIES.to_vec()).prop_map(|s| Some(s.to_string())),
        "[A-Z][a-z]{2,8}".prop_map(Some),
    ]
}

fn industry_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(vec!["Technology", "Healthcare", "Energy", "Retail"])
            .prop_map(|s| Some(s.to_string())),
    ]
}

proptest! {
    #[test]
    fn finance_tabs_partition_the_fixed_labels(
        subcategories in prop::collection::vec(subcategory_strategy(), 0..24)
    ) {
        let posts: Vec<Post> = subcategories
            .into_iter()
            .map(|sub| post(Category::CorporateFinance, sub, None))
            .collect();

        let tabs = finance_listing(&posts);

        // Always exactly the three fixed tabs, in order.
        prop_assert_eq!(tabs.len(), 3);
        for (tab, label) in tabs.iter().zip(FINANCE_SUBCATEGORIES) {
            prop_assert_eq!(tab.label.as_str(), label);
            // Every post in a tab carries that tab's subcategory...
            prop_assert!(tab.posts.iter().all(|p| p.subcategory() == Some(label)));
            // ...and every matching post is in the tab.
            let expected = posts
                .iter()
                .filter(|p| p.subcategory() == Some(label))
                .count();
            prop_assert_eq!(tab.posts.len(), expected);
        }
    }

    #[test]
    fn valuation_tabs_cover_exactly_the_tagged_posts(
        industries in prop::collection::vec(industry_strategy(), 0..24)
    ) {
        let posts: Vec<Post> = industries
            .into_iter()
            .map(|industry| post(Category::ValuationReports, None, industry))
            .collect();

        let tabs = valuation_listing(&posts);

        // One tab per distinct industry, first-seen order.
        let mut seen: Vec<&str> = Vec::new();
        for p in &posts {
            if let Some(industry) = p.industry() {
                if !seen.contains(&industry) {
                    seen.push(industry);
                }
            }
        }
        let labels: Vec<&str> = tabs.iter().map(|t| t.label.as_str()).collect();
        prop_assert_eq!(labels, seen);

        // Tabs together hold exactly the tagged posts.
        let tagged = posts.iter().filter(|p| p.industry().is_some()).count();
        let in_tabs: usize = tabs.iter().map(|t| t.posts.len()).sum();
        prop_assert_eq!(in_tabs, tagged);

        for tab in &tabs {
            prop_assert!(tab
                .posts
                .iter()
                .all(|p| p.industry() == Some(tab.label.as_str())));
        }
    }
}
