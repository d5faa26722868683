//! Post category enum and the fixed finance subcategory set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed subcategory tabs for corporate finance posts.
pub const FINANCE_SUBCATEGORIES: [&str; 3] = [
    "Investment Decisions",
    "Finance Decisions",
    "Dividend Decisions",
];

/// Main post category.
///
/// Every post carries exactly one of these three values; they map one-to-one
/// onto the public listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ValuationReports,
    CorporateFinance,
    InvestmentInsights,
}

impl Category {
    /// Wire/storage name for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ValuationReports => "valuation_reports",
            Category::CorporateFinance => "corporate_finance",
            Category::InvestmentInsights => "investment_insights",
        }
    }

    /// Human-readable label shown on cards and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ValuationReports => "Valuation Report",
            Category::CorporateFinance => "Corporate Finance",
            Category::InvestmentInsights => "Investment Insights",
        }
    }

    /// All category values.
    pub fn all() -> [Category; 3] {
        [
            Category::ValuationReports,
            Category::CorporateFinance,
            Category::InvestmentInsights,
        ]
    }
}

impl Default for Category {
    /// The admin creation form defaults to valuation reports.
    fn default() -> Self {
        Category::ValuationReports
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valuation_reports" => Ok(Category::ValuationReports),
            "corporate_finance" => Ok(Category::CorporateFinance),
            "investment_insights" => Ok(Category::InvestmentInsights),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
