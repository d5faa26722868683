//! Post module - the blog post entity and its classification scheme.
//!
//! Posts carry a three-level classification: a fixed category enum, an
//! advisory subcategory (constrained to a fixed set for corporate finance
//! form input, free-form otherwise), and an advisory industry tag used by
//! valuation reports.

mod category;
mod errors;
mod listing;
mod post;

pub use category::{Category, FINANCE_SUBCATEGORIES};
pub use errors::PostError;
pub use listing::{finance_listing, valuation_listing, CategoryListing, ListingTab};
pub use post::{Post, PostDraft, DEFAULT_AUTHOR, MAX_TITLE_LENGTH};
