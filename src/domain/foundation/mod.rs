//! Foundation module - shared value objects and error types.
//!
//! These building blocks are used across the domain: strongly-typed
//! identifiers, the UTC timestamp value object, and the error vocabulary
//! that ports report failures in.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::PostId;
pub use timestamp::Timestamp;
