//! Public listing HTTP adapter: the three read-only category pages.

mod dto;
mod handlers;
mod routes;

pub use handlers::ListingHandlers;
pub use routes::listing_routes;
