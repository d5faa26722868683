//! Admin console HTTP adapter: login and post management.

mod dto;
mod handlers;
mod routes;

pub use handlers::AdminHandlers;
pub use routes::admin_routes;
