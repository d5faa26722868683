//! PostgreSQL adapters for the content store ports.

mod category_registry;
mod credential_reader;
mod post_repository;

pub use category_registry::PostgresCategoryRegistry;
pub use credential_reader::PostgresCredentialReader;
pub use post_repository::PostgresPostRepository;
