//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PostRepository` - reads and writes on the blog post table
//! - `CategoryRegistry` - the ad hoc custom-category label registry
//! - `CredentialReader` - read-only access to the admin credential row
//! - `AdminSessions` - the process-local authenticated-session set
//! - `PdfStorage` - binary object storage for attached PDF reports

mod admin_sessions;
mod category_registry;
mod credential_reader;
mod pdf_storage;
mod post_repository;

pub use admin_sessions::AdminSessions;
pub use category_registry::CategoryRegistry;
pub use credential_reader::CredentialReader;
pub use pdf_storage::{PdfStorage, UploadError};
pub use post_repository::PostRepository;
