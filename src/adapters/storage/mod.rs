//! Storage adapters - filesystem-backed object storage.

mod local_pdf_storage;

pub use local_pdf_storage::LocalPdfStorage;
