//! Auth module - the admin credential and session token values.
//!
//! There is exactly one admin identity, keyed by a fixed username. The
//! credential row is provisioned out-of-band and read-only here; password
//! verification happens inside the process so the stored hash never leaves
//! the server boundary.

mod credential;
mod errors;
mod token;

pub use credential::{AdminCredential, ADMIN_USERNAME};
pub use errors::AuthError;
pub use token::SessionToken;
