//! Auth operation handlers.

mod login;

pub use login::{LoginCommand, LoginHandler, LoginResult};
