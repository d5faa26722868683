//! Post operation handlers.

mod create_post;
mod delete_post;
mod get_listing;
mod list_categories;
mod list_posts;

pub use create_post::{CreatePostCommand, CreatePostHandler, PdfUpload};
pub use delete_post::{DeletePostCommand, DeletePostHandler};
pub use get_listing::GetListingHandler;
pub use list_categories::ListCategoriesHandler;
pub use list_posts::ListPostsHandler;
