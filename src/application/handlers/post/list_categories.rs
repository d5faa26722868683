//! ListCategoriesHandler - the admin console's custom-category labels.

use std::sync::Arc;

use crate::domain::post::PostError;
use crate::ports::CategoryRegistry;

/// Handler for listing registered custom-category labels.
pub struct ListCategoriesHandler {
    categories: Arc<dyn CategoryRegistry>,
}

impl ListCategoriesHandler {
    pub fn new(categories: Arc<dyn CategoryRegistry>) -> Self {
        Self { categories }
    }

    /// # Errors
    ///
    /// - `Infrastructure` on read failure
    pub async fn handle(&self) -> Result<Vec<String>, PostError> {
        Ok(self.categories.list().await?)
    }
}
