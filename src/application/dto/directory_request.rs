use crate::brand_catalog::domain::Category;
use crate::brand_catalog::services::BrandFilter;

/// DirectoryRequest - request DTO for browsing the brand directory
///
/// A blank query is treated as "no text filter", the same way the
/// search box behaves when it is empty. Any other query is matched as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryRequest {
    pub query: Option<String>,
    pub category: Option<Category>,
}

impl DirectoryRequest {
    pub fn new(query: Option<String>, category: Option<Category>) -> Self {
        Self { query, category }
    }

    pub fn to_filter(&self) -> BrandFilter {
        let query = self
            .query
            .clone()
            .filter(|q| !q.trim().is_empty());
        BrandFilter::new(query, self.category)
    }
}
