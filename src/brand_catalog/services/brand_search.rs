use crate::brand_catalog::domain::{BrandRecord, Catalog, Category};

/// Case-insensitive substring search over name, description and features.
///
/// Results keep catalog order. The empty query is a substring of every
/// field, so it returns the whole catalog.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a BrandRecord> {
    let needle = query.to_lowercase();
    catalog
        .brands()
        .iter()
        .filter(|brand| matches_query(brand, &needle))
        .collect()
}

/// `needle` must already be lower-cased
fn matches_query(brand: &BrandRecord, needle: &str) -> bool {
    brand.name().to_lowercase().contains(needle)
        || brand.description().to_lowercase().contains(needle)
        || brand
            .features()
            .iter()
            .any(|feature| feature.to_lowercase().contains(needle))
}

/// BrandFilter - combined text query and category filter for the directory
///
/// `None` on either side means that side does not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandFilter {
    query: Option<String>,
    category: Option<Category>,
}

impl BrandFilter {
    pub fn new(query: Option<String>, category: Option<Category>) -> Self {
        Self { query, category }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a BrandRecord> {
        let needle = self.query.as_deref().map(str::to_lowercase);
        catalog
            .brands()
            .iter()
            .filter(|brand| {
                needle
                    .as_deref()
                    .map_or(true, |needle| matches_query(brand, needle))
            })
            .filter(|brand| self.category.map_or(true, |c| brand.category() == c))
            .collect()
    }
}
