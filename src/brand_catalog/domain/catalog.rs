use super::{BrandEntry, BrandRecord, Category, SerialPrefix};
use crate::shared::error::CatalogError;
use std::collections::HashSet;

/// One row of the serial prefix guide
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixEntry<'a> {
    pub brand_name: &'a str,
    pub prefixes: &'a [SerialPrefix],
}

/// Read-only, ordered collection of brand records.
///
/// Declaration order is significant: lookups and serial detection walk the
/// brands in this order and the first hit wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    brands: Vec<BrandRecord>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty catalogs and duplicate ids
    pub fn new(brands: Vec<BrandRecord>) -> Result<Self, CatalogError> {
        if brands.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for brand in &brands {
            if !seen.insert(brand.id()) {
                return Err(CatalogError::DuplicateBrandId {
                    id: brand.id().to_string(),
                });
            }
        }

        Ok(Self { brands })
    }

    /// Validates raw entries and builds a catalog from them
    pub fn from_entries(entries: Vec<BrandEntry>) -> Result<Self, CatalogError> {
        let brands = entries
            .into_iter()
            .map(BrandRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(brands)
    }

    pub fn brands(&self) -> &[BrandRecord] {
        &self.brands
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&BrandRecord> {
        self.brands.iter().find(|brand| brand.id() == id)
    }

    pub fn filter_by_category(&self, category: Category) -> Vec<&BrandRecord> {
        self.brands
            .iter()
            .filter(|brand| brand.category() == category)
            .collect()
    }

    /// Number of brands per category, in `Category::ALL` order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .brands
                    .iter()
                    .filter(|brand| brand.category() == category)
                    .count();
                (category, count)
            })
            .collect()
    }

    /// Total number of serial prefixes across all brands
    pub fn prefix_count(&self) -> usize {
        self.brands
            .iter()
            .map(|brand| brand.serial_prefixes().len())
            .sum()
    }

    pub fn all_prefixes(&self) -> Vec<PrefixEntry<'_>> {
        self.brands
            .iter()
            .map(|brand| PrefixEntry {
                brand_name: brand.name(),
                prefixes: brand.serial_prefixes(),
            })
            .collect()
    }
}
