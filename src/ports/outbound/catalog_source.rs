use crate::brand_catalog::domain::Catalog;
use crate::shared::Result;

/// A validated catalog plus non-fatal findings from loading it
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// e.g. unknown keys in a catalog file
    pub warnings: Vec<String>,
}

impl LoadedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            warnings: Vec::new(),
        }
    }
}

/// CatalogSource port for obtaining the brand catalog
///
/// The catalog is loaded once per process and then passed around by
/// reference; implementations do not need to cache.
pub trait CatalogSource {
    /// Loads and validates the catalog
    ///
    /// # Errors
    /// Returns an error if:
    /// - The backing file does not exist or cannot be read
    /// - The content cannot be parsed
    /// - A record violates the catalog invariants (duplicate id, bad prefix, ...)
    fn load_catalog(&self) -> Result<LoadedCatalog>;

    /// Human-readable origin of the catalog, used in status messages
    fn describe(&self) -> String;
}
