use crate::application::read_models::{AuditView, CatalogReadModelBuilder};
use crate::brand_catalog::domain::Catalog;
use crate::brand_catalog::services::find_prefix_collisions;

/// AuditCatalogUseCase - reports serial prefixes shared across brands
pub struct AuditCatalogUseCase<'a> {
    catalog: &'a Catalog,
}

impl<'a> AuditCatalogUseCase<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn execute(&self) -> AuditView {
        let collisions = find_prefix_collisions(self.catalog);
        CatalogReadModelBuilder::audit(self.catalog, &collisions)
    }
}
