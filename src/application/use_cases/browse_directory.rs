use crate::application::dto::DirectoryRequest;
use crate::application::read_models::{
    BrandView, CatalogReadModelBuilder, DirectoryView, PrefixGuideView,
};
use crate::brand_catalog::domain::Catalog;

/// BrowseDirectoryUseCase - read-only queries over the brand directory
///
/// Covers listing with search and category filter, looking up a single
/// brand by id, and the serial prefix guide.
pub struct BrowseDirectoryUseCase<'a> {
    catalog: &'a Catalog,
}

impl<'a> BrowseDirectoryUseCase<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Lists the brands passing the request's query and category filter,
    /// in catalog order
    pub fn execute(&self, request: &DirectoryRequest) -> DirectoryView {
        let filter = request.to_filter();
        let brands = filter.apply(self.catalog);
        CatalogReadModelBuilder::directory(self.catalog, &filter, &brands)
    }

    pub fn show(&self, id: &str) -> Option<BrandView> {
        self.catalog
            .find_by_id(id.trim())
            .map(CatalogReadModelBuilder::brand)
    }

    pub fn prefix_guide(&self) -> PrefixGuideView {
        CatalogReadModelBuilder::prefix_guide(self.catalog)
    }
}
