use crate::application::dto::DetectRequest;
use crate::application::read_models::{CatalogReadModelBuilder, DetectionView};
use crate::brand_catalog::domain::Catalog;
use crate::brand_catalog::services::SerialDetector;

/// DetectBrandUseCase - identifies the manufacturer of a serial number
pub struct DetectBrandUseCase<'a> {
    catalog: &'a Catalog,
}

impl<'a> DetectBrandUseCase<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Never fails; an unmatched or empty serial yields a view without a brand
    pub fn execute(&self, request: &DetectRequest) -> DetectionView {
        let detection = SerialDetector::new(request.policy).detect(self.catalog, &request.serial);
        CatalogReadModelBuilder::detection(&request.serial, request.policy, detection)
    }
}
