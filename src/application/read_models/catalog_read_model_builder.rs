//! Builder for constructing catalog views from domain objects

use super::brand_view::{BrandView, CategoryCountView, CollisionView, PrefixGuideEntryView};
use super::catalog_read_model::{AuditView, DetectionView, DirectoryView, PrefixGuideView};
use crate::brand_catalog::domain::{BrandRecord, Catalog};
use crate::brand_catalog::policies::MatchPolicy;
use crate::brand_catalog::services::{normalize_serial, BrandFilter, Detection, PrefixCollision};

/// Transforms domain objects into the serializable read models
pub struct CatalogReadModelBuilder;

impl CatalogReadModelBuilder {
    pub fn brand(brand: &BrandRecord) -> BrandView {
        BrandView {
            id: brand.id().to_string(),
            name: brand.name().to_string(),
            description: brand.description().to_string(),
            category: brand.category().to_string(),
            features: brand.features().to_vec(),
            serial_prefixes: brand
                .serial_prefixes()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            url: brand.url().to_string(),
            logo: brand.logo().map(str::to_string),
        }
    }

    /// Builds the directory listing for the brands that passed `filter`
    pub fn directory(
        catalog: &Catalog,
        filter: &BrandFilter,
        brands: &[&BrandRecord],
    ) -> DirectoryView {
        DirectoryView {
            query: filter.query().map(str::to_string),
            category: filter.category().map(|c| c.to_string()),
            shown: brands.len(),
            total: catalog.len(),
            category_counts: Self::category_counts(catalog),
            brands: brands.iter().map(|b| Self::brand(b)).collect(),
        }
    }

    fn category_counts(catalog: &Catalog) -> Vec<CategoryCountView> {
        let all = CategoryCountView {
            category: "all".to_string(),
            label: "All Brands".to_string(),
            count: catalog.len(),
        };

        std::iter::once(all)
            .chain(
                catalog
                    .category_counts()
                    .into_iter()
                    .map(|(category, count)| CategoryCountView {
                        category: category.to_string(),
                        label: category.label().to_string(),
                        count,
                    }),
            )
            .collect()
    }

    pub fn detection(
        serial: &str,
        policy: MatchPolicy,
        detection: Option<Detection<'_>>,
    ) -> DetectionView {
        DetectionView {
            serial: serial.to_string(),
            normalized_serial: normalize_serial(serial),
            policy: policy.to_string(),
            matched_prefix: detection.map(|d| d.prefix.as_str().to_string()),
            brand: detection.map(|d| Self::brand(d.brand)),
        }
    }

    pub fn prefix_guide(catalog: &Catalog) -> PrefixGuideView {
        PrefixGuideView {
            entries: catalog
                .all_prefixes()
                .into_iter()
                .map(|entry| PrefixGuideEntryView {
                    brand: entry.brand_name.to_string(),
                    prefixes: entry
                        .prefixes
                        .iter()
                        .map(|p| p.as_str().to_string())
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn audit(catalog: &Catalog, collisions: &[PrefixCollision<'_>]) -> AuditView {
        AuditView {
            brand_count: catalog.len(),
            prefix_count: catalog.prefix_count(),
            collisions: collisions
                .iter()
                .map(|c| CollisionView {
                    earlier_brand: c.earlier.name().to_string(),
                    earlier_prefix: c.earlier_prefix.as_str().to_string(),
                    later_brand: c.later.name().to_string(),
                    later_prefix: c.later_prefix.as_str().to_string(),
                    shadowed: c.shadowed,
                })
                .collect(),
        }
    }
}
