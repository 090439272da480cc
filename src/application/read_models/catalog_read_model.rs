//! Catalog read models for query operations
//!
//! Each CLI command produces one of these views; `CatalogReadModel` wraps
//! them so a single formatter port can render any of them.

use super::brand_view::{BrandView, CategoryCountView, CollisionView, PrefixGuideEntryView};
use serde::Serialize;

/// Filtered brand listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Number of brands after filtering
    pub shown: usize,
    /// Number of brands in the catalog
    pub total: usize,
    /// "all" first, then one entry per category
    pub category_counts: Vec<CategoryCountView>,
    pub brands: Vec<BrandView>,
}

/// Result of detecting a brand from a serial number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionView {
    /// Serial as entered by the user
    pub serial: String,
    /// Trimmed, upper-cased serial used for matching
    pub normalized_serial: String,
    pub policy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_prefix: Option<String>,
    pub brand: Option<BrandView>,
}

impl DetectionView {
    pub fn is_match(&self) -> bool {
        self.brand.is_some()
    }
}

/// Serial prefix guide, one entry per brand
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefixGuideView {
    pub entries: Vec<PrefixGuideEntryView>,
}

/// Prefix collision report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditView {
    pub brand_count: usize,
    pub prefix_count: usize,
    pub collisions: Vec<CollisionView>,
}

impl AuditView {
    pub fn shadowed_count(&self) -> usize {
        self.collisions.iter().filter(|c| c.shadowed).count()
    }
}

/// Any view the CLI can render
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogReadModel {
    Directory(DirectoryView),
    Brand(BrandView),
    BrandNotFound { id: String },
    Detection(DetectionView),
    PrefixGuide(PrefixGuideView),
    Audit(AuditView),
}

impl CatalogReadModel {
    /// False when the command looked something up and found nothing
    pub fn is_match(&self) -> bool {
        match self {
            CatalogReadModel::BrandNotFound { .. } => false,
            CatalogReadModel::Detection(detection) => detection.is_match(),
            _ => true,
        }
    }
}
