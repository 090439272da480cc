//! Brand view structs for read model
//!
//! Flattened, serializable copies of catalog data for the formatters.

use serde::Serialize;

/// View representation of a single brand
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub features: Vec<String>,
    pub serial_prefixes: Vec<String>,
    /// External verification portal
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Number of brands in one category of the directory filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCountView {
    /// Category key, or "all"
    pub category: String,
    pub label: String,
    pub count: usize,
}

/// One row of the serial prefix guide
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefixGuideEntryView {
    pub brand: String,
    pub prefixes: Vec<String>,
}

/// One cross-brand prefix overlap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionView {
    pub earlier_brand: String,
    pub earlier_prefix: String,
    pub later_brand: String,
    pub later_prefix: String,
    pub shadowed: bool,
}
