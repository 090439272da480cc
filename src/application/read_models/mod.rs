//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that give the formatters a denormalized,
//! serializable copy of catalog data.

pub mod brand_view;
pub mod catalog_read_model;
pub mod catalog_read_model_builder;

pub use brand_view::{BrandView, CategoryCountView, CollisionView, PrefixGuideEntryView};
pub use catalog_read_model::{
    AuditView, CatalogReadModel, DetectionView, DirectoryView, PrefixGuideView,
};
pub use catalog_read_model_builder::CatalogReadModelBuilder;
