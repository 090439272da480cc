//! solar-verify - solar panel brand catalog and serial number detection
//!
//! This library provides a catalog of solar panel manufacturers, detects a
//! panel's brand from the prefix of its serial number, and links each brand
//! to its external verification portal. It follows hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`brand_catalog`): Brand records, the catalog, and pure lookup services
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use solar_verify::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let catalog = LoadCatalogUseCase::new(BuiltinCatalogSource::new(), StderrReporter::new(true, false))
//!     .execute()?;
//!
//! let brand = detect_from_serial(&catalog, "CS6P-250P").map(|b| b.name());
//! assert_eq!(brand, Some("Canadian Solar"));
//!
//! let view = DetectBrandUseCase::new(&catalog)
//!     .execute(&DetectRequest::new("jkm400m-72", MatchPolicy::FirstMatch));
//! let output = JsonFormatter::new().format(&CatalogReadModel::Detection(view))?;
//! assert!(output.contains("Jinko Solar"));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod brand_catalog;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{BuiltinCatalogSource, FileCatalogSource};
    pub use crate::adapters::outbound::console::StderrReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::application::dto::{DetectRequest, DirectoryRequest, OutputFormat};
    pub use crate::application::read_models::CatalogReadModel;
    pub use crate::application::use_cases::{
        AuditCatalogUseCase, BrowseDirectoryUseCase, DetectBrandUseCase, LoadCatalogUseCase,
    };
    pub use crate::brand_catalog::domain::{BrandEntry, BrandRecord, Catalog, Category};
    pub use crate::brand_catalog::policies::MatchPolicy;
    pub use crate::brand_catalog::services::{
        detect_from_serial, find_prefix_collisions, search, BrandFilter, SerialDetector,
    };
    pub use crate::ports::outbound::{
        CatalogFormatter, CatalogSource, OutputPresenter, StatusReporter,
    };
    pub use crate::shared::Result;
}
