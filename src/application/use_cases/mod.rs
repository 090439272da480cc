/// Use cases module containing application business logic orchestration
mod audit_catalog;
mod browse_directory;
mod detect_brand;
mod load_catalog;

pub use audit_catalog::AuditCatalogUseCase;
pub use browse_directory::BrowseDirectoryUseCase;
pub use detect_brand::DetectBrandUseCase;
pub use load_catalog::LoadCatalogUseCase;
