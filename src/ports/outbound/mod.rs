/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach catalog storage, the output destination and the console.
pub mod catalog_source;
pub mod formatter;
pub mod output_presenter;
pub mod status_reporter;

pub use catalog_source::{CatalogSource, LoadedCatalog};
pub use formatter::CatalogFormatter;
pub use output_presenter::OutputPresenter;
pub use status_reporter::StatusReporter;
