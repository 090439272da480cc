/// Mock implementations for testing
mod mock_catalog_source;
mod mock_output_presenter;
mod mock_status_reporter;

pub use mock_catalog_source::{brand_entry, MockCatalogSource};
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_status_reporter::MockStatusReporter;
