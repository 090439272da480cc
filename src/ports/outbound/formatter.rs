use crate::application::read_models::CatalogReadModel;
use crate::shared::Result;

/// CatalogFormatter port for rendering views
///
/// Implemented once per output format (text, JSON, Markdown).
pub trait CatalogFormatter {
    /// Renders any catalog view
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &CatalogReadModel) -> Result<String>;
}
