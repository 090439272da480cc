use crate::application::read_models::CatalogReadModel;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Envelope written for `show` when the id is unknown
#[derive(Serialize)]
struct NotFound<'a> {
    id: &'a str,
    brand: Option<()>,
}

/// JsonFormatter adapter producing pretty-printed JSON
///
/// Each view is serialized as-is; the shape of the document depends on
/// the command that produced it.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonFormatter {
    fn format(&self, model: &CatalogReadModel) -> Result<String> {
        let json = match model {
            CatalogReadModel::Directory(view) => serde_json::to_string_pretty(view),
            CatalogReadModel::Brand(view) => serde_json::to_string_pretty(view),
            CatalogReadModel::BrandNotFound { id } => {
                serde_json::to_string_pretty(&NotFound { id, brand: None })
            }
            CatalogReadModel::Detection(view) => serde_json::to_string_pretty(view),
            CatalogReadModel::PrefixGuide(view) => serde_json::to_string_pretty(view),
            CatalogReadModel::Audit(view) => serde_json::to_string_pretty(view),
        }
        .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))?;

        Ok(format!("{}\n", json))
    }
}
