use crate::brand_catalog::domain::{BrandEntry, Catalog};
use crate::ports::outbound::{CatalogSource, LoadedCatalog};
use crate::shared::error::CatalogError;
use crate::shared::security::{read_input_file, validate_not_symlink};
use std::fs;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Supported catalog file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFileFormat {
    Yaml,
    Json,
    Toml,
}

impl CatalogFileFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "yml" | "yaml" => Some(CatalogFileFormat::Yaml),
            "json" => Some(CatalogFileFormat::Json),
            "toml" => Some(CatalogFileFormat::Toml),
            _ => None,
        }
    }
}

/// Catalog file schema
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    brands: Vec<BrandEntry>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    unknown_fields: BTreeMap<String, serde_json::Value>,
}

/// FileCatalogSource adapter reading a user-supplied catalog file
///
/// The file goes through the same checks as every other input file:
/// no symlinks, regular file only, bounded size.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, format: CatalogFileFormat, content: &str) -> Result<CatalogDocument> {
        let parsed = match format {
            CatalogFileFormat::Yaml => {
                serde_yaml_ng::from_str::<CatalogDocument>(content).map_err(|e| e.to_string())
            }
            CatalogFileFormat::Json => {
                serde_json::from_str::<CatalogDocument>(content).map_err(|e| e.to_string())
            }
            CatalogFileFormat::Toml => {
                toml::from_str::<CatalogDocument>(content).map_err(|e| e.to_string())
            }
        };

        parsed.map_err(|details| {
            CatalogError::CatalogParseError {
                path: self.path.clone(),
                details,
            }
            .into()
        })
    }
}

impl CatalogSource for FileCatalogSource {
    fn load_catalog(&self) -> Result<LoadedCatalog> {
        // symlink_metadata so a dangling link is not mistaken for a missing file
        if fs::symlink_metadata(&self.path).is_err() {
            return Err(CatalogError::CatalogNotFound {
                path: self.path.clone(),
                suggestion: "Check the path given with --catalog or the 'catalog' entry of the config file.".to_string(),
            }
            .into());
        }

        let format = CatalogFileFormat::from_path(&self.path).ok_or_else(|| {
            CatalogError::UnsupportedCatalogFormat {
                path: self.path.clone(),
            }
        })?;

        validate_not_symlink(&self.path, "read").map_err(|e| CatalogError::SecurityError {
            path: self.path.clone(),
            reason: e.to_string(),
            hint: "Pass the path of the catalog file itself, not a link to it".to_string(),
        })?;

        let content = read_input_file(&self.path, "catalog file").map_err(|e| {
            CatalogError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        let document = self.parse(format, &content)?;
        let warnings = document
            .unknown_fields
            .keys()
            .map(|key| {
                format!(
                    "Unknown catalog field '{}' in {} will be ignored.",
                    key,
                    self.path.display()
                )
            })
            .collect();

        let catalog = Catalog::from_entries(document.brands)?;
        Ok(LoadedCatalog { catalog, warnings })
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}
