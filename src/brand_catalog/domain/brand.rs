use super::{Category, SerialPrefix};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Maximum length for brand ids
const MAX_BRAND_ID_LENGTH: usize = 64;

/// NewType wrapper for the brand slug with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrandId(String);

impl BrandId {
    pub fn new(id: String) -> Result<Self> {
        if id.is_empty() {
            anyhow::bail!("Brand id cannot be empty");
        }

        if id.len() > MAX_BRAND_ID_LENGTH {
            anyhow::bail!(
                "Brand id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_BRAND_ID_LENGTH
            );
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Brand id contains invalid characters. Only lowercase letters, digits and hyphens are allowed."
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BrandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unvalidated brand as it appears in a catalog file.
///
/// Converted into a [`BrandRecord`] with `TryFrom`, which enforces every
/// field constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub serial_prefixes: Vec<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// A manufacturer entry of the catalog. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandRecord {
    id: BrandId,
    name: String,
    description: String,
    category: Category,
    features: Vec<String>,
    serial_prefixes: Vec<SerialPrefix>,
    url: String,
    logo: Option<String>,
}

impl BrandRecord {
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Prefixes in declaration order
    pub fn serial_prefixes(&self) -> &[SerialPrefix] {
        &self.serial_prefixes
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }
}

impl TryFrom<BrandEntry> for BrandRecord {
    type Error = CatalogError;

    fn try_from(entry: BrandEntry) -> std::result::Result<Self, Self::Error> {
        let raw_id = entry.id.clone();
        let invalid = |reason: String| CatalogError::InvalidBrand {
            id: raw_id.clone(),
            reason,
        };

        let id = BrandId::new(entry.id).map_err(|e| invalid(e.to_string()))?;

        let name = entry.name.trim().to_string();
        if name.is_empty() {
            return Err(invalid("name cannot be empty".to_string()));
        }

        let category = entry.category.parse::<Category>().map_err(invalid)?;

        if entry.features.iter().any(|f| f.trim().is_empty()) {
            return Err(invalid("feature labels cannot be empty".to_string()));
        }

        if entry.serial_prefixes.is_empty() {
            return Err(invalid(
                "at least one serial prefix is required".to_string(),
            ));
        }
        let serial_prefixes = entry
            .serial_prefixes
            .into_iter()
            .map(SerialPrefix::new)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| invalid(e.to_string()))?;

        let url = entry.url.trim().to_string();
        let has_host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(invalid(
                "url must start with http:// or https://".to_string(),
            ));
        }

        Ok(Self {
            id,
            name,
            description: entry.description.trim().to_string(),
            category,
            features: entry.features,
            serial_prefixes,
            url,
            logo: entry.logo.filter(|l| !l.trim().is_empty()),
        })
    }
}
