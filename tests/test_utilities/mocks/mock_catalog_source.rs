use solar_verify::ports::outbound::LoadedCatalog;
use solar_verify::prelude::*;

/// Mock CatalogSource serving in-memory entries
pub struct MockCatalogSource {
    entries: Vec<BrandEntry>,
    warnings: Vec<String>,
    should_fail: bool,
}

impl MockCatalogSource {
    pub fn new(entries: Vec<BrandEntry>) -> Self {
        Self {
            entries,
            warnings: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            entries: Vec::new(),
            warnings: Vec::new(),
            should_fail: true,
        }
    }

    pub fn with_warning(mut self, warning: &str) -> Self {
        self.warnings.push(warning.to_string());
        self
    }
}

impl CatalogSource for MockCatalogSource {
    fn load_catalog(&self) -> Result<LoadedCatalog> {
        if self.should_fail {
            anyhow::bail!("Mock catalog source failure");
        }
        let mut loaded = LoadedCatalog::new(Catalog::from_entries(self.entries.clone())?);
        loaded.warnings = self.warnings.clone();
        Ok(loaded)
    }

    fn describe(&self) -> String {
        "mock catalog".to_string()
    }
}

/// Builds a valid entry with the given prefixes
pub fn brand_entry(id: &str, name: &str, category: &str, prefixes: &[&str]) -> BrandEntry {
    BrandEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} panels", name),
        category: category.to_string(),
        features: vec!["Reliable".to_string()],
        serial_prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        url: format!("https://{}.example.com/verify", id),
        logo: None,
    }
}
