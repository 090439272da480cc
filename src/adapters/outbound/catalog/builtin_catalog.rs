use crate::brand_catalog::domain::{BrandEntry, Catalog};
use crate::ports::outbound::{CatalogSource, LoadedCatalog};
use crate::shared::Result;

/// Static description of a shipped brand
struct BuiltinBrand {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    logo: &'static str,
    url: &'static str,
    category: &'static str,
    features: &'static [&'static str],
    serial_prefixes: &'static [&'static str],
}

/// Brands shipped with the binary. Order is significant for detection.
const BUILTIN_BRANDS: &[BuiltinBrand] = &[
    BuiltinBrand {
        id: "longi",
        name: "Longi Solar",
        description:
            "High-efficiency monocrystalline solar panels with industry-leading performance",
        logo: "☀️",
        url: "https://share.google/9L1rs4WCAATHNcNEA",
        category: "premium",
        features: &["High Efficiency", "Monocrystalline", "25+ Year Warranty"],
        serial_prefixes: &["LR", "LONGI", "LONG", "LN", "LX", "LY", "LZ"],
    },
    BuiltinBrand {
        id: "canadian-solar",
        name: "Canadian Solar",
        description:
            "Reliable and cost-effective solar solutions for residential and commercial use",
        logo: "🍁",
        url: "https://share.google/nTyrSIICXcORoGQDY",
        category: "standard",
        features: &["Cost-Effective", "Reliable", "Global Support"],
        serial_prefixes: &["CS", "CAN", "CANADIAN", "CS6P", "CS6K", "CS3K", "CS3U"],
    },
    BuiltinBrand {
        id: "jinko",
        name: "Jinko Solar",
        description: "World-leading solar technology company with innovative panel designs",
        logo: "⚡",
        url: "https://share.google/S9FQwIhvffEL14fCY",
        category: "premium",
        features: &["Innovative Technology", "High Performance", "Advanced Design"],
        serial_prefixes: &["JKM", "JKS", "JKN", "JK", "JINKO"],
    },
    BuiltinBrand {
        id: "trina",
        name: "Trina Solar",
        description: "Innovative solar energy solutions with cutting-edge technology",
        logo: "🌍",
        url: "https://customerservice.trinasolar.com/moduleQuery.html#/",
        category: "standard",
        features: &["Innovative", "Sustainable", "Quality Assured"],
        serial_prefixes: &["TSM", "TS", "TRINA", "TSP", "TSM-DC", "TSM-PC"],
    },
    BuiltinBrand {
        id: "ja-solar",
        name: "JA Solar",
        description: "High-performance photovoltaic products with excellent reliability",
        logo: "🔋",
        url: "https://product.jasolar.com/en.html",
        category: "standard",
        features: &["High Performance", "Reliable", "Cost-Effective"],
        serial_prefixes: &["JA", "JAS", "JASOLAR", "JAM", "JAM6", "JAM7"],
    },
    BuiltinBrand {
        id: "arm-solar",
        name: "ARM Solar",
        description: "Quality solar panels and energy solutions from Pakistan",
        logo: "🛡️",
        url: "https://www.armpakpower.com/module-verification.php",
        category: "budget",
        features: &["Local Support", "Quality Assured", "Cost-Effective"],
        serial_prefixes: &["ARM", "ARMSOLAR", "ARMP", "ARMW", "ARMS"],
    },
];

impl BuiltinBrand {
    fn to_entry(&self) -> BrandEntry {
        BrandEntry {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            serial_prefixes: self.serial_prefixes.iter().map(|p| p.to_string()).collect(),
            url: self.url.to_string(),
            logo: Some(self.logo.to_string()),
        }
    }
}

/// BuiltinCatalogSource adapter serving the catalog compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalogSource;

impl BuiltinCatalogSource {
    pub fn new() -> Self {
        Self
    }

    fn entries() -> Vec<BrandEntry> {
        BUILTIN_BRANDS.iter().map(BuiltinBrand::to_entry).collect()
    }
}

impl CatalogSource for BuiltinCatalogSource {
    fn load_catalog(&self) -> Result<LoadedCatalog> {
        let catalog = Catalog::from_entries(Self::entries())?;
        Ok(LoadedCatalog::new(catalog))
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}
