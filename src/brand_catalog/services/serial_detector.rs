use crate::brand_catalog::domain::{BrandRecord, Catalog, SerialPrefix};
use crate::brand_catalog::policies::MatchPolicy;

/// A serial number matched to a brand, with the prefix that matched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection<'a> {
    pub brand: &'a BrandRecord,
    pub prefix: &'a SerialPrefix,
}

/// Normalizes user input for prefix matching: trims surrounding whitespace
/// and upper-cases.
pub fn normalize_serial(serial: &str) -> String {
    serial.trim().to_uppercase()
}

/// SerialDetector - infers the manufacturer from a serial number's prefix
///
/// Brands are scanned in catalog order and, within a brand, prefixes in
/// declaration order. The [`MatchPolicy`] decides between multiple hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialDetector {
    policy: MatchPolicy,
}

impl SerialDetector {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Detects the brand for `serial`. Empty or unmatched input yields `None`.
    pub fn detect<'a>(&self, catalog: &'a Catalog, serial: &str) -> Option<Detection<'a>> {
        let normalized = normalize_serial(serial);
        if normalized.is_empty() {
            return None;
        }

        let serial = normalized.as_str();
        let mut candidates = catalog.brands().iter().flat_map(move |brand| {
            brand
                .serial_prefixes()
                .iter()
                .filter(move |prefix| prefix.matches(serial))
                .map(move |prefix| Detection { brand, prefix })
        });

        let mut best = candidates.next()?;
        if self.policy.stops_at_first() {
            return Some(best);
        }

        for candidate in candidates {
            if self.policy.prefers(candidate.prefix.len(), best.prefix.len()) {
                best = candidate;
            }
        }
        Some(best)
    }
}

/// First-match detection over the catalog
pub fn detect_from_serial<'a>(catalog: &'a Catalog, serial: &str) -> Option<&'a BrandRecord> {
    SerialDetector::new(MatchPolicy::FirstMatch)
        .detect(catalog, serial)
        .map(|detection| detection.brand)
}
