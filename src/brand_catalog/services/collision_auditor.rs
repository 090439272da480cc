use crate::brand_catalog::domain::{BrandRecord, Catalog, SerialPrefix};

/// Two prefixes of different brands where one is a prefix of the other.
///
/// `earlier` is declared before `later` in the catalog. When `shadowed` is
/// set, `later_prefix` starts with `earlier_prefix`, so under first-match no
/// serial can reach the later brand through that prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixCollision<'a> {
    pub earlier: &'a BrandRecord,
    pub earlier_prefix: &'a SerialPrefix,
    pub later: &'a BrandRecord,
    pub later_prefix: &'a SerialPrefix,
    pub shadowed: bool,
}

/// Finds every overlapping prefix pair across brands, in catalog order.
///
/// Overlaps inside a single brand are ignored; they cannot change which
/// brand is detected.
pub fn find_prefix_collisions(catalog: &Catalog) -> Vec<PrefixCollision<'_>> {
    let brands = catalog.brands();
    let mut collisions = Vec::new();

    for (i, earlier) in brands.iter().enumerate() {
        for later in &brands[i + 1..] {
            for earlier_prefix in earlier.serial_prefixes() {
                for later_prefix in later.serial_prefixes() {
                    let a = earlier_prefix.normalized();
                    let b = later_prefix.normalized();
                    if b.starts_with(a) || a.starts_with(b) {
                        collisions.push(PrefixCollision {
                            earlier,
                            earlier_prefix,
                            later,
                            later_prefix,
                            shadowed: b.starts_with(a),
                        });
                    }
                }
            }
        }
    }

    collisions
}
