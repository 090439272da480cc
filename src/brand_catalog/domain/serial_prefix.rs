use crate::shared::Result;

/// Maximum length for a serial prefix
const MAX_PREFIX_LENGTH: usize = 32;

/// A serial-number prefix as declared in the catalog.
///
/// Matching is case-insensitive, so the upper-cased form is computed once
/// at construction and used for every comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialPrefix {
    declared: String,
    normalized: String,
}

impl SerialPrefix {
    pub fn new(prefix: String) -> Result<Self> {
        let declared = prefix.trim().to_string();

        if declared.is_empty() {
            anyhow::bail!("Serial prefix cannot be empty");
        }

        if declared.len() > MAX_PREFIX_LENGTH {
            anyhow::bail!(
                "Serial prefix '{}' is too long ({} bytes). Maximum allowed: {} bytes",
                declared,
                declared.len(),
                MAX_PREFIX_LENGTH
            );
        }

        if !declared
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            anyhow::bail!(
                "Serial prefix '{}' contains invalid characters. Only ASCII letters, digits and hyphens are allowed.",
                declared
            );
        }

        let normalized = declared.to_ascii_uppercase();
        Ok(Self {
            declared,
            normalized,
        })
    }

    /// The prefix as written in the catalog
    pub fn as_str(&self) -> &str {
        &self.declared
    }

    /// Upper-cased form used for matching
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Whether an already-normalized serial starts with this prefix
    pub fn matches(&self, normalized_serial: &str) -> bool {
        normalized_serial.starts_with(&self.normalized)
    }
}

impl std::fmt::Display for SerialPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.declared)
    }
}
