/// Market segment of a brand. Closed set; parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Premium,
    Standard,
    Budget,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Premium, Category::Standard, Category::Budget];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Premium => "premium",
            Category::Standard => "standard",
            Category::Budget => "budget",
        }
    }

    /// Capitalized label used in filter listings
    pub fn label(&self) -> &'static str {
        match self {
            Category::Premium => "Premium",
            Category::Standard => "Standard",
            Category::Budget => "Budget",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "premium" => Ok(Category::Premium),
            "standard" => Ok(Category::Standard),
            "budget" => Ok(Category::Budget),
            _ => Err(format!(
                "Invalid category: {}. Please specify 'premium', 'standard' or 'budget'",
                s
            )),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("premium").unwrap(), Category::Premium);
        assert_eq!(Category::from_str("standard").unwrap(), Category::Standard);
        assert_eq!(Category::from_str("budget").unwrap(), Category::Budget);
    }

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!(Category::from_str("PREMIUM").unwrap(), Category::Premium);
        assert_eq!(Category::from_str(" Budget ").unwrap(), Category::Budget);
    }

    #[test]
    fn test_category_from_str_invalid() {
        let error = Category::from_str("luxury").unwrap_err();
        assert!(error.contains("Invalid category"));
        assert!(error.contains("luxury"));
    }

    #[test]
    fn test_category_display_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(&category.to_string()).unwrap(), category);
        }
    }

    #[test]
    fn test_category_label() {
        assert_eq!(Category::Premium.label(), "Premium");
        assert_eq!(Category::Budget.label(), "Budget");
    }
}
