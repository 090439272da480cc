use crate::application::read_models::{
    AuditView, BrandView, CatalogReadModel, DetectionView, DirectoryView, PrefixGuideView,
};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// Markdown table header for brand listings
const BRAND_TABLE_HEADER: &str = "| Brand | Category | Features | Verification |\n";

/// Markdown table separator line for brand listings
const BRAND_TABLE_SEPARATOR: &str = "|-------|----------|----------|--------------|\n";

/// Markdown table header for the prefix guide
const PREFIX_TABLE_HEADER: &str = "| Brand | Serial Prefixes |\n";

/// Markdown table separator line for the prefix guide
const PREFIX_TABLE_SEPARATOR: &str = "|-------|-----------------|\n";

/// MarkdownFormatter adapter for Markdown documents
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Wraps user-entered text in an inline code span that survives backticks
    fn inline_code(text: &str) -> String {
        let longest_run = text
            .split(|c| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        let fence = "`".repeat(longest_run + 1);
        if longest_run == 0 {
            format!("{}{}{}", fence, text, fence)
        } else {
            format!("{} {} {}", fence, text, fence)
        }
    }

    fn brand_link(brand: &BrandView) -> String {
        format!(
            "[{}]({})",
            Self::escape_markdown_table_cell(&brand.name),
            brand.url
        )
    }

    fn code_list(items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("`{}`", item))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn format_directory(view: &DirectoryView) -> String {
        let mut output = String::from("# Solar Panel Brands\n\n");

        let counts: Vec<String> = view
            .category_counts
            .iter()
            .map(|c| format!("{} ({})", c.label, c.count))
            .collect();
        if !counts.is_empty() {
            output.push_str(&format!("{}\n\n", counts.join(" · ")));
        }
        output.push_str(&format!(
            "Showing {} of {} brands\n\n",
            view.shown, view.total
        ));

        if view.brands.is_empty() {
            output.push_str("_No brands found. Try adjusting your search or filter criteria._\n");
            return output;
        }

        output.push_str(BRAND_TABLE_HEADER);
        output.push_str(BRAND_TABLE_SEPARATOR);
        for brand in &view.brands {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&brand.name),
                brand.category,
                Self::escape_markdown_table_cell(&brand.features.join(", ")),
                Self::escape_markdown_table_cell(&brand.url)
            ));
        }
        output
    }

    fn format_brand(brand: &BrandView) -> String {
        let mut output = format!("## {}\n\n", brand.name);
        if !brand.description.is_empty() {
            output.push_str(&format!("{}\n\n", brand.description));
        }
        output.push_str(&format!("- **Id**: `{}`\n", brand.id));
        output.push_str(&format!("- **Category**: {}\n", brand.category));
        if !brand.features.is_empty() {
            output.push_str(&format!("- **Features**: {}\n", brand.features.join(", ")));
        }
        output.push_str(&format!(
            "- **Serial prefixes**: {}\n",
            Self::code_list(&brand.serial_prefixes)
        ));
        output.push_str(&format!("- **Verification**: {}\n", Self::brand_link(brand)));
        output
    }

    fn format_detection(view: &DetectionView) -> String {
        let mut output = String::from("## Serial Number Detection\n\n");
        output.push_str(&format!(
            "- **Serial**: {}\n",
            Self::inline_code(&view.normalized_serial)
        ));
        output.push_str(&format!("- **Policy**: {}\n", view.policy));

        match (&view.brand, &view.matched_prefix) {
            (Some(brand), prefix) => {
                output.push_str(&format!("- **Brand**: {}\n", Self::brand_link(brand)));
                if let Some(prefix) = prefix {
                    output.push_str(&format!("- **Matched prefix**: `{}`\n", prefix));
                }
            }
            (None, _) => {
                output.push_str(
                    "- **Brand**: not detected. The serial doesn't match any known brand patterns.\n",
                );
            }
        }
        output
    }

    fn format_prefix_guide(view: &PrefixGuideView) -> String {
        let mut output = String::from("## Serial Number Prefixes Guide\n\n");
        output.push_str(PREFIX_TABLE_HEADER);
        output.push_str(PREFIX_TABLE_SEPARATOR);
        for entry in &view.entries {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&entry.brand),
                Self::code_list(&entry.prefixes)
            ));
        }
        output
    }

    fn format_audit(view: &AuditView) -> String {
        let mut output = String::from("## Prefix Collision Audit\n\n");
        output.push_str(&format!(
            "{} brands, {} serial prefixes, {} collision(s), {} shadowed\n",
            view.brand_count,
            view.prefix_count,
            view.collisions.len(),
            view.shadowed_count()
        ));

        if view.collisions.is_empty() {
            return output;
        }

        output.push_str("\n| Earlier Brand | Prefix | Later Brand | Prefix | Shadowed |\n");
        output.push_str("|---------------|--------|-------------|--------|----------|\n");
        for c in &view.collisions {
            output.push_str(&format!(
                "| {} | `{}` | {} | `{}` | {} |\n",
                Self::escape_markdown_table_cell(&c.earlier_brand),
                c.earlier_prefix,
                Self::escape_markdown_table_cell(&c.later_brand),
                c.later_prefix,
                if c.shadowed { "yes" } else { "no" }
            ));
        }
        output
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for MarkdownFormatter {
    fn format(&self, model: &CatalogReadModel) -> Result<String> {
        let output = match model {
            CatalogReadModel::Directory(view) => Self::format_directory(view),
            CatalogReadModel::Brand(brand) => Self::format_brand(brand),
            CatalogReadModel::BrandNotFound { id } => {
                format!(
                    "## Brand Not Found\n\nNo brand with id {}.\n",
                    Self::inline_code(id)
                )
            }
            CatalogReadModel::Detection(view) => Self::format_detection(view),
            CatalogReadModel::PrefixGuide(view) => Self::format_prefix_guide(view),
            CatalogReadModel::Audit(view) => Self::format_audit(view),
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{CollisionView, PrefixGuideEntryView};

    fn brand() -> BrandView {
        BrandView {
            id: "trina".to_string(),
            name: "Trina | Solar".to_string(),
            description: "Innovative solutions".to_string(),
            category: "standard".to_string(),
            features: vec!["Innovative".to_string(), "Sustainable".to_string()],
            serial_prefixes: vec!["TSM".to_string(), "TS".to_string()],
            url: "https://example.com/trina".to_string(),
            logo: None,
        }
    }

    fn format(model: CatalogReadModel) -> String {
        MarkdownFormatter::new().format(&model).unwrap()
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_directory_table() {
        let output = format(CatalogReadModel::Directory(DirectoryView {
            query: None,
            category: Some("standard".to_string()),
            shown: 1,
            total: 6,
            category_counts: vec![],
            brands: vec![brand()],
        }));
        assert!(output.contains(BRAND_TABLE_HEADER));
        assert!(output.contains("Showing 1 of 6 brands"));
        assert!(output.contains(
            "| Trina \\| Solar | standard | Innovative, Sustainable | https://example.com/trina |"
        ));
    }

    #[test]
    fn test_directory_empty() {
        let output = format(CatalogReadModel::Directory(DirectoryView {
            query: Some("zzz".to_string()),
            category: None,
            shown: 0,
            total: 6,
            category_counts: vec![],
            brands: vec![],
        }));
        assert!(output.contains("_No brands found."));
        assert!(!output.contains(BRAND_TABLE_HEADER));
    }

    #[test]
    fn test_brand_section() {
        let output = format(CatalogReadModel::Brand(brand()));
        assert!(output.starts_with("## Trina | Solar\n"));
        assert!(output.contains("- **Serial prefixes**: `TSM`, `TS`"));
        assert!(output.contains("[Trina \\| Solar](https://example.com/trina)"));
    }

    #[test]
    fn test_detection_section() {
        let output = format(CatalogReadModel::Detection(DetectionView {
            serial: "tsm-400dc".to_string(),
            normalized_serial: "TSM-400DC".to_string(),
            policy: "first-match".to_string(),
            matched_prefix: Some("TSM".to_string()),
            brand: Some(brand()),
        }));
        assert!(output.contains("- **Serial**: `TSM-400DC`"));
        assert!(output.contains("- **Matched prefix**: `TSM`"));

        let output = format(CatalogReadModel::Detection(DetectionView {
            serial: "zzz".to_string(),
            normalized_serial: "ZZZ".to_string(),
            policy: "first-match".to_string(),
            matched_prefix: None,
            brand: None,
        }));
        assert!(output.contains("not detected"));
    }

    #[test]
    fn test_serial_with_backticks_stays_in_code_span() {
        let output = format(CatalogReadModel::Detection(DetectionView {
            serial: "ab`c".to_string(),
            normalized_serial: "AB`C".to_string(),
            policy: "first-match".to_string(),
            matched_prefix: None,
            brand: None,
        }));
        assert!(output.contains("- **Serial**: `` AB`C ``"));

        let output = format(CatalogReadModel::BrandNotFound {
            id: "x``y".to_string(),
        });
        assert!(output.contains("No brand with id ``` x``y ```."));
    }

    #[test]
    fn test_directory_url_cell_is_escaped() {
        let mut brand = brand();
        brand.url = "https://example.com/verify?a=1|2".to_string();
        let output = format(CatalogReadModel::Directory(DirectoryView {
            query: None,
            category: None,
            shown: 1,
            total: 1,
            category_counts: vec![],
            brands: vec![brand],
        }));
        assert!(output.contains("| https://example.com/verify?a=1\\|2 |"));
    }

    #[test]
    fn test_prefix_guide_table() {
        let output = format(CatalogReadModel::PrefixGuide(PrefixGuideView {
            entries: vec![PrefixGuideEntryView {
                brand: "ARM Solar".to_string(),
                prefixes: vec!["ARM".to_string(), "ARMP".to_string()],
            }],
        }));
        assert!(output.contains(PREFIX_TABLE_HEADER));
        assert!(output.contains("| ARM Solar | `ARM`, `ARMP` |"));
    }

    #[test]
    fn test_audit_table() {
        let output = format(CatalogReadModel::Audit(AuditView {
            brand_count: 2,
            prefix_count: 3,
            collisions: vec![CollisionView {
                earlier_brand: "Short".to_string(),
                earlier_prefix: "TS".to_string(),
                later_brand: "Long".to_string(),
                later_prefix: "TSM".to_string(),
                shadowed: true,
            }],
        }));
        assert!(output.contains("2 brands, 3 serial prefixes, 1 collision(s), 1 shadowed"));
        assert!(output.contains("| Short | `TS` | Long | `TSM` | yes |"));
    }
}
