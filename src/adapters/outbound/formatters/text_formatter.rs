use crate::application::read_models::{
    AuditView, BrandView, CatalogReadModel, DetectionView, DirectoryView, PrefixGuideView,
};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextFormatter adapter for human-readable terminal output
///
/// Colors are applied only when `colored` is set, so redirected output
/// stays free of escape sequences.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn bold(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn success(&self, text: &str) -> String {
        if self.colored {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.colored {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.colored {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn write_brand(&self, out: &mut String, brand: &BrandView) {
        let logo = brand.logo.as_deref().unwrap_or("•");
        let _ = writeln!(
            out,
            "{}  {} {}",
            logo,
            self.bold(&brand.name),
            self.dim(&format!("[{}] ({})", brand.category, brand.id))
        );
        if !brand.description.is_empty() {
            let _ = writeln!(out, "   {}", brand.description);
        }
        if !brand.features.is_empty() {
            let _ = writeln!(out, "   Features: {}", brand.features.join(", "));
        }
        let _ = writeln!(out, "   Verify:   {}", brand.url);
    }

    fn format_directory(&self, view: &DirectoryView) -> String {
        let mut out = String::new();

        let counts: Vec<String> = view
            .category_counts
            .iter()
            .map(|c| format!("{} ({})", c.label, c.count))
            .collect();
        let _ = writeln!(out, "{}", self.dim(&counts.join(" | ")));
        let _ = writeln!(
            out,
            "Showing {} of {} brands",
            view.shown, view.total
        );

        if view.brands.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.warning("No brands found"));
            let _ = writeln!(out, "Try adjusting your search or filter criteria");
            return out;
        }

        for brand in &view.brands {
            let _ = writeln!(out);
            self.write_brand(&mut out, brand);
        }
        out
    }

    fn format_detection(&self, view: &DetectionView) -> String {
        let mut out = String::new();
        match &view.brand {
            Some(brand) => {
                let _ = writeln!(
                    out,
                    "✅ {}",
                    self.success(&format!("Brand Detected: {}", brand.name))
                );
                let prefix = view.matched_prefix.as_deref().unwrap_or_default();
                let _ = writeln!(
                    out,
                    "   Serial number \"{}\" matches {} patterns (prefix: {})",
                    view.serial.trim(),
                    brand.name,
                    prefix
                );
                let _ = writeln!(out, "   Verify at: {}", self.bold(&brand.url));
            }
            None => {
                let _ = writeln!(out, "⚠️  {}", self.warning("Brand Not Detected"));
                let serial = view.serial.trim();
                if serial.is_empty() {
                    let _ = writeln!(out, "   No serial number was entered.");
                } else {
                    let _ = writeln!(
                        out,
                        "   Serial number \"{}\" doesn't match any known brand patterns.",
                        serial
                    );
                }
                let _ = writeln!(
                    out,
                    "   Try selecting from the brand list (solar-verify list) or check the prefix guide (solar-verify prefixes)."
                );
            }
        }
        out
    }

    fn format_prefix_guide(&self, view: &PrefixGuideView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "📋 {}", self.bold("Serial Number Prefixes Guide"));
        for entry in &view.entries {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.bold(&entry.brand));
            let _ = writeln!(out, "   {}", entry.prefixes.join("  "));
        }
        out
    }

    fn format_audit(&self, view: &AuditView) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "🔎 Audited {} brands with {} serial prefixes",
            view.brand_count, view.prefix_count
        );

        if view.collisions.is_empty() {
            let _ = writeln!(
                out,
                "✅ {}",
                self.success("No cross-brand prefix collisions")
            );
            return out;
        }

        let _ = writeln!(
            out,
            "⚠️  {}",
            self.warning(&format!(
                "{} collision(s), {} shadowed",
                view.collisions.len(),
                view.shadowed_count()
            ))
        );
        for c in &view.collisions {
            let marker = if c.shadowed { "shadowed" } else { "overlap" };
            let _ = writeln!(
                out,
                "   {} {} ({}) vs {} ({})",
                self.dim(&format!("[{}]", marker)),
                c.earlier_brand,
                c.earlier_prefix,
                c.later_brand,
                c.later_prefix
            );
        }
        out
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl CatalogFormatter for TextFormatter {
    fn format(&self, model: &CatalogReadModel) -> Result<String> {
        let output = match model {
            CatalogReadModel::Directory(view) => self.format_directory(view),
            CatalogReadModel::Brand(brand) => {
                let mut out = String::new();
                self.write_brand(&mut out, brand);
                let _ = writeln!(out, "   Prefixes: {}", brand.serial_prefixes.join(", "));
                out
            }
            CatalogReadModel::BrandNotFound { id } => format!(
                "⚠️  {}\n   No brand with id '{}'. Run 'solar-verify list' to see all brands.\n",
                self.warning("Brand Not Found"),
                id
            ),
            CatalogReadModel::Detection(view) => self.format_detection(view),
            CatalogReadModel::PrefixGuide(view) => self.format_prefix_guide(view),
            CatalogReadModel::Audit(view) => self.format_audit(view),
        };
        Ok(output)
    }
}
