use crate::brand_catalog::domain::Catalog;
use crate::brand_catalog::services::find_prefix_collisions;
use crate::ports::outbound::{CatalogSource, StatusReporter};
use crate::shared::Result;

/// LoadCatalogUseCase - loads and validates the brand catalog once per run
///
/// Loader warnings and prefixes that can never be detected under
/// first-match are surfaced through the reporter; neither is fatal.
///
/// # Type Parameters
/// * `S` - CatalogSource implementation
/// * `R` - StatusReporter implementation
pub struct LoadCatalogUseCase<S, R> {
    source: S,
    reporter: R,
}

impl<S, R> LoadCatalogUseCase<S, R>
where
    S: CatalogSource,
    R: StatusReporter,
{
    pub fn new(source: S, reporter: R) -> Self {
        Self { source, reporter }
    }

    pub fn execute(&self) -> Result<Catalog> {
        self.reporter
            .report(&format!("📖 Loading brands from {}", self.source.describe()));

        let loaded = self.source.load_catalog()?;
        for warning in &loaded.warnings {
            self.reporter.report_warning(warning);
        }

        let catalog = loaded.catalog;
        self.report_shadowed_prefixes(&catalog);

        self.reporter.report_completion(&format!(
            "✅ Loaded {} brand(s) with {} serial prefix(es)",
            catalog.len(),
            catalog.prefix_count()
        ));

        Ok(catalog)
    }

    fn report_shadowed_prefixes(&self, catalog: &Catalog) {
        for collision in find_prefix_collisions(catalog)
            .iter()
            .filter(|c| c.shadowed)
        {
            self.reporter.report_warning(&format!(
                "Prefix '{}' of '{}' is shadowed by prefix '{}' of '{}' and will never be detected under first-match.",
                collision.later_prefix.as_str(),
                collision.later.id(),
                collision.earlier_prefix.as_str(),
                collision.earlier.id()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand_catalog::domain::brand::test_support::entry;
    use crate::ports::outbound::LoadedCatalog;
    use std::cell::RefCell;

    struct StaticSource {
        loaded: LoadedCatalog,
    }

    impl CatalogSource for StaticSource {
        fn load_catalog(&self) -> Result<LoadedCatalog> {
            Ok(self.loaded.clone())
        }

        fn describe(&self) -> String {
            "test catalog".to_string()
        }
    }

    struct FailingSource;

    impl CatalogSource for FailingSource {
        fn load_catalog(&self) -> Result<LoadedCatalog> {
            anyhow::bail!("catalog unavailable")
        }

        fn describe(&self) -> String {
            "broken catalog".to_string()
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        messages: RefCell<Vec<String>>,
        warnings: RefCell<Vec<String>>,
        completions: RefCell<Vec<String>>,
    }

    impl StatusReporter for &RecordingReporter {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn report_warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }

        fn report_completion(&self, message: &str) {
            self.completions.borrow_mut().push(message.to_string());
        }
    }

    fn source(entries: Vec<crate::brand_catalog::domain::BrandEntry>) -> StaticSource {
        StaticSource {
            loaded: LoadedCatalog::new(Catalog::from_entries(entries).unwrap()),
        }
    }

    #[test]
    fn test_execute_reports_progress() {
        let reporter = RecordingReporter::default();
        let use_case = LoadCatalogUseCase::new(
            source(vec![entry("alpha", "premium", &["AL", "ALP"])]),
            &reporter,
        );

        let catalog = use_case.execute().unwrap();
        assert_eq!(catalog.len(), 1);

        assert_eq!(
            reporter.messages.borrow().as_slice(),
            ["📖 Loading brands from test catalog".to_string()]
        );
        assert_eq!(
            reporter.completions.borrow().as_slice(),
            ["✅ Loaded 1 brand(s) with 2 serial prefix(es)".to_string()]
        );
        assert!(reporter.warnings.borrow().is_empty());
    }

    #[test]
    fn test_execute_forwards_loader_warnings() {
        let reporter = RecordingReporter::default();
        let mut source = source(vec![entry("alpha", "premium", &["AL"])]);
        source.loaded.warnings.push("Unknown catalog field 'extra'".to_string());

        LoadCatalogUseCase::new(source, &reporter).execute().unwrap();
        assert_eq!(
            reporter.warnings.borrow().as_slice(),
            ["Unknown catalog field 'extra'".to_string()]
        );
    }

    #[test]
    fn test_execute_warns_about_shadowed_prefixes() {
        let reporter = RecordingReporter::default();
        let use_case = LoadCatalogUseCase::new(
            source(vec![
                entry("short", "standard", &["TS"]),
                entry("long", "premium", &["TSM"]),
            ]),
            &reporter,
        );

        use_case.execute().unwrap();
        let warnings = reporter.warnings.borrow();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Prefix 'TSM' of 'long' is shadowed by prefix 'TS' of 'short'"));
    }

    #[test]
    fn test_execute_propagates_source_error() {
        let reporter = RecordingReporter::default();
        let err = LoadCatalogUseCase::new(FailingSource, &reporter)
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("catalog unavailable"));
        assert_eq!(reporter.messages.borrow().len(), 1);
        assert!(reporter.completions.borrow().is_empty());
    }
}
