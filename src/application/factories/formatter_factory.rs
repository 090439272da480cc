use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::CatalogFormatter;

/// Factory for creating catalog formatters
///
/// Lives in the application layer so the CLI only deals with
/// `OutputFormat` and never names a concrete adapter.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// `colored` only affects the text formatter; JSON and Markdown are
    /// always plain.
    ///
    /// # Examples
    /// ```
    /// use solar_verify::application::dto::OutputFormat;
    /// use solar_verify::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn CatalogFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(colored)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }
}
