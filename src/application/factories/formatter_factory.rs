use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::PreviewFormatter;

/// Factory for creating view formatters
///
/// Selects the formatter adapter for an output format. It belongs in the
/// application layer as it orchestrates the selection of infrastructure
/// adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `color` - Whether text output may use terminal colours
    ///
    /// # Examples
    /// ```
    /// use content_preview::application::dto::OutputFormat;
    /// use content_preview::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn PreviewFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::new(color)),
        }
    }
}
