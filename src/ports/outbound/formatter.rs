use crate::application::read_models::{DetailReport, TableReadModel};
use crate::shared::Result;

/// PreviewFormatter port for rendering the view read models
pub trait PreviewFormatter {
    /// Renders the content table
    fn format_table(&self, model: &TableReadModel) -> Result<String>;

    /// Renders the rule detail page
    fn format_detail(&self, report: &DetailReport) -> Result<String>;
}
