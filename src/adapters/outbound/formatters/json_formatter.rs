use crate::application::read_models::{DetailReport, TableReadModel};
use crate::ports::outbound::PreviewFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting the read models as pretty-printed JSON
///
/// Field order follows the read model structs, and hit payloads keep their
/// input key order.
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl PreviewFormatter for JsonFormatter {
    fn format_table(&self, model: &TableReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(Into::into)
    }

    fn format_detail(&self, report: &DetailReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(Into::into)
    }
}
