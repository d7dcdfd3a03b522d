/// Formatter adapters for the supported view output formats
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;
