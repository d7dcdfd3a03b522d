/// Data Transfer Objects for the application layer
pub mod detail_request;
pub mod output_format;
pub mod table_request;

pub use detail_request::DetailRequest;
pub use output_format::OutputFormat;
pub use table_request::TableRequest;
