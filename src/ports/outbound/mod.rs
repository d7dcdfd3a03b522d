/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (content data, knowledge base, console).
pub mod content_source;
pub mod formatter;
pub mod kba_repository;
pub mod output_presenter;
pub mod progress_reporter;

pub use content_source::ContentSource;
pub use formatter::PreviewFormatter;
pub use kba_repository::KbaRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
