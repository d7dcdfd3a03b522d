/// Mock implementations for testing
mod mock_content_source;
mod mock_kba_repository;
mod mock_progress_reporter;

pub use mock_content_source::MockContentSource;
pub use mock_kba_repository::MockKbaRepository;
pub use mock_progress_reporter::MockProgressReporter;
