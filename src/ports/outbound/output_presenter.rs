use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered view is presented.
pub trait OutputPresenter {
    /// Presents the rendered content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
