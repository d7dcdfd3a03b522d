/// ProgressReporter port for user feedback while remote work is in flight
pub trait ProgressReporter: Send + Sync {
    /// Reports a one-off message
    fn report(&self, message: &str);

    /// Shows an indeterminate loading indicator with a message
    fn start_loading(&self, message: &str);

    /// Clears the loading indicator, optionally leaving a final message
    fn finish_loading(&self, message: Option<&str>);
}
