use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default quiet period before a search query is committed
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(800);

/// Debouncer commits the last pushed value once input has been quiet for the
/// configured window.
///
/// Each [`push`](Debouncer::push) cancels the pending timer task and starts a
/// new one; only a timer that fires uncancelled publishes its value on the
/// watch channel. `push` must be called from within a tokio runtime.
pub struct Debouncer<T> {
    window: Duration,
    committed: Arc<watch::Sender<T>>,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T, window: Duration) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            window,
            committed: Arc::new(sender),
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Receiver notified each time a value is committed
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.committed.subscribe()
    }

    /// Last committed value
    pub fn committed(&self) -> T {
        self.committed.borrow().clone()
    }

    /// Whether a timer is still waiting to commit
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn push(&mut self, value: T) {
        self.cancel();
        let committed = Arc::clone(&self.committed);
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            committed.send_replace(value);
        }));
    }

    /// Drops the pending value without committing it
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Commits a value immediately, cancelling any pending timer
    pub fn flush(&mut self, value: T) {
        self.cancel();
        self.committed.send_replace(value);
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
