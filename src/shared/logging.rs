use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so that rendered output on stdout stays machine-readable.
/// `verbose` raises the crate's own level to `debug` on top of the env filter.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let filter = if verbose {
        filter.add_directive(
            "content_preview=debug"
                .parse()
                .unwrap_or_else(|_| LevelFilter::DEBUG.into()),
        )
    } else {
        filter
    };

    // Keeps an already installed subscriber.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
