//! Tracing subscriber setup for the binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive used when no `RUST_LOG` is set.
pub fn filter_directive(debug: bool) -> &'static str {
    if debug {
        "pipensure=debug"
    } else {
        "pipensure=info"
    }
}

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
pub fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new(filter_directive(true))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_directive(false)))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
