use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "DYNAMIC_UI_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber for the binary and the Node bridge.
///
/// `DYNAMIC_UI_LOG` takes precedence over `default_filter`. Safe to call more
/// than once; a subscriber installed elsewhere is left in place.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .try_init()
            .ok();
    });
}
