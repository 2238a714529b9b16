//! Opt-in tracing output for the derive, configured through `BUILDABLE_LOG`

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive (`buildable_codegen=debug`)
pub(crate) const LOG_ENV_VAR: &str = "BUILDABLE_LOG";

static INIT: Once = Once::new();

/// Install a stderr subscriber once per compiler process.
///
/// Nothing is installed when the variable is unset or does not parse, so compiler
/// output stays untouched by default.
pub(crate) fn init() {
    INIT.call_once(|| {
        let Ok(directives) = std::env::var(LOG_ENV_VAR) else {
            return;
        };
        let Ok(filter) = EnvFilter::try_new(&directives) else {
            return;
        };

        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true);

        // Another subscriber may already be installed in this process
        let _ = Registry::default()
            .with(filter)
            .with(stderr_layer)
            .try_init();
    });
}
