use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "esim_harness=debug";

/// Install the harness subscriber.
///
/// Honors `RUST_LOG`, falling back to `esim_harness=debug`. Output goes through
/// the test writer so `cargo test` captures it per test. Safe to call from every
/// test: only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
