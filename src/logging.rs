use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Diagnostics go to stderr so stdout carries nothing but summary blocks.
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
