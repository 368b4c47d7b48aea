use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes logging for the application.
///
/// Console output only: this is a one-shot provisioning dialog and writes no
/// files. Default log level is "info", overridable with RUST_LOG:
/// - RUST_LOG=debug assign-cpu-number
/// - RUST_LOG=service=trace,management_runner=debug assign-cpu-number
pub fn init_logging() {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_level(true)
        .compact();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,service=debug,management_runner=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
