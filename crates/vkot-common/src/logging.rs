use tracing_subscriber::{fmt, EnvFilter};

/// Initialize structured logging with environment filter.
/// Set VKOT_LOG=debug (or trace, info, warn, error) for verbosity control;
/// `default_filter` applies when it is unset. A layer can be loaded into a
/// process that already installed a global subscriber, so a second install
/// is silently ignored.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_env("VKOT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .try_init();
}
